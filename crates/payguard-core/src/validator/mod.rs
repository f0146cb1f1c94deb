mod executable_column;
mod validation;

pub use executable_column::ExecutableColumn;
pub use validation::{validate_record, Importer};
