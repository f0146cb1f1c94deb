pub mod columns;
pub mod compiler;
pub mod domains;
pub mod errors;
pub mod export;
pub mod readers;
pub mod record;
pub mod results;
pub mod rules;
pub mod schema;
pub mod sink;
pub mod types;
pub mod utils;
pub mod validator;
pub mod view;
pub mod wizard;

pub use columns::{ColumnBuilder, ColumnRule, ColumnType};
pub use domains::Domain;
pub use errors::{RuleError, WizardError};
pub use export::{error_report_filename, export_errors, export_template, template_filename};
pub use readers::{ImportConfig, ImportConfigBuilder};
pub use record::{Dataset, FieldError, Record};
pub use results::{ImportSummary, RuleResult};
pub use schema::{RuleDoc, Schema, SchemaBuilder};
pub use sink::{MemorySink, RecordSink, SinkError};
pub use types::{ErrorCode, RuleCategory, Value};
pub use validator::{validate_record, Importer};
pub use view::{paginate, total_pages, Filter, Page, DEFAULT_PAGE_SIZE};
pub use wizard::{ImportWizard, PreviewPage, WizardStep};
