//! Delimited text parsing.
//!
//! ```ignore
//! let config = ImportConfig::default();
//! let records = read_records(&schema, "Name,Email\nJohn,john@company.com\n", &config);
//! ```

pub mod config;
pub mod csv_reader;

pub use config::{ImportConfig, ImportConfigBuilder};
pub use csv_reader::read_records;
