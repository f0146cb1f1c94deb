use thiserror::Error;

use crate::sink::SinkError;

/// Errors raised while building schemas or serialising datasets.
///
/// Row-level validation never produces a `RuleError`: failed rules are
/// attached to the offending record as [`crate::FieldError`]s instead.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid regex pattern '{pattern}': {message}")]
    InvalidRegex { pattern: String, message: String },

    #[error("Rule '{rule}' cannot be applied to {column_type} column '{column}'")]
    IncompatibleRule {
        rule: String,
        column_type: String,
        column: String,
    },

    #[error("Column '{0}' is declared more than once")]
    DuplicateColumn(String),

    #[error("Rule '{rule}' for column '{column}' needs at least one allowed value")]
    EmptyMembers { rule: String, column: String },

    #[error("Invalid date format '{format}' for column '{column}'")]
    InvalidDateFormat { format: String, column: String },

    #[error("Unknown domain '{0}'. Supported: employee, additional-pay, variable-pay")]
    UnknownDomain(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Exported text is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Errors raised by the import wizard when an action does not fit its current step.
#[derive(Error, Debug)]
pub enum WizardError {
    #[error("Cannot {action} while at step '{step}'")]
    InvalidTransition { action: String, step: String },

    #[error("No dataset loaded: upload a file or load the demo data first")]
    NoDataset,

    #[error("Failed to export records: {0}")]
    Export(#[from] RuleError),

    #[error("Failed to save valid records: {0}")]
    Sink(#[from] SinkError),
}
