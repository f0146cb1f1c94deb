use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Upload file not found: '{path}'")]
    FileNotFound { path: String },
    #[error("Cannot watch '{path}': it has no parent directory")]
    WatchTarget { path: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Delimiter must be a single ASCII character, got '{value}'")]
    InvalidDelimiter { value: String },
    #[error("Page size must be at least 1")]
    InvalidPageSize,
    #[error("Invalid date '{value}' for 'import.today', expected YYYY-MM-DD")]
    InvalidToday { value: String },
}
