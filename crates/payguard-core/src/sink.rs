//! Destinations for records accepted by the wizard.

use thiserror::Error;
use tracing::debug;

use crate::{record::Record, schema::Schema, types::Value};

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Records rejected: {0}")]
    Rejected(String),
}

/// Receives the valid records of a confirmed import.
///
/// `accept` returns how many records were stored. An error leaves the
/// wizard open so the save can be retried.
pub trait RecordSink {
    fn accept(&mut self, schema: &Schema, records: &[&Record]) -> Result<usize, SinkError>;
}

/// Keeps accepted rows in memory, mostly for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    headers: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RecordSink for MemorySink {
    fn accept(&mut self, schema: &Schema, records: &[&Record]) -> Result<usize, SinkError> {
        if self.headers.is_empty() {
            self.headers = schema.headers().into_iter().map(String::from).collect();
        }
        self.rows
            .extend(records.iter().map(|record| record.values().to_vec()));
        debug!(schema = schema.name(), count = records.len(), "Stored records");
        Ok(records.len())
    }
}
