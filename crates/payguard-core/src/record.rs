use std::{fmt, sync::Arc};

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    schema::Schema,
    types::{ErrorCode, Value},
    utils::date_parser::parse_date,
    view::Filter,
};

/// One failed rule on one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub column: String,
    pub code: ErrorCode,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// One parsed row. `id` is the 1-based position among non-blank data lines.
///
/// Validity is derived from `errors`; there is no way to set it independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: usize,
    values: Vec<Value>,
    errors: Vec<FieldError>,
}

impl Record {
    pub(crate) fn new(id: usize, values: Vec<Value>) -> Self {
        Self {
            id,
            values,
            errors: Vec::new(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    pub(crate) fn set_errors(&mut self, errors: Vec<FieldError>) {
        self.errors = errors;
    }

    pub fn get(&self, schema: &Schema, key: &str) -> Option<&Value> {
        schema.column_index(key).and_then(|i| self.values.get(i))
    }

    pub fn text<'a>(&'a self, schema: &Schema, key: &str) -> Option<&'a str> {
        self.get(schema, key).and_then(Value::as_str)
    }

    pub fn number(&self, schema: &Schema, key: &str) -> Option<f64> {
        self.get(schema, key).and_then(Value::as_f64)
    }

    pub fn flag(&self, schema: &Schema, key: &str) -> Option<bool> {
        match self.get(schema, key) {
            Some(Value::Flag(b)) => Some(*b),
            _ => None,
        }
    }

    /// Parse a date column using its declared format.
    pub fn date(&self, schema: &Schema, key: &str, format: &str) -> Option<NaiveDate> {
        self.text(schema, key).and_then(|s| parse_date(s, format))
    }
}

/// All records from one upload or one demo load, in input order.
///
/// A dataset is replaced wholesale on the next load; it is never merged.
#[derive(Clone)]
pub struct Dataset {
    schema: Arc<Schema>,
    records: Vec<Record>,
}

impl Dataset {
    pub(crate) fn new(schema: Arc<Schema>, records: Vec<Record>) -> Self {
        Self { schema, records }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filter(&self, filter: Filter) -> Vec<&Record> {
        crate::view::filter(&self.records, filter)
    }

    pub fn valid_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_valid()).count()
    }

    pub fn invalid_count(&self) -> usize {
        self.len() - self.valid_count()
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dataset")
            .field("schema", &self.schema.name())
            .field("records", &self.records)
            .finish()
    }
}
