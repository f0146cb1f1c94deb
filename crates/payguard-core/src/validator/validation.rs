//! Record validation and the parse-then-validate entry point.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    readers::{read_records, ImportConfig},
    record::{Dataset, FieldError, Record},
    rules::ValidationContext,
    schema::Schema,
    types::Value,
};

/// Run every rule of `schema` against `values` in plan order.
///
/// Rules do not short-circuit: every failure is reported, so one record can
/// carry several errors, grouped by rule category.
pub fn validate_record(schema: &Schema, values: &[Value], ctx: &ValidationContext) -> Vec<FieldError> {
    let empty = Value::Text(String::new());
    schema
        .plan()
        .iter()
        .filter_map(|&(c, r)| {
            let column = &schema.columns()[c];
            let value = values.get(c).unwrap_or(&empty);
            column.rules()[r]
                .validate(value, ctx)
                .map(|violation| FieldError {
                    column: column.key().to_string(),
                    code: violation.code,
                    message: violation.message,
                })
        })
        .collect()
}

/// Parses uploads for one schema and validates every record.
///
/// The importer holds no dataset: each call returns a fresh one.
#[derive(Clone)]
pub struct Importer {
    schema: Arc<Schema>,
    config: ImportConfig,
}

impl Importer {
    pub fn new(schema: Schema, config: ImportConfig) -> Self {
        Self {
            schema: Arc::new(schema),
            config,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Parse `text` without validating it.
    pub fn parse(&self, text: &str) -> Vec<Record> {
        read_records(&self.schema, text, &self.config)
    }

    /// Parse and validate an upload.
    pub fn import(&self, text: &str) -> Dataset {
        let records = self.parse(text);
        self.finish(records)
    }

    /// Build a dataset from in-memory rows, exactly as if they had been uploaded.
    pub fn import_rows(&self, rows: &[&[&str]]) -> Dataset {
        let records = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let values = self
                    .schema
                    .columns()
                    .iter()
                    .enumerate()
                    .map(|(c, column)| {
                        column
                            .column_type()
                            .coerce(row.get(c).map(|cell| cell.trim()).unwrap_or_default())
                    })
                    .collect();
                Record::new(i + 1, values)
            })
            .collect();
        self.finish(records)
    }

    fn finish(&self, mut records: Vec<Record>) -> Dataset {
        let ctx = ValidationContext::new(self.config.today());
        for record in records.iter_mut() {
            let errors = validate_record(&self.schema, record.values(), &ctx);
            if !errors.is_empty() {
                debug!(row = record.id(), errors = errors.len(), "row failed validation");
            }
            record.set_errors(errors);
        }
        let dataset = Dataset::new(Arc::clone(&self.schema), records);
        info!(
            schema = self.schema.name(),
            rows = dataset.len(),
            valid = dataset.valid_count(),
            invalid = dataset.invalid_count(),
            "dataset validated"
        );
        dataset
    }
}
