use chrono::Local;
use payguard_core::{ImportSummary, PreviewPage, Schema};
use serde::Serialize;
use serde_json::Error;

use crate::Reporter;

#[derive(Serialize)]
pub struct JsonFormatter {
    version: String,
    timestamp: String,
    imports: Vec<ImportFormatter>,
}

#[derive(Serialize)]
struct ImportFormatter {
    source: String,
    domain: String,
    total: usize,
    valid: usize,
    invalid: usize,
    pass: bool,
    errors: Vec<ErrorFormatter>,
}

#[derive(Serialize)]
struct ErrorFormatter {
    column: String,
    message: String,
    code: String,
    errors: usize,
    error_percent: f64,
}

impl JsonFormatter {
    pub fn new(version: String) -> Self {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            version,
            timestamp,
            imports: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Reporter for JsonFormatter {
    fn on_start(&self) {}

    fn on_page(&mut self, _schema: &Schema, _page: &PreviewPage<'_>) {}

    fn on_import_result(&mut self, source: &str, summary: &ImportSummary) {
        let errors = summary
            .rule_results()
            .iter()
            .map(|r| ErrorFormatter {
                column: r.column.clone(),
                message: r.message.clone(),
                code: r.code.as_str().to_string(),
                errors: r.error_count,
                error_percent: r.error_percentage,
            })
            .collect();
        self.imports.push(ImportFormatter {
            source: source.to_string(),
            domain: summary.schema.clone(),
            total: summary.total,
            valid: summary.valid,
            invalid: summary.invalid,
            pass: summary.is_passed(),
            errors,
        });
    }

    fn on_waiting(&self) {}
}
