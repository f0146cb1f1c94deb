use std::collections::BTreeMap;

use serde::Serialize;

use crate::{record::Dataset, types::ErrorCode};

/// Aggregate outcome of one import.
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub schema: String,
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    rule_results: Vec<RuleResult>,
}

impl ImportSummary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let total = dataset.len();
        let valid = dataset.valid_count();

        // Keyed by (column position, message) so the output follows schema order.
        let mut counts: BTreeMap<(usize, String), (String, ErrorCode, usize)> = BTreeMap::new();
        for error in dataset.records().iter().flat_map(|r| r.errors()) {
            let position = dataset
                .schema()
                .column_index(&error.column)
                .unwrap_or(usize::MAX);
            counts
                .entry((position, error.message.clone()))
                .or_insert_with(|| (error.column.clone(), error.code, 0))
                .2 += 1;
        }

        let rule_results = counts
            .into_iter()
            .map(|((_, message), (column, code, error_count))| {
                RuleResult::new(column, message, code, error_count, total)
            })
            .collect();

        Self {
            schema: dataset.schema().name().to_string(),
            total,
            valid,
            invalid: total - valid,
            rule_results,
        }
    }

    pub fn rule_results(&self) -> &[RuleResult] {
        &self.rule_results
    }

    pub fn is_passed(&self) -> bool {
        self.invalid == 0
    }
}

/// How many records failed with one particular message.
#[derive(Debug, Clone, Serialize)]
pub struct RuleResult {
    pub column: String,
    pub message: String,
    pub code: ErrorCode,
    pub error_count: usize,
    pub error_percentage: f64,
}

impl RuleResult {
    pub fn new(
        column: String,
        message: String,
        code: ErrorCode,
        error_count: usize,
        total: usize,
    ) -> Self {
        let error_percentage = if total == 0 {
            0.
        } else {
            error_count as f64 * 100. / total as f64
        };
        Self {
            column,
            message,
            code,
            error_count,
            error_percentage,
        }
    }
}
