use crate::{
    columns::{ColumnBuilder, ColumnRule, ColumnType},
    utils::date_parser::DEFAULT_DATE_FORMAT,
};

/// Builder for date columns. Cells stay text; a format check is always compiled in.
#[derive(Debug, Clone)]
pub struct DateColumnBuilder {
    key: String,
    name: String,
    format: String,
    rules: Vec<ColumnRule>,
}

impl ColumnBuilder for DateColumnBuilder {
    fn key(&self) -> &str {
        self.key.as_str()
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Date
    }

    fn rules(&self) -> &[ColumnRule] {
        self.rules.as_slice()
    }

    fn format(&self) -> Option<&str> {
        Some(self.format.as_str())
    }
}

impl DateColumnBuilder {
    pub fn new(key: &str, name: &str) -> Self {
        Self::with_format(key, name, DEFAULT_DATE_FORMAT)
    }

    pub fn with_format(key: &str, name: &str, format: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            format: format.to_string(),
            rules: Vec::new(),
        }
    }

    /// Reject empty cells
    pub fn is_required(&mut self) -> &mut Self {
        self.rules.push(ColumnRule::Required);
        self
    }

    /// Reject dates strictly after the validation date
    pub fn is_not_in_future(&mut self) -> &mut Self {
        self.rules.push(ColumnRule::NotInFuture);
        self
    }
}
