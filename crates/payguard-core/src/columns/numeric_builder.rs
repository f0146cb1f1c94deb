use std::marker::PhantomData;

use crate::columns::{ColumnBuilder, ColumnRule, ColumnType, NumericType};

/// Builder for Integer (`i64`) and Decimal (`f64`) columns.
#[derive(Debug, Clone)]
pub struct NumericColumnBuilder<T: NumericType> {
    key: String,
    name: String,
    rules: Vec<ColumnRule>,
    _phantom: PhantomData<T>,
}

impl<T: NumericType> ColumnBuilder for NumericColumnBuilder<T> {
    fn key(&self) -> &str {
        self.key.as_str()
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn column_type(&self) -> ColumnType {
        T::column_type()
    }

    fn rules(&self) -> &[ColumnRule] {
        self.rules.as_slice()
    }
}

impl<T: NumericType> NumericColumnBuilder<T> {
    pub fn new(key: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            rules: Vec::new(),
            _phantom: PhantomData,
        }
    }

    /// Set numeric range (both min and max, inclusive)
    pub fn between(&mut self, min: T, max: T) -> &mut Self {
        self.rules.push(ColumnRule::NumericRange {
            name: "Between".to_string(),
            min: Some(min.to_f64()),
            max: Some(max.to_f64()),
            message: None,
        });
        self
    }

    /// Set minimum value
    pub fn min(&mut self, min: T) -> &mut Self {
        self.rules.push(ColumnRule::NumericRange {
            name: "Min".to_string(),
            min: Some(min.to_f64()),
            max: None,
            message: None,
        });
        self
    }

    /// Set maximum value
    pub fn max(&mut self, max: T) -> &mut Self {
        self.rules.push(ColumnRule::NumericRange {
            name: "Max".to_string(),
            min: None,
            max: Some(max.to_f64()),
            message: None,
        });
        self
    }

    /// Check if values are non-negative (>= 0)
    pub fn is_non_negative(&mut self) -> &mut Self {
        self.rules.push(ColumnRule::NumericRange {
            name: "IsNonNegative".to_string(),
            min: Some(0.),
            max: None,
            message: None,
        });
        self
    }

    /// Replace the message of the last rule added
    pub fn with_message(&mut self, message: &str) -> &mut Self {
        if let Some(rule) = self.rules.last_mut() {
            rule.set_message(message);
        }
        self
    }
}
