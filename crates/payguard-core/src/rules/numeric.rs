use std::fmt::{Debug, Display};

use num_traits::{Num, NumCast};

use crate::{
    rules::{FieldRule, ValidationContext, Violation},
    types::{ErrorCode, RuleCategory, Value},
};

/// Inclusive bounds check for Integer and Decimal columns.
pub struct Range<N: Num + PartialOrd + Copy + Debug> {
    name: String,
    min: Option<N>,
    max: Option<N>,
    message: String,
}

impl<N> Range<N>
where
    N: Num + PartialOrd + Copy + Debug + Display + NumCast,
{
    pub fn new(
        name: String,
        label: &str,
        min: Option<N>,
        max: Option<N>,
        message: Option<String>,
    ) -> Self {
        let message = message.unwrap_or_else(|| default_range_message(label, min, max));
        Self {
            name,
            min,
            max,
            message,
        }
    }

    fn native(value: &Value) -> Option<N> {
        match value {
            Value::Integer(i) => N::from(*i),
            Value::Decimal(f) => N::from(*f),
            _ => None,
        }
    }
}

fn default_range_message<N: Num + Display>(label: &str, min: Option<N>, max: Option<N>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{} must be between {} and {}", label, min, max),
        (Some(min), None) if min.is_zero() => format!("{} cannot be negative", label),
        (Some(min), None) => format!("{} must be at least {}", label, min),
        (None, Some(max)) => format!("{} must be at most {}", label, max),
        (None, None) => format!("{} is out of range", label),
    }
}

impl<N> FieldRule for Range<N>
where
    N: Num + PartialOrd + Copy + Debug + Display + NumCast + Send + Sync,
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Range
    }

    fn describe(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("between {} and {}", min, max),
            (Some(min), None) => format!(">= {}", min),
            (None, Some(max)) => format!("<= {}", max),
            (None, None) => "any number".to_string(),
        }
    }

    fn validate(&self, value: &Value, _ctx: &ValidationContext) -> Option<Violation> {
        let v = Self::native(value)?;
        let below = self.min.is_some_and(|min| v < min);
        let above = self.max.is_some_and(|max| v > max);
        (below || above).then(|| Violation::new(ErrorCode::OutOfRange, self.message.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn test_range_min_custom_message() {
        let rule = Range::<i64>::new(
            "Min".to_string(),
            "Salary",
            Some(300_000),
            None,
            Some("Salary must be at least ₹300,000 per annum".to_string()),
        );
        assert!(rule.validate(&Value::Integer(300_000), &ctx()).is_none());
        assert!(rule.validate(&Value::Integer(1_200_000), &ctx()).is_none());
        let violation = rule.validate(&Value::Integer(250_000), &ctx()).unwrap();
        assert_eq!(violation.code, ErrorCode::OutOfRange);
        assert_eq!(violation.message, "Salary must be at least ₹300,000 per annum");
    }

    #[test]
    fn test_range_between_default_message() {
        let rule = Range::<f64>::new("Between".to_string(), "Variable Pay %", Some(0.), Some(20.), None);
        assert!(rule.validate(&Value::Decimal(0.), &ctx()).is_none());
        assert!(rule.validate(&Value::Decimal(20.), &ctx()).is_none());
        assert!(rule.validate(&Value::Decimal(-0.5), &ctx()).is_some());
        let violation = rule.validate(&Value::Decimal(20.5), &ctx()).unwrap();
        assert_eq!(violation.message, "Variable Pay % must be between 0 and 20");
    }

    #[test]
    fn test_range_non_negative_message() {
        let rule = Range::<f64>::new("IsNonNegative".to_string(), "Amount", Some(0.), None, None);
        let violation = rule.validate(&Value::Decimal(-1.), &ctx()).unwrap();
        assert_eq!(violation.message, "Amount cannot be negative");
    }

    #[test]
    fn test_range_max_only() {
        let rule = Range::<i64>::new("Max".to_string(), "Units", None, Some(10), None);
        assert!(rule.validate(&Value::Integer(10), &ctx()).is_none());
        let violation = rule.validate(&Value::Integer(11), &ctx()).unwrap();
        assert_eq!(violation.message, "Units must be at most 10");
    }
}
