use std::fmt;

use serde::Serialize;

/// A typed cell value produced by coercing a trimmed CSV cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Flag(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Decimal(f) => Some(*f),
            _ => None,
        }
    }

    /// Only text can be empty; numbers and flags always carry a value.
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Text(s) if s.is_empty())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// Validation rule families. Rules are evaluated in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleCategory {
    Presence,
    Domain,
    Format,
    Range,
    Temporal,
}

/// Stable machine-readable code attached to every validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Required,
    NotAllowed,
    InvalidFormat,
    MissingPrefix,
    OutOfRange,
    InvalidDate,
    FutureDate,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Required => "required",
            ErrorCode::NotAllowed => "not_allowed",
            ErrorCode::InvalidFormat => "invalid_format",
            ErrorCode::MissingPrefix => "missing_prefix",
            ErrorCode::OutOfRange => "out_of_range",
            ErrorCode::InvalidDate => "invalid_date",
            ErrorCode::FutureDate => "future_date",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Text("JNET".to_string()).to_string(), "JNET");
        assert_eq!(Value::Integer(1_200_000).to_string(), "1200000");
        assert_eq!(Value::Decimal(12.5).to_string(), "12.5");
        assert_eq!(Value::Decimal(20.0).to_string(), "20");
        assert_eq!(Value::Flag(false).to_string(), "false");
    }

    #[test]
    fn test_value_is_empty() {
        assert!(Value::Text(String::new()).is_empty());
        assert!(!Value::Integer(0).is_empty());
        assert!(!Value::Flag(false).is_empty());
    }

    #[test]
    fn test_category_order() {
        let mut categories = vec![
            RuleCategory::Temporal,
            RuleCategory::Format,
            RuleCategory::Presence,
            RuleCategory::Range,
            RuleCategory::Domain,
        ];
        categories.sort();
        assert_eq!(
            categories,
            vec![
                RuleCategory::Presence,
                RuleCategory::Domain,
                RuleCategory::Format,
                RuleCategory::Range,
                RuleCategory::Temporal,
            ]
        );
    }
}
