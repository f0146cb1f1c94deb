pub mod date;
pub mod generic;
pub mod numeric;
pub mod string;

use chrono::NaiveDate;

use crate::types::{ErrorCode, RuleCategory, Value};

pub use date::{DateFormatCheck, NotInFutureCheck};
pub use generic::RequiredCheck;
pub use numeric::Range;
pub use string::{IsInCheck, PhoneNumberCheck, RegexMatch};

/// Inputs shared by every rule during one validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    /// Calendar date that temporal rules compare against.
    pub today: NaiveDate,
}

impl ValidationContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

/// A failed rule on one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub code: ErrorCode,
    pub message: String,
}

impl Violation {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// A trait for defining validation rules on a single cell.
pub trait FieldRule: Send + Sync {
    /// Returns the name of the rule.
    fn name(&self) -> &str;
    /// Returns the family the rule belongs to, which fixes its evaluation order.
    fn category(&self) -> RuleCategory;
    /// One-line description used in rule documentation.
    fn describe(&self) -> String;
    /// Validates one value. Rules never fail: a broken cell is a `Violation`.
    fn validate(&self, value: &Value, ctx: &ValidationContext) -> Option<Violation>;
}
