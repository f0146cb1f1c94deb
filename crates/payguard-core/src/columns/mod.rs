pub mod date_builder;
pub mod flag_builder;
pub mod numeric_builder;
pub mod text_builder;

#[cfg(test)]
mod columns_test;

use std::fmt;

use crate::{
    types::Value,
    utils::coerce::{parse_flag, parse_leading_float, parse_leading_int},
};

pub trait ColumnBuilder {
    /// Machine name of the column, unique within a schema.
    fn key(&self) -> &str;
    /// Human label used in the CSV header and in error messages.
    fn name(&self) -> &str;
    fn column_type(&self) -> ColumnType;
    fn rules(&self) -> &[ColumnRule];
    fn format(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Integer,
    Decimal,
    Flag,
    Date,
}

impl ColumnType {
    /// Map a trimmed cell onto a typed value. Never fails.
    pub fn coerce(&self, cell: &str) -> Value {
        match self {
            ColumnType::Text | ColumnType::Date => Value::Text(cell.to_string()),
            ColumnType::Integer => Value::Integer(parse_leading_int(cell)),
            ColumnType::Decimal => Value::Decimal(parse_leading_float(cell)),
            ColumnType::Flag => Value::Flag(parse_flag(cell)),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColumnType::Text => "text",
            ColumnType::Integer => "integer",
            ColumnType::Decimal => "decimal",
            ColumnType::Flag => "flag",
            ColumnType::Date => "date",
        };
        f.write_str(s)
    }
}

pub trait NumericType: Copy {
    fn column_type() -> ColumnType;
    fn to_f64(self) -> f64;
}

impl NumericType for i64 {
    fn column_type() -> ColumnType {
        ColumnType::Integer
    }
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl NumericType for f64 {
    fn column_type() -> ColumnType {
        ColumnType::Decimal
    }
    fn to_f64(self) -> f64 {
        self
    }
}

/// Rule enum representing all possible validation rules
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnRule {
    // Presence
    Required,

    // Text rules
    StringMembers {
        members: Vec<String>,
        message: Option<String>,
    },
    StringRegex {
        name: String,
        pattern: String,
        message: String,
    },
    PhoneNumber {
        prefix: String,
        digits: usize,
    },

    // Numeric rules (works for both Integer and Decimal)
    NumericRange {
        name: String,
        min: Option<f64>,
        max: Option<f64>,
        message: Option<String>,
    },

    // Date rules
    NotInFuture,
}

impl ColumnRule {
    pub fn name(&self) -> &str {
        match self {
            ColumnRule::Required => "IsRequired",
            ColumnRule::StringMembers { .. } => "IsIn",
            ColumnRule::StringRegex { name, .. } => name.as_str(),
            ColumnRule::PhoneNumber { .. } => "IsPhoneNumber",
            ColumnRule::NumericRange { name, .. } => name.as_str(),
            ColumnRule::NotInFuture => "NotInFuture",
        }
    }

    /// Override the generated message, when the rule supports one.
    pub(crate) fn set_message(&mut self, text: &str) {
        match self {
            ColumnRule::StringMembers { message, .. }
            | ColumnRule::NumericRange { message, .. } => *message = Some(text.to_string()),
            ColumnRule::StringRegex { message, .. } => *message = text.to_string(),
            _ => {}
        }
    }
}
