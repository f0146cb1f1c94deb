//! Rule compilation module.
//!
//! Converts high-level `ColumnBuilder`s with `ColumnRule` enums into
//! `ExecutableColumn`s holding `FieldRule` trait objects, and fixes the
//! order in which the validator runs them.


use std::collections::HashSet;

use crate::{
    columns::{ColumnBuilder, ColumnRule, ColumnType},
    errors::RuleError,
    rules::{
        DateFormatCheck, FieldRule, IsInCheck, NotInFutureCheck, PhoneNumberCheck, Range,
        RegexMatch, RequiredCheck,
    },
    schema::Schema,
    utils::date_parser::{is_valid_format, DEFAULT_DATE_FORMAT},
    validator::ExecutableColumn,
};

fn incompatible(rule: &ColumnRule, builder: &dyn ColumnBuilder) -> RuleError {
    RuleError::IncompatibleRule {
        rule: rule.name().to_string(),
        column_type: builder.column_type().to_string(),
        column: builder.name().to_string(),
    }
}

fn compile_rule(
    rule: &ColumnRule,
    builder: &dyn ColumnBuilder,
    date_format: &str,
) -> Result<Box<dyn FieldRule>, RuleError> {
    let label = builder.name();
    let column_type = builder.column_type();
    match (rule, column_type) {
        (ColumnRule::Required, ColumnType::Text | ColumnType::Date) => {
            Ok(Box::new(RequiredCheck::new(label)))
        }
        (ColumnRule::StringMembers { members, message }, ColumnType::Text) => {
            if members.is_empty() {
                return Err(RuleError::EmptyMembers {
                    rule: rule.name().to_string(),
                    column: label.to_string(),
                });
            }
            Ok(Box::new(IsInCheck::new(
                label,
                members.clone(),
                message.clone(),
            )))
        }
        (
            ColumnRule::StringRegex {
                name,
                pattern,
                message,
            },
            ColumnType::Text,
        ) => Ok(Box::new(RegexMatch::new(
            name.clone(),
            pattern,
            message.clone(),
        )?)),
        (ColumnRule::PhoneNumber { prefix, digits }, ColumnType::Text) => {
            Ok(Box::new(PhoneNumberCheck::new(prefix.clone(), *digits)))
        }
        (
            ColumnRule::NumericRange {
                name,
                min,
                max,
                message,
            },
            ColumnType::Integer,
        ) => Ok(Box::new(Range::<i64>::new(
            name.clone(),
            label,
            min.map(|v| v as i64),
            max.map(|v| v as i64),
            message.clone(),
        ))),
        (
            ColumnRule::NumericRange {
                name,
                min,
                max,
                message,
            },
            ColumnType::Decimal,
        ) => Ok(Box::new(Range::<f64>::new(
            name.clone(),
            label,
            *min,
            *max,
            message.clone(),
        ))),
        (ColumnRule::NotInFuture, ColumnType::Date) => Ok(Box::new(NotInFutureCheck::new(
            label,
            date_format.to_string(),
        ))),
        _ => Err(incompatible(rule, builder)),
    }
}

/// Compile a column builder into an executable column.
///
/// Date columns always get a `DateFormatCheck`, the CSV counterpart of a type check.
///
/// # Errors
///
/// - A rule doesn't match the column type (e.g. `NumericRange` on a Text column)
/// - Invalid regex pattern, empty member list or invalid date format
pub fn compile_column(builder: &dyn ColumnBuilder) -> Result<ExecutableColumn, RuleError> {
    let date_format = builder.format().unwrap_or(DEFAULT_DATE_FORMAT);
    let mut rules: Vec<Box<dyn FieldRule>> = Vec::new();

    if builder.column_type() == ColumnType::Date {
        if !is_valid_format(date_format) {
            return Err(RuleError::InvalidDateFormat {
                format: date_format.to_string(),
                column: builder.name().to_string(),
            });
        }
        rules.push(Box::new(DateFormatCheck::new(
            builder.name(),
            date_format.to_string(),
        )));
    }

    for rule in builder.rules() {
        rules.push(compile_rule(rule, builder, date_format)?);
    }

    Ok(ExecutableColumn {
        key: builder.key().to_string(),
        name: builder.name().to_string(),
        column_type: builder.column_type(),
        rules,
    })
}

/// Compile every column and derive the evaluation plan.
///
/// The plan lists `(column, rule)` pairs sorted by rule category; the sort is
/// stable so column order, then declaration order, break ties.
pub fn compile_schema(
    name: String,
    builders: Vec<Box<dyn ColumnBuilder>>,
) -> Result<Schema, RuleError> {
    let mut seen = HashSet::new();
    for builder in &builders {
        if !seen.insert(builder.key().to_string()) {
            return Err(RuleError::DuplicateColumn(builder.key().to_string()));
        }
    }

    let columns = builders
        .iter()
        .map(|b| compile_column(b.as_ref()))
        .collect::<Result<Vec<_>, _>>()?
        .into_boxed_slice();

    let mut plan: Vec<(usize, usize)> = columns
        .iter()
        .enumerate()
        .flat_map(|(c, column)| (0..column.rules().len()).map(move |r| (c, r)))
        .collect();
    plan.sort_by_key(|&(c, r)| columns[c].rules()[r].category());

    Ok(Schema::new(name, columns, plan.into_boxed_slice()))
}
