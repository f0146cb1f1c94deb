use super::*;
use crate::columns::{
    date_builder::DateColumnBuilder, flag_builder::FlagColumnBuilder,
    numeric_builder::NumericColumnBuilder, text_builder::TextColumnBuilder,
};

#[test]
fn test_text_column_builder() {
    let mut builder = TextColumnBuilder::new("name", "Name");
    builder.is_required().is_in(&["JNET", "Telecom"]);

    assert_eq!(builder.key(), "name");
    assert_eq!(builder.name(), "Name");
    assert_eq!(builder.column_type(), ColumnType::Text);
    assert_eq!(builder.rules().len(), 2);
}

#[test]
fn test_text_column_with_email() {
    let mut builder = TextColumnBuilder::new("email", "Email");
    builder.is_email().unwrap();

    match &builder.rules()[0] {
        ColumnRule::StringRegex { name, message, .. } => {
            assert_eq!(name, "IsEmail");
            assert_eq!(message, "Invalid email format");
        }
        _ => panic!("Expected StringRegex rule"),
    }
}

#[test]
fn test_text_column_invalid_regex() {
    let mut builder = TextColumnBuilder::new("code", "Code");
    let result = builder.with_regex("[invalid(", "Invalid code");

    assert!(result.is_err());
    assert!(builder.rules().is_empty());
}

#[test]
fn test_text_column_with_message() {
    let mut builder = TextColumnBuilder::new("status", "Status");
    builder
        .is_in(&["Draft", "Pending"])
        .with_message("Pick a status");

    match &builder.rules()[0] {
        ColumnRule::StringMembers { message, .. } => {
            assert_eq!(message.as_deref(), Some("Pick a status"));
        }
        _ => panic!("Expected StringMembers rule"),
    }
}

#[test]
fn test_with_message_ignores_required() {
    let mut builder = TextColumnBuilder::new("name", "Name");
    builder.is_required().with_message("ignored");

    assert_eq!(builder.rules(), &[ColumnRule::Required]);
}

#[test]
fn test_integer_column_builder() {
    let mut builder = NumericColumnBuilder::<i64>::new("salary", "Salary");
    builder.min(300_000).with_message("Too low");

    assert_eq!(builder.column_type(), ColumnType::Integer);
    match &builder.rules()[0] {
        ColumnRule::NumericRange {
            min, max, message, ..
        } => {
            assert_eq!(min, &Some(300_000.));
            assert_eq!(max, &None);
            assert_eq!(message.as_deref(), Some("Too low"));
        }
        _ => panic!("Expected NumericRange rule"),
    }
}

#[test]
fn test_decimal_column_between() {
    let mut builder = NumericColumnBuilder::<f64>::new("payable", "Payable %");
    builder.between(0., 100.);

    assert_eq!(builder.column_type(), ColumnType::Decimal);
    match &builder.rules()[0] {
        ColumnRule::NumericRange { min, max, .. } => {
            assert_eq!(min, &Some(0.));
            assert_eq!(max, &Some(100.));
        }
        _ => panic!("Expected NumericRange rule"),
    }
}

#[test]
fn test_date_column_builder() {
    let mut builder = DateColumnBuilder::new("joining_date", "Joining Date");
    builder.is_required().is_not_in_future();

    assert_eq!(builder.column_type(), ColumnType::Date);
    assert_eq!(builder.format(), Some("%Y-%m-%d"));
    assert_eq!(builder.rules().len(), 2);
}

#[test]
fn test_flag_column_builder() {
    let builder = FlagColumnBuilder::new("taxable", "Taxable");

    assert_eq!(builder.column_type(), ColumnType::Flag);
    assert!(builder.rules().is_empty());
    assert_eq!(builder.format(), None);
}

#[test]
fn test_coerce() {
    assert_eq!(ColumnType::Integer.coerce("250000"), Value::Integer(250_000));
    assert_eq!(ColumnType::Integer.coerce("n/a"), Value::Integer(0));
    assert_eq!(ColumnType::Decimal.coerce("12.5"), Value::Decimal(12.5));
    assert_eq!(ColumnType::Flag.coerce("true"), Value::Flag(true));
    assert_eq!(ColumnType::Flag.coerce("True"), Value::Flag(false));
    assert_eq!(
        ColumnType::Date.coerce("2024-01-15"),
        Value::Text("2024-01-15".to_string())
    );
}
