use crate::{
    columns::{ColumnBuilder, ColumnRule, ColumnType},
    errors::RuleError,
};
use regex::Regex;

pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Debug, Clone)]
pub struct TextColumnBuilder {
    key: String,
    name: String,
    rules: Vec<ColumnRule>,
}

impl ColumnBuilder for TextColumnBuilder {
    fn key(&self) -> &str {
        self.key.as_str()
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Text
    }

    fn rules(&self) -> &[ColumnRule] {
        self.rules.as_slice()
    }
}

impl TextColumnBuilder {
    pub fn new(key: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            rules: Vec::new(),
        }
    }

    /// Reject empty cells
    pub fn is_required(&mut self) -> &mut Self {
        self.rules.push(ColumnRule::Required);
        self
    }

    /// Check if value is in a set of allowed values
    pub fn is_in(&mut self, members: &[&str]) -> &mut Self {
        self.rules.push(ColumnRule::StringMembers {
            members: members.iter().map(|m| m.to_string()).collect(),
            message: None,
        });
        self
    }

    /// Match against a regex pattern, reporting `message` on mismatch
    pub fn with_regex(&mut self, pattern: &str, message: &str) -> Result<&mut Self, RuleError> {
        self.with_defined_regex("WithRegex", pattern, message)
    }

    fn with_defined_regex(
        &mut self,
        name: &str,
        pattern: &str,
        message: &str,
    ) -> Result<&mut Self, RuleError> {
        // Validate regex at build time
        Regex::new(pattern).map_err(|e| RuleError::InvalidRegex {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.rules.push(ColumnRule::StringRegex {
            name: name.to_string(),
            pattern: pattern.to_string(),
            message: message.to_string(),
        });
        Ok(self)
    }

    /// Check if string is a `local@domain.tld` email
    pub fn is_email(&mut self) -> Result<&mut Self, RuleError> {
        self.with_defined_regex("IsEmail", EMAIL_PATTERN, "Invalid email format")
    }

    /// Require `prefix` followed by exactly `digits` digits, ignoring whitespace
    pub fn is_phone_number(&mut self, prefix: &str, digits: usize) -> &mut Self {
        self.rules.push(ColumnRule::PhoneNumber {
            prefix: prefix.to_string(),
            digits,
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
