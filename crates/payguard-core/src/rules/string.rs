use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::RuleError,
    rules::{FieldRule, ValidationContext, Violation},
    types::{ErrorCode, RuleCategory, Value},
};

// Static pattern, safe to unwrap
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// A rule to check if a value matches a regex pattern.
pub struct RegexMatch {
    name: String,
    regex: Regex,
    message: String,
}

impl RegexMatch {
    pub fn new(name: String, pattern: &str, message: String) -> Result<Self, RuleError> {
        let regex = Regex::new(pattern).map_err(|e| RuleError::InvalidRegex {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            name,
            regex,
            message,
        })
    }
}

impl FieldRule for RegexMatch {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Format
    }

    fn describe(&self) -> String {
        format!("must match /{}/", self.regex.as_str())
    }

    fn validate(&self, value: &Value, _ctx: &ValidationContext) -> Option<Violation> {
        let text = value.as_str().unwrap_or_default();
        (!self.regex.is_match(text))
            .then(|| Violation::new(ErrorCode::InvalidFormat, self.message.as_str()))
    }
}

/// A rule to check membership in a fixed set. Matching is case-sensitive and
/// the empty string is never a member.
pub struct IsInCheck {
    members: Vec<String>,
    lookup: HashSet<String>,
    message: String,
}

impl IsInCheck {
    pub fn new(label: &str, members: Vec<String>, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| default_members_message(label, &members));
        let lookup = members.iter().cloned().collect();
        Self {
            members,
            lookup,
            message,
        }
    }
}

fn default_members_message(label: &str, members: &[String]) -> String {
    let quoted: Vec<String> = members.iter().map(|m| format!("'{}'", m)).collect();
    match quoted.as_slice() {
        [only] => format!("{} must be {}", label, only),
        [first, second] => format!("{} must be either {} or {}", label, first, second),
        _ => format!("{} must be one of {}", label, quoted.join(", ")),
    }
}

impl FieldRule for IsInCheck {
    fn name(&self) -> &str {
        "IsIn"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Domain
    }

    fn describe(&self) -> String {
        format!("one of: {}", self.members.join(", "))
    }

    fn validate(&self, value: &Value, _ctx: &ValidationContext) -> Option<Violation> {
        let text = value.as_str().unwrap_or_default();
        (!self.lookup.contains(text))
            .then(|| Violation::new(ErrorCode::NotAllowed, self.message.as_str()))
    }
}

/// A rule requiring a literal country prefix followed by a fixed number of
/// digits. Whitespace anywhere in the number is ignored.
pub struct PhoneNumberCheck {
    prefix: String,
    digits: usize,
}

impl PhoneNumberCheck {
    pub fn new(prefix: String, digits: usize) -> Self {
        Self { prefix, digits }
    }
}

impl FieldRule for PhoneNumberCheck {
    fn name(&self) -> &str {
        "IsPhoneNumber"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Format
    }

    fn describe(&self) -> String {
        format!("{} followed by {} digits", self.prefix, self.digits)
    }

    fn validate(&self, value: &Value, _ctx: &ValidationContext) -> Option<Violation> {
        let text = value.as_str().unwrap_or_default();
        if !text.starts_with(self.prefix.as_str()) {
            return Some(Violation::new(
                ErrorCode::MissingPrefix,
                format!(
                    "Phone number must include country code ({})",
                    self.prefix
                ),
            ));
        }
        let compact = WHITESPACE.replace_all(text, "");
        let rest = compact.strip_prefix(self.prefix.as_str()).unwrap_or_default();
        if rest.len() == self.digits && rest.bytes().all(|b| b.is_ascii_digit()) {
            None
        } else {
            Some(Violation::new(
                ErrorCode::InvalidFormat,
                format!(
                    "Phone number must have exactly {} digits after {}",
                    self.digits, self.prefix
                ),
            ))
        }
    }
}
