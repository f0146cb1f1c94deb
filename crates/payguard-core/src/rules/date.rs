use crate::{
    rules::{FieldRule, ValidationContext, Violation},
    types::{ErrorCode, RuleCategory, Value},
    utils::date_parser::parse_date,
};

/// Rejects cells that do not parse as a date in the column format.
/// Empty cells are left to `RequiredCheck`.
pub struct DateFormatCheck {
    format: String,
    message: String,
}

impl DateFormatCheck {
    pub fn new(label: &str, format: String) -> Self {
        let message = format!("{} must be a valid date ({})", label, display_format(&format));
        Self { format, message }
    }
}

/// `%Y-%m-%d` -> `YYYY-MM-DD`
fn display_format(format: &str) -> String {
    format
        .replace("%Y", "YYYY")
        .replace("%m", "MM")
        .replace("%d", "DD")
}

impl FieldRule for DateFormatCheck {
    fn name(&self) -> &str {
        "TypeCheck"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Format
    }

    fn describe(&self) -> String {
        format!("date formatted as {}", display_format(&self.format))
    }

    fn validate(&self, value: &Value, _ctx: &ValidationContext) -> Option<Violation> {
        let text = value.as_str().unwrap_or_default();
        if text.is_empty() || parse_date(text, &self.format).is_some() {
            None
        } else {
            Some(Violation::new(ErrorCode::InvalidDate, self.message.as_str()))
        }
    }
}

/// Rejects dates strictly after the validation date. Unparseable cells are
/// left to `DateFormatCheck`.
pub struct NotInFutureCheck {
    format: String,
    message: String,
}

impl NotInFutureCheck {
    pub fn new(label: &str, format: String) -> Self {
        Self {
            format,
            message: format!("{} cannot be in the future", sentence_case(label)),
        }
    }
}

/// `Joining Date` -> `Joining date`
fn sentence_case(label: &str) -> String {
    let mut words = label.split(' ');
    let mut out = words.next().unwrap_or_default().to_string();
    for word in words {
        out.push(' ');
        if word.chars().all(|c| c.is_uppercase() || !c.is_alphabetic()) {
            // Acronyms such as CTC keep their case
            out.push_str(word);
        } else {
            out.push_str(&word.to_lowercase());
        }
    }
    out
}

impl FieldRule for NotInFutureCheck {
    fn name(&self) -> &str {
        "NotInFuture"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Temporal
    }

    fn describe(&self) -> String {
        "not after today".to_string()
    }

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> Option<Violation> {
        let date = parse_date(value.as_str()?, &self.format)?;
        (date > ctx.today).then(|| Violation::new(ErrorCode::FutureDate, self.message.as_str()))
    }
}
