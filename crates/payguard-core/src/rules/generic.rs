use crate::{
    rules::{FieldRule, ValidationContext, Violation},
    types::{ErrorCode, RuleCategory, Value},
};

pub struct RequiredCheck {
    message: String,
}

impl RequiredCheck {
    pub fn new(label: &str) -> Self {
        Self {
            message: format!("{} is required", label),
        }
    }
}

impl FieldRule for RequiredCheck {
    fn name(&self) -> &str {
        "IsRequired"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Presence
    }

    fn describe(&self) -> String {
        "must not be empty".to_string()
    }

    fn validate(&self, value: &Value, _ctx: &ValidationContext) -> Option<Violation> {
        value
            .is_empty()
            .then(|| Violation::new(ErrorCode::Required, self.message.as_str()))
    }
}
