use crate::columns::{ColumnBuilder, ColumnRule, ColumnType};

/// Boolean column: only the literal `true` is true. Carries no rules.
#[derive(Debug, Clone)]
pub struct FlagColumnBuilder {
    key: String,
    name: String,
}

impl ColumnBuilder for FlagColumnBuilder {
    fn key(&self) -> &str {
        self.key.as_str()
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Flag
    }

    fn rules(&self) -> &[ColumnRule] {
        &[]
    }
}

impl FlagColumnBuilder {
    pub fn new(key: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
        }
    }
}
