use crate::columns::ColumnType;
use crate::rules::FieldRule;

/// A column with its rules compiled into trait objects, ready to run.
pub struct ExecutableColumn {
    pub(crate) key: String,
    pub(crate) name: String,
    pub(crate) column_type: ColumnType,
    pub(crate) rules: Vec<Box<dyn FieldRule>>,
}

impl ExecutableColumn {
    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn rules(&self) -> &[Box<dyn FieldRule>] {
        self.rules.as_slice()
    }
}
