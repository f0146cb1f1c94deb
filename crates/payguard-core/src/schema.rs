//! Ordered column schema shared by the parser, validator and exporter.
//!
//! A schema is the single description of one upload format: column order
//! (which is also the template and error-report order), the coercion applied
//! to each cell, and the compiled rules.

use crate::{
    columns::ColumnBuilder, compiler, errors::RuleError, types::RuleCategory,
    validator::ExecutableColumn,
};

pub struct Schema {
    name: String,
    columns: Box<[ExecutableColumn]>,
    // (column index, rule index), sorted by rule category
    plan: Box<[(usize, usize)]>,
}

/// One line of rule documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDoc {
    pub column: String,
    pub rule: String,
    pub category: RuleCategory,
    pub description: String,
}

impl Schema {
    pub(crate) fn new(
        name: String,
        columns: Box<[ExecutableColumn]>,
        plan: Box<[(usize, usize)]>,
    ) -> Self {
        Self {
            name,
            columns,
            plan,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn columns(&self) -> &[ExecutableColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Header labels in column order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key() == key)
    }

    pub(crate) fn plan(&self) -> &[(usize, usize)] {
        &self.plan
    }

    /// Rule names per column, in column order.
    pub fn get_rules(&self) -> Vec<(String, Vec<String>)> {
        self.columns
            .iter()
            .map(|c| {
                let names = c.rules().iter().map(|r| r.name().to_string()).collect();
                (c.name().to_string(), names)
            })
            .collect()
    }

    /// Every rule in evaluation order.
    pub fn describe_rules(&self) -> Vec<RuleDoc> {
        self.plan
            .iter()
            .map(|&(c, r)| {
                let column = &self.columns[c];
                let rule = &column.rules()[r];
                RuleDoc {
                    column: column.name().to_string(),
                    rule: rule.name().to_string(),
                    category: rule.category(),
                    description: rule.describe(),
                }
            })
            .collect()
    }
}

pub struct SchemaBuilder {
    name: String,
    columns: Vec<Box<dyn ColumnBuilder>>,
}

impl SchemaBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            columns: Vec::new(),
        }
    }

    /// Append a column. Declaration order is the CSV column order.
    pub fn column(mut self, column: impl ColumnBuilder + 'static) -> Self {
        self.columns.push(Box::new(column));
        self
    }

    pub fn build(self) -> Result<Schema, RuleError> {
        compiler::compile_schema(self.name, self.columns)
    }
}
