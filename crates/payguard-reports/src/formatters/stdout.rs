use payguard_core::{ImportSummary, PreviewPage, Schema};
use prettytable::{Cell, Row, Table};

use crate::{
    utils::numbers::{format_count, format_percent},
    Reporter,
};

pub struct StdOutFormatter {
    intro: String,
    intro_len: usize,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("PayGuard v{} - Import Report", version);
        let n = s.len();
        Self {
            intro: s,
            intro_len: n,
        }
    }

    /// Preview table: one line per record with its status and every error.
    pub fn render_page(&self, schema: &Schema, page: &PreviewPage<'_>) -> String {
        let mut table = Table::new();
        let mut header = vec![Cell::new("#")];
        header.extend(schema.headers().into_iter().map(Cell::new));
        header.push(Cell::new("Status"));
        header.push(Cell::new("Errors"));
        table.add_row(Row::new(header));

        for record in &page.records {
            let mut cells = vec![Cell::new(&record.id().to_string())];
            cells.extend(record.values().iter().map(|v| Cell::new(&v.to_string())));
            cells.push(Cell::new(if record.is_valid() { "Valid" } else { "Invalid" }));
            cells.push(Cell::new(&record.error_messages().join("\n")));
            table.add_row(Row::new(cells));
        }

        format!(
            "{}Page {} of {} ({} {} records)",
            table,
            page.index,
            page.total_pages,
            format_count(page.total_items),
            page.filter
        )
    }

    pub fn render_summary(&self, source: &str, summary: &ImportSummary) -> String {
        let status = if summary.is_passed() { "PASSED" } else { "FAILED" };
        let mut out = format!(
            "\n{} [{}] ({} rows) - {}\n  valid: {}, invalid: {}\n",
            source,
            summary.schema,
            format_count(summary.total),
            status,
            format_count(summary.valid),
            format_count(summary.invalid)
        );

        if summary.rule_results().is_empty() {
            return out;
        }

        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Column"),
            Cell::new("Error"),
            Cell::new("Count"),
            Cell::new("% Rows"),
        ]));
        for rule in summary.rule_results() {
            table.add_row(Row::new(vec![
                Cell::new(&rule.column),
                Cell::new(&rule.message),
                Cell::new(&format_count(rule.error_count)),
                Cell::new(&format_percent(rule.error_percentage)),
            ]));
        }
        out.push_str(&table.to_string());
        out
    }

    /// Rule documentation for one schema, in evaluation order.
    pub fn render_rules(&self, schema: &Schema) -> String {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("Column"),
            Cell::new("Rule"),
            Cell::new("Category"),
            Cell::new("Checks"),
        ]));
        for doc in schema.describe_rules() {
            table.add_row(Row::new(vec![
                Cell::new(&doc.column),
                Cell::new(&doc.rule),
                Cell::new(&format!("{:?}", doc.category)),
                Cell::new(&doc.description),
            ]));
        }
        table.to_string()
    }

    pub fn print_waiting(&self) {
        let i = "=".repeat(self.intro_len);

        println!("\n{}", i);
        println!("Waiting for file changes...");
    }
}

impl Reporter for StdOutFormatter {
    fn on_start(&self) {
        let i = "=".repeat(self.intro_len);

        println!("{}", self.intro);
        println!("{}", i);
    }

    fn on_page(&mut self, schema: &Schema, page: &PreviewPage<'_>) {
        println!("{}", self.render_page(schema, page));
    }

    fn on_import_result(&mut self, source: &str, summary: &ImportSummary) {
        print!("{}", self.render_summary(source, summary));
    }

    fn on_waiting(&self) {
        self.print_waiting();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use payguard_core::{Domain, ImportConfigBuilder, ImportWizard};

    fn wizard() -> ImportWizard {
        let config = ImportConfigBuilder::new()
            .with_today(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
            .build();
        let mut wizard = ImportWizard::new(Domain::Employee, config).unwrap();
        wizard.next().unwrap();
        wizard.load_demo().unwrap();
        wizard
    }

    #[test]
    fn test_render_summary() {
        let wizard = wizard();
        let formatter = StdOutFormatter::new("0.1.0".to_string());
        let out = formatter.render_summary("demo", &wizard.summary().unwrap());
        assert!(out.contains("demo [employee] (12 rows) - FAILED"));
        assert!(out.contains("valid: 7, invalid: 5"));
        assert!(out.contains("Invalid email format"));
        assert!(out.contains("8.33%"));
    }

    #[test]
    fn test_render_page() {
        let wizard = wizard();
        let formatter = StdOutFormatter::new("0.1.0".to_string());
        let page = wizard.current_page().unwrap();
        let out = formatter.render_page(wizard.importer().schema(), &page);
        assert!(out.contains("Joining Date"));
        assert!(out.contains("John Smith"));
        assert!(out.contains("Invalid"));
        assert!(out.ends_with("Page 1 of 2 (12 all records)"));
    }

    #[test]
    fn test_render_rules() {
        let schema = Domain::VariablePay.schema().unwrap();
        let formatter = StdOutFormatter::new("0.1.0".to_string());
        let out = formatter.render_rules(&schema);
        assert!(out.contains("Performance Rating"));
        assert!(out.contains("IsRequired"));
        assert!(out.contains("Presence"));
    }
}
