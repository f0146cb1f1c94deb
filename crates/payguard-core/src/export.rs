//! CSV text produced for download: the blank-slate template and the error report.

use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;

use crate::{errors::RuleError, record::Dataset, schema::Schema, view::Filter};

pub const ERRORS_HEADER: &str = "Errors";
pub const ERROR_SEPARATOR: &str = "; ";

pub fn template_filename(schema: &Schema) -> String {
    format!("{}_template.csv", schema.name())
}

pub fn error_report_filename(schema: &Schema, date: NaiveDate) -> String {
    format!("{}_errors_{}.csv", schema.name(), date.format("%Y-%m-%d"))
}

/// Header line plus the illustrative `rows`, in parser column order.
pub fn export_template(schema: &Schema, rows: &[&[&str]]) -> Result<String, RuleError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(schema.headers())?;
    for row in rows {
        writer.write_record(*row)?;
    }
    Ok(String::from_utf8(writer.into_inner().map_err(|e| e.into_error())?)?)
}

/// Every invalid record with its values and an extra `Errors` column.
///
/// Returns `Ok(None)` when the dataset has no invalid record: there is
/// nothing to export, which is not a failure. All cells are quoted.
pub fn export_errors(dataset: &Dataset) -> Result<Option<String>, RuleError> {
    let invalid = dataset.filter(Filter::Error);
    if invalid.is_empty() {
        debug!(schema = dataset.schema().name(), "No invalid records to export");
        return Ok(None);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let mut header: Vec<&str> = dataset.schema().headers();
    header.push(ERRORS_HEADER);
    writer.write_record(&header)?;

    for record in &invalid {
        let mut cells: Vec<String> = record.values().iter().map(|v| v.to_string()).collect();
        cells.push(record.error_messages().join(ERROR_SEPARATOR));
        writer.write_record(&cells)?;
    }

    debug!(
        schema = dataset.schema().name(),
        count = invalid.len(),
        "Exported invalid records"
    );
    Ok(Some(String::from_utf8(
        writer.into_inner().map_err(|e| e.into_error())?,
    )?))
}
