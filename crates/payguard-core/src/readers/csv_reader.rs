use csv::{ByteRecord, ReaderBuilder, Trim};
use tracing::warn;

use crate::{readers::ImportConfig, record::Record, schema::Schema};

/// Parse delimited `text` into unvalidated records.
///
/// The first line is a header and is skipped; mapping is purely positional.
/// Each physical line is one record, so an unbalanced quote cannot swallow
/// the rows after it. Blank lines are ignored and do not consume an id. Short
/// rows read missing cells as empty, extra cells are ignored. This function
/// never fails.
pub fn read_records(schema: &Schema, text: &str, config: &ImportConfig) -> Vec<Record> {
    let mut records = Vec::new();
    for line in text.lines().skip(1) {
        let Some(row) = read_line(line, config.delimiter()) else {
            continue;
        };
        if is_blank(&row) {
            continue;
        }
        let values = schema
            .columns()
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let cell = row.get(i).map(String::from_utf8_lossy).unwrap_or_default();
                column.column_type().coerce(cell.as_ref())
            })
            .collect();
        records.push(Record::new(records.len() + 1, values));
    }
    records
}

fn read_line(line: &str, delimiter: u8) -> Option<ByteRecord> {
    match read_one(line, delimiter, true) {
        Ok(row) => row,
        Err(e) => {
            warn!(error = %e, "reading line without quote handling");
            read_one(line, delimiter, false).ok().flatten()
        }
    }
}

fn read_one(line: &str, delimiter: u8, quoting: bool) -> csv::Result<Option<ByteRecord>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(quoting)
        .trim(Trim::All)
        .from_reader(line.as_bytes());
    let mut row = ByteRecord::new();
    Ok(reader.read_byte_record(&mut row)?.then_some(row))
}

fn is_blank(row: &ByteRecord) -> bool {
    row.iter().all(|cell| cell.is_empty()) && row.len() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        columns::{
            flag_builder::FlagColumnBuilder, numeric_builder::NumericColumnBuilder,
            text_builder::TextColumnBuilder,
        },
        schema::SchemaBuilder,
        types::Value,
    };

    fn schema() -> Schema {
        SchemaBuilder::new("test")
            .column(TextColumnBuilder::new("name", "Name"))
            .column(NumericColumnBuilder::<i64>::new("salary", "Salary"))
            .column(NumericColumnBuilder::<f64>::new("percent", "Percent"))
            .column(FlagColumnBuilder::new("eligible", "Eligible"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_read_positional() {
        let text = "Whatever,Header,Labels,Here\n  John Smith , 1200000 ,12.5,true\n";
        let records = read_records(&schema(), text, &ImportConfig::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), 1);
        assert_eq!(
            records[0].values(),
            &[
                Value::Text("John Smith".to_string()),
                Value::Integer(1_200_000),
                Value::Decimal(12.5),
                Value::Flag(true),
            ]
        );
    }

    #[test]
    fn test_read_short_and_long_rows() {
        let text = "h\nJane\nRaj,950000,5,false,extra,cells\n";
        let records = read_records(&schema(), text, &ImportConfig::default());
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].values(),
            &[
                Value::Text("Jane".to_string()),
                Value::Integer(0),
                Value::Decimal(0.),
                Value::Flag(false),
            ]
        );
        assert_eq!(records[1].values().len(), 4);
    }

    #[test]
    fn test_read_skips_blank_lines_without_consuming_ids() {
        let text = "h\n\nA,1\n   \n\nB,2\n";
        let records = read_records(&schema(), text, &ImportConfig::default());
        let ids: Vec<usize> = records.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(records[1].values()[0], Value::Text("B".to_string()));
    }

    #[test]
    fn test_read_keeps_row_of_empty_cells() {
        let text = "h\n,,,\n";
        let records = read_records(&schema(), text, &ImportConfig::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].values()[0], Value::Text(String::new()));
    }

    #[test]
    fn test_read_header_only_and_empty() {
        assert!(read_records(&schema(), "", &ImportConfig::default()).is_empty());
        assert!(read_records(&schema(), "Name,Salary\n", &ImportConfig::default()).is_empty());
    }

    #[test]
    fn test_read_quoted_cells() {
        let text = "h\n\"Smith, John\",\"800000\",\"1.5\",\"true\"\n";
        let records = read_records(&schema(), text, &ImportConfig::default());
        assert_eq!(records[0].values()[0], Value::Text("Smith, John".to_string()));
        assert_eq!(records[0].values()[1], Value::Integer(800_000));
    }

    #[test]
    fn test_read_crlf_and_custom_delimiter() {
        let config = crate::readers::ImportConfigBuilder::new()
            .with_delimiter(b';')
            .build();
        let text = "Name;Salary\r\nJohn;500000\r\n";
        let records = read_records(&schema(), text, &config);
        assert_eq!(records[0].values()[1], Value::Integer(500_000));
    }

    #[test]
    fn test_read_unterminated_quote_stays_in_its_row() {
        let text = "h\n\"Jane Doe,800000,1.5,true\nJohn,500000,2,false\nRaj,950000,3,true\n";
        let records = read_records(&schema(), text, &ImportConfig::default());
        let ids: Vec<usize> = records.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(records[0].values()[0], Value::Text("Jane Doe,800000,1.5,true".to_string()));
        assert_eq!(records[0].values()[1], Value::Integer(0));
        assert_eq!(records[1].values()[0], Value::Text("John".to_string()));
        assert_eq!(records[2].values()[1], Value::Integer(950_000));
    }

    #[test]
    fn test_read_quote_inside_field_is_literal() {
        let text = "h\nJo\"hn,500000,2,true\nRaj,950000,3,false\n";
        let records = read_records(&schema(), text, &ImportConfig::default());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].values()[0], Value::Text("Jo\"hn".to_string()));
        assert_eq!(records[0].values()[1], Value::Integer(500_000));
        assert_eq!(records[1].values()[0], Value::Text("Raj".to_string()));
    }

    #[test]
    fn test_read_is_deterministic() {
        let text = "h\nA,1\nB,2\n";
        let a = read_records(&schema(), text, &ImportConfig::default());
        let b = read_records(&schema(), text, &ImportConfig::default());
        assert_eq!(a, b);
    }
}
