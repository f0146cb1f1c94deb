use std::io::Write;

use payguard_core::{Record, RecordSink, Schema, SinkError};
use serde_json::{Map, Value};

/// Writes each accepted record as one JSON object per line, keyed by column header.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn accept(&mut self, schema: &Schema, records: &[&Record]) -> Result<usize, SinkError> {
        let headers = schema.headers();
        for record in records {
            let object: Map<String, Value> = headers
                .iter()
                .zip(record.values())
                .map(|(header, value)| Ok((header.to_string(), serde_json::to_value(value)?)))
                .collect::<Result<_, serde_json::Error>>()
                .map_err(|e| SinkError::Rejected(e.to_string()))?;
            serde_json::to_writer(&mut self.writer, &object).map_err(std::io::Error::from)?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(records.len())
    }
}
