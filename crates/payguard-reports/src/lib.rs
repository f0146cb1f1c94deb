pub mod formatters;
pub mod sink;
pub mod utils;

use payguard_core::{ImportSummary, PreviewPage, Schema};
pub use formatters::{json::JsonFormatter, stdout::StdOutFormatter};
pub use sink::JsonLinesSink;

/// Events emitted while the CLI drives an import.
pub trait Reporter {
    fn on_start(&self);
    fn on_page(&mut self, schema: &Schema, page: &PreviewPage<'_>);
    fn on_import_result(&mut self, source: &str, summary: &ImportSummary);
    fn on_waiting(&self);
}
