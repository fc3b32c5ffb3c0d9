//! JSON Sample Builder - builds the fixed sample record and prints it.

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::MessageSink,
    domain::{Indent, JsonRecord},
    error::EnigmaResult,
};

pub const SAMPLE_NAME: &str = "Enigma";
pub const SAMPLE_AGE: i64 = 1020;

pub struct JsonSampleBuilder {
    sink: Box<dyn MessageSink>,
    indent: Indent,
}

impl JsonSampleBuilder {
    /// Builder rendering with the default two-space indent.
    pub fn new(sink: Box<dyn MessageSink>) -> Self {
        Self {
            sink,
            indent: Indent::default(),
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// The sample record: `name` then `age`.
    pub fn build(&self) -> JsonRecord {
        JsonRecord::new()
            .with("name", SAMPLE_NAME)
            .with("age", SAMPLE_AGE)
    }

    pub fn render(&self, record: &JsonRecord) -> EnigmaResult<String> {
        Ok(record.to_json_pretty(self.indent)?)
    }

    /// Build the sample, render it, and emit `JSON: <text>`.
    ///
    /// Returns the record that was printed. A sink write failure is logged
    /// and does not fail the call.
    #[instrument(skip_all, fields(indent = self.indent.width()))]
    pub fn build_and_print(&self) -> EnigmaResult<JsonRecord> {
        let record = self.build();
        let rendered = self.render(&record)?;
        debug!(fields = record.len(), "Sample record rendered");

        if let Err(e) = self.sink.emit(&format!("JSON: {rendered}")) {
            warn!(error = %e, "Dropped output line");
        }

        Ok(record)
    }
}
