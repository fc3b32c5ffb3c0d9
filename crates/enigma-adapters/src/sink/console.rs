//! Console sink writing to standard output.

use std::io::{self, Write};

use enigma_core::{
    application::{ApplicationError, ports::MessageSink},
    error::EnigmaResult,
};

/// Production sink: one line per call on stdout, flushed immediately so
/// output interleaves correctly with log lines on stderr.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSink for ConsoleSink {
    fn emit(&self, line: &str) -> EnigmaResult<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
            .and_then(|()| out.flush())
            .map_err(map_io_error)
    }
}

fn map_io_error(err: io::Error) -> enigma_core::error::EnigmaError {
    ApplicationError::SinkWrite {
        reason: err.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_to_stdout_succeeds() {
        assert!(ConsoleSink::new().emit("hello from the console sink").is_ok());
    }

    #[test]
    fn io_errors_become_sink_errors() {
        let err = map_io_error(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert!(err.to_string().contains("pipe closed"));
    }
}
