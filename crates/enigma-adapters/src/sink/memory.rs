//! In-memory sink for testing.

use std::sync::{Arc, PoisonError, RwLock};

use enigma_core::{
    application::{ApplicationError, ports::MessageSink},
    error::{EnigmaError, EnigmaResult},
};

/// Records every emitted line. Clones share the same buffer, so a test can
/// hand one clone to a service and inspect the other.
///
/// Once a writer panics while holding the buffer, every method reports
/// `LockPoisoned`.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<RwLock<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> EnigmaResult<Vec<String>> {
        let lines = self.lines.read().map_err(poisoned)?;
        Ok(lines.clone())
    }

    /// `true` if any line contains `needle`.
    pub fn contains(&self, needle: &str) -> EnigmaResult<bool> {
        let lines = self.lines.read().map_err(poisoned)?;
        Ok(lines.iter().any(|l| l.contains(needle)))
    }

    pub fn clear(&self) -> EnigmaResult<()> {
        self.lines.write().map_err(poisoned)?.clear();
        Ok(())
    }
}

impl MessageSink for MemorySink {
    fn emit(&self, line: &str) -> EnigmaResult<()> {
        self.lines
            .write()
            .map_err(poisoned)?
            .push(line.to_owned());
        Ok(())
    }
}

fn poisoned<G>(_: PoisonError<G>) -> EnigmaError {
    ApplicationError::LockPoisoned {
        resource: "memory sink",
    }
    .into()
}

#[cfg(test)]
mod tests {
    use enigma_core::application::{JsonSampleBuilder, MessageProcessor};

    use super::*;

    #[test]
    fn clones_share_lines() {
        let sink = MemorySink::new();
        let processor = MessageProcessor::new(Box::new(sink.clone()));

        assert!(processor.process("Test message"));
        assert_eq!(
            sink.lines().unwrap(),
            [
                "Doing something with message: Test message",
                "Helper function called with info: Test message",
            ]
        );
    }

    #[test]
    fn clear_empties_buffer() {
        let sink = MemorySink::new();
        sink.emit("one").unwrap();
        sink.clear().unwrap();
        assert!(sink.lines().unwrap().is_empty());
    }

    #[test]
    fn captures_json_sample() {
        let sink = MemorySink::new();
        JsonSampleBuilder::new(Box::new(sink.clone()))
            .build_and_print()
            .unwrap();

        assert!(sink.contains("\"name\": \"Enigma\"").unwrap());
        assert!(sink.contains("\"age\": 1020").unwrap());
    }

    #[test]
    fn poisoned_buffer_is_reported_everywhere() {
        let sink = MemorySink::new();
        sink.emit("before").unwrap();

        let shared = sink.clone();
        let result = std::thread::spawn(move || {
            let _guard = shared.lines.write().unwrap();
            panic!("writer died");
        })
        .join();
        assert!(result.is_err());

        let is_poisoned = |err: EnigmaError| {
            matches!(
                err,
                EnigmaError::Application(ApplicationError::LockPoisoned { .. })
            )
        };
        assert!(is_poisoned(sink.lines().unwrap_err()));
        assert!(is_poisoned(sink.contains("before").unwrap_err()));
        assert!(is_poisoned(sink.clear().unwrap_err()));
        assert!(is_poisoned(sink.emit("after").unwrap_err()));
    }
}
