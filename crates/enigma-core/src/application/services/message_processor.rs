//! Message Processor - validates and "processes" a text message.
//!
//! Both operations report through the injected [`MessageSink`] and return a
//! plain boolean. Neither ever fails: a sink that cannot write is logged and
//! otherwise ignored.

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::MessageSink,
    domain::{Verdict, processing_line},
};

pub struct MessageProcessor {
    sink: Box<dyn MessageSink>,
}

impl MessageProcessor {
    pub fn new(sink: Box<dyn MessageSink>) -> Self {
        Self { sink }
    }

    /// Announce the message, then validate it.
    ///
    /// Returns `true` iff the message is non-empty.
    #[instrument(skip_all, fields(message_len = message.len()))]
    pub fn process(&self, message: &str) -> bool {
        self.emit(&processing_line(message));
        self.validate(message)
    }

    /// `false` for the empty string, `true` for anything else.
    pub fn validate(&self, info: &str) -> bool {
        let verdict = Verdict::of(info);
        self.emit(&verdict.describe(info));
        debug!(%verdict, "Message validated");
        verdict.is_accepted()
    }

    fn emit(&self, line: &str) {
        if let Err(e) = self.sink.emit(line) {
            warn!(error = %e, "Dropped output line");
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::application::{ApplicationError, ports::output::MockMessageSink};

    fn expecting(lines: &[&'static str]) -> MockMessageSink {
        let mut sink = MockMessageSink::new();
        let mut seq = Sequence::new();
        for line in lines {
            sink.expect_emit()
                .with(eq(*line))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }
        sink
    }

    #[test]
    fn do_something() {
        let processor = MessageProcessor::new(Box::new(expecting(&[
            "Doing something with message: Test message",
            "Helper function called with info: Test message",
        ])));
        assert!(processor.process("Test message"));
    }

    #[test]
    fn helper_function() {
        let processor = MessageProcessor::new(Box::new(expecting(&[
            "Helper function called with info: Test info",
        ])));
        assert!(processor.validate("Test info"));
    }

    #[test]
    fn empty_info_is_rejected() {
        let processor = MessageProcessor::new(Box::new(expecting(&[
            "Helper function received empty info.",
        ])));
        assert!(!processor.validate(""));
    }

    #[test]
    fn process_empty_message_emits_both_lines() {
        let processor = MessageProcessor::new(Box::new(expecting(&[
            "Doing something with message: ",
            "Helper function received empty info.",
        ])));
        assert!(!processor.process(""));
    }

    #[test]
    fn sink_failure_does_not_change_result() {
        let mut sink = MockMessageSink::new();
        sink.expect_emit().times(2).returning(|_| {
            Err(ApplicationError::SinkWrite {
                reason: "broken pipe".into(),
            }
            .into())
        });

        let processor = MessageProcessor::new(Box::new(sink));
        assert!(processor.process("still fine"));
    }
}
