//! `enigma process` / `enigma validate`.

use tracing::debug;

use enigma_adapters::ConsoleSink;
use enigma_core::application::MessageProcessor;

use crate::{
    cli::MessageArgs,
    error::{CliError, CliResult},
};

/// Announce the message, then validate it. Empty messages exit with 2.
pub fn process(args: MessageArgs) -> CliResult<()> {
    let processor = MessageProcessor::new(Box::new(ConsoleSink));
    let accepted = processor.process(&args.message);
    debug!(accepted, "Message processed");

    if accepted {
        Ok(())
    } else {
        Err(CliError::EmptyMessage { command: "process" })
    }
}

/// Validate the message only.
pub fn validate(args: MessageArgs) -> CliResult<()> {
    let processor = MessageProcessor::new(Box::new(ConsoleSink));
    if processor.validate(&args.message) {
        Ok(())
    } else {
        Err(CliError::EmptyMessage {
            command: "validate",
        })
    }
}
