//! `enigma json`: Build the sample record and print it.

use tracing::{debug, instrument};

use enigma_adapters::ConsoleSink;
use enigma_core::{application::JsonSampleBuilder, domain::Indent, error::EnigmaError};

use crate::{cli::JsonArgs, config::AppConfig, error::CliResult};

#[instrument(skip_all)]
pub fn execute(args: JsonArgs, config: AppConfig) -> CliResult<()> {
    let width = args.indent.unwrap_or(config.json.indent);
    let indent = Indent::new(width).map_err(EnigmaError::from)?;
    debug!(indent = indent.width(), "Rendering sample record");

    let builder = JsonSampleBuilder::new(Box::new(ConsoleSink)).with_indent(indent);
    let record = builder.build_and_print()?;
    debug!(fields = record.len(), "Sample record printed");

    Ok(())
}
