//! Driven (output) ports - implemented by infrastructure.

use std::path::PathBuf;

use crate::error::EnigmaResult;

/// Port for human-readable output lines.
///
/// Implemented by:
/// - `enigma_adapters::sink::ConsoleSink` (production, stdout)
/// - `enigma_adapters::sink::MemorySink` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait MessageSink: Send + Sync {
    /// Write one line. Implementations append the line terminator.
    fn emit(&self, line: &str) -> EnigmaResult<()>;
}

/// Port for locating executables.
///
/// Implemented by:
/// - `enigma_adapters::tool_locator::PathToolLocator` (production, searches `PATH`)
/// - `enigma_adapters::tool_locator::StaticToolLocator` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ToolLocator: Send + Sync {
    /// Full path of `program`, or `None` if it is not installed.
    fn locate(&self, program: &str) -> EnigmaResult<Option<PathBuf>>;
}
