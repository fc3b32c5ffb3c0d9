//! Infrastructure adapters for Enigma.
//!
//! This crate implements the ports defined in `enigma-core::application::ports`.
//! It contains all I/O operations.

pub mod sink;
pub mod tool_locator;

// Re-export commonly used adapters
pub use sink::{ConsoleSink, MemorySink};
pub use tool_locator::{PathToolLocator, StaticToolLocator};
