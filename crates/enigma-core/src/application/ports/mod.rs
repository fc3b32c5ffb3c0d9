//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `enigma-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by application, implemented by infrastructure
//!   - `MessageSink`: receives human-readable console lines
//!   - `ToolLocator`: finds executables on the host

pub mod output;

pub use output::{MessageSink, ToolLocator};
