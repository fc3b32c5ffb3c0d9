//! Application layer for Enigma.
//!
//! This layer contains:
//! - **Services**: use case orchestration (MessageProcessor, JsonSampleBuilder, EnvironmentService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! Services coordinate the domain layer; the rules themselves live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{EnvironmentService, JsonSampleBuilder, MessageProcessor};

pub use ports::{MessageSink, ToolLocator};

pub use error::ApplicationError;
