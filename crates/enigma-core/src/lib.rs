//! Enigma Core
//!
//! Domain and application layers for the Enigma scaffold, laid out as ports
//! and adapters.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            enigma-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │  (MessageProcessor, JsonSampleBuilder,  │
//! │           EnvironmentService)           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │        (MessageSink, ToolLocator)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     enigma-adapters (Infrastructure)    │
//! │ (ConsoleSink, MemorySink, PathLocator)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use enigma_core::prelude::*;
//! # fn sink() -> Box<dyn MessageSink> { unimplemented!() }
//!
//! let processor = MessageProcessor::new(sink());
//! assert!(processor.process("Test message"));
//! assert!(!processor.validate(""));
//!
//! let builder = JsonSampleBuilder::new(sink());
//! let record = builder.build_and_print().unwrap();
//! assert_eq!(record.len(), 2);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EnvironmentService, JsonSampleBuilder, MessageProcessor,
        ports::{MessageSink, ToolLocator},
    };
    pub use crate::domain::{
        EnvironmentReport, FieldValue, Indent, JsonRecord, OsFamily, PackageManager,
        SystemProfile, ToolStatus, Verdict,
    };
    pub use crate::error::{EnigmaError, EnigmaResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
