//! Domain layer: pure types and rules, no I/O.
//!
//! - [`message`]: the empty-message rule and the lines it produces
//! - [`record`]: the insertion-ordered JSON record
//! - [`environment`]: host profile and tool requirements

pub mod environment;
pub mod error;
pub mod message;
pub mod record;

pub use environment::{
    EnvironmentReport, OsFamily, PackageManager, SystemPackage, SystemProfile, TOOL_REQUIREMENTS,
    ToolRequirement, ToolSource, ToolStatus,
};
pub use error::DomainError;
pub use message::{Verdict, processing_line};
pub use record::{FieldValue, Indent, JsonRecord};
