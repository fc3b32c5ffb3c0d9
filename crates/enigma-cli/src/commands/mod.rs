//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod doctor;
pub mod init;
pub mod json;
pub mod message;
