//! Application services.

pub mod environment_service;
pub mod json_sample;
pub mod message_processor;

pub use environment_service::EnvironmentService;
pub use json_sample::{JsonSampleBuilder, SAMPLE_AGE, SAMPLE_NAME};
pub use message_processor::MessageProcessor;
