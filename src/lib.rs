//! Command-line client for hosted speech recognition.
//!
//! Builds a recognition request for audio in Cloud Storage, calls the hosted
//! speech and language services, and prints the top transcript of each result.

pub mod cli;
pub mod config;
pub mod error;
pub mod google_service;
pub mod language;
pub mod pipeline;
pub mod printer;
pub mod request;
pub mod speech;
pub mod terms;

pub use cli::Cli;
pub use config::{Config, PipelineMode};
pub use error::ServiceError;
pub use pipeline::Pipeline;
