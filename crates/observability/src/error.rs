//! Error types for logging setup

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber was already installed
    #[error("Failed to install log subscriber: {0}")]
    InitFailed(String),

    /// The log level filter could not be parsed
    #[error("Invalid log filter {filter:?}: {reason}")]
    InvalidFilter { filter: String, reason: String },
}
