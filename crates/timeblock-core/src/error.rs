//! Error types for timeblock-core.

use thiserror::Error;
use uuid::Uuid;

/// Errors from a scheduling run.
#[derive(Error, Debug)]
pub enum PlanError {
    /// An assigned slot references a task missing from the catalog.
    /// This signals inconsistent caller data, not a runtime condition
    /// the engine can recover from.
    #[error("assigned slot references unknown task {task_id}")]
    UnknownTask { task_id: Uuid },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Failed to serialize configuration
    #[error("failed to serialize configuration: {0}")]
    SerializeFailed(String),

    /// Invalid configuration value
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for scheduling runs.
pub type Result<T, E = PlanError> = std::result::Result<T, E>;
