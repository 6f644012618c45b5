//! Error handling module for ffcut

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for ffcut operations
#[derive(Error, Debug)]
pub enum FfcutError {
    /// Request, configuration or process failure from the domain layer
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML or has unknown keys
    #[error("Failed to parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Failure writing the report
    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Result type alias for ffcut operations
pub type FfcutResult<T> = std::result::Result<T, FfcutError>;
