// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid arguments provided
    BadArgs(String),
    /// Invalid time range
    InvalidTimeRange(String),
    /// Destination would overwrite the source
    DestinationConflict(String),
    /// External process could not be started
    SpawnFailed(String),
    /// External process exited unsuccessfully
    ProcessFailed { program: String, code: Option<i32> },
    /// File system operation failed
    FsFail(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::InvalidTimeRange(msg) => write!(f, "Invalid time range: {}", msg),
            DomainError::DestinationConflict(msg) => write!(f, "Destination conflict: {}", msg),
            DomainError::SpawnFailed(msg) => write!(f, "Failed to start process: {}", msg),
            DomainError::ProcessFailed { program, code } => match code {
                Some(code) => write!(f, "{} exited with status {}", program, code),
                None => write!(f, "{} was terminated by a signal", program),
            },
            DomainError::FsFail(msg) => write!(f, "File system error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
