// Ports - Interface definitions (contracts)

use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::engine::FfmpegCommand;

/// Port for running the external media tool
#[async_trait]
pub trait ExecutePort: Send + Sync {
    /// Run the command to completion. A non-zero exit status is an error.
    async fn run(&self, command: &FfmpegCommand) -> Result<(), DomainError>;
}

/// Port for file system queries
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Size of a file in bytes
    async fn file_size(&self, path: &Path) -> Result<u64, DomainError>;
}
