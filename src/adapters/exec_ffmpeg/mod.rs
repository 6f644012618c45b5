//! FFmpeg execution adapter
//!
//! Runs the assembled command as a child process and waits for it to exit.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, info};

use crate::domain::errors::*;
use crate::engine::FfmpegCommand;
use crate::ports::*;

/// Child-process based execution adapter
#[derive(Debug, Default)]
pub struct FFmpegAdapter;

impl FFmpegAdapter {
    /// Create new FFmpeg adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExecutePort for FFmpegAdapter {
    async fn run(&self, command: &FfmpegCommand) -> Result<(), DomainError> {
        debug!(program = %command.program, args = ?command.args, "Spawning process");

        let status = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|e| DomainError::SpawnFailed(format!("{}: {}", command.program, e)))?;

        if status.success() {
            info!(program = %command.program, "Process finished successfully");
            Ok(())
        } else {
            error!(program = %command.program, code = ?status.code(), "Process failed");
            Err(DomainError::ProcessFailed {
                program: command.program.clone(),
                code: status.code(),
            })
        }
    }
}
