//! CLI module for ffcut
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

pub mod args;
pub mod commands;

pub use args::ClipArgs;

/// ffcut
///
/// Trim a video with ffmpeg, optionally mixing selected audio tracks,
/// rescaling and recompressing it.
#[derive(Parser, Debug)]
#[command(name = "ffcut")]
#[command(about = "Trim, remix and recompress video clips with ffmpeg")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Clip to produce
    #[command(flatten)]
    pub clip: ClipArgs,

    /// ffmpeg executable (overrides the config file)
    #[arg(long, env = "FFCUT_FFMPEG")]
    pub ffmpeg: Option<String>,

    /// Configuration file (default: ./ffcut.toml when present)
    #[arg(long, env = "FFCUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level or filter directives
    #[arg(long, env = "FFCUT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,
}
