//! ffcut
//!
//! Trims a video with ffmpeg, optionally mixing selected audio tracks,
//! rescaling and recompressing it, then reports the size of the result.
//!
//! # Usage
//!
//! ```bash
//! ffcut movie.mkv 00:01:00 --end 00:02:00
//! ffcut movie.mkv 00:01:00 --audio 0,1 --scale 1280 --crf 28 --preset slow
//! ffcut movie.mkv 00:01:00 --dry-run
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use ffcut::adapters::{init_tracing, LogFormat, TomlConfigAdapter};
use ffcut::app::DefaultAppContainer;
use ffcut::cli::{commands, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Precedence: CLI > env (handled by clap) > file > defaults
    let (config, config_path) = TomlConfigAdapter::load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let level = cli.log_level.as_deref().unwrap_or(config.log.level.as_str());
    let format = if cli.log_json || config.log.json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_tracing(level, format).context("Failed to initialize logging")?;

    info!("Starting ffcut");
    match &config_path {
        Some(path) => info!("Loaded configuration from: {}", path.display()),
        None => debug!("No configuration file found, using defaults"),
    }

    let container = DefaultAppContainer::new(&config, cli.ffmpeg.as_deref());
    commands::clip(&cli.clip, &container)
        .await
        .context("Clip failed")?;

    info!("ffcut completed successfully");
    Ok(())
}
