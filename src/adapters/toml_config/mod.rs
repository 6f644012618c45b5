// TOML config adapter - Configuration loaded from a TOML file

use std::path::{Path, PathBuf};

use serde::Deserialize;
use crate::domain::model::EncoderSettings;
use crate::error::FfcutResult;

/// File picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "ffcut.toml";

/// Complete configuration with defaults for every key
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FfcutConfig {
    pub ffmpeg: FfmpegSection,
    pub log: LogSection,
}

/// `[ffmpeg]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FfmpegSection {
    pub path: String,
    pub video_codec: String,
    pub audio_codec: String,
    pub audio_bitrate: String,
}

impl Default for FfmpegSection {
    fn default() -> Self {
        let encoder = EncoderSettings::default();
        Self {
            path: "ffmpeg".to_string(),
            video_codec: encoder.video_codec,
            audio_codec: encoder.audio_codec,
            audio_bitrate: encoder.audio_bitrate,
        }
    }
}

/// `[log]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub level: String,
    pub json: bool,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl FfcutConfig {
    /// Encoder flags derived from the `[ffmpeg]` table
    pub fn encoder_settings(&self) -> EncoderSettings {
        EncoderSettings {
            video_codec: self.ffmpeg.video_codec.clone(),
            audio_codec: self.ffmpeg.audio_codec.clone(),
            audio_bitrate: self.ffmpeg.audio_bitrate.clone(),
        }
    }
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Load the explicit file if given (it must exist), otherwise
    /// `ffcut.toml` from the working directory if present, otherwise defaults.
    ///
    /// Returns the file the configuration came from, if any, so the caller
    /// can report it once logging is up.
    pub fn load(explicit: Option<&Path>) -> FfcutResult<(FfcutConfig, Option<PathBuf>)> {
        match Self::locate(explicit) {
            Some(path) => {
                let config = Self::load_file(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((FfcutConfig::default(), None)),
        }
    }

    /// File to read: the explicit path, else `ffcut.toml` in the working directory
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
                candidate.is_file().then_some(candidate)
            }
        }
    }

    /// Read and parse one configuration file
    pub fn load_file(path: &Path) -> FfcutResult<FfcutConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration text
    pub fn parse(content: &str) -> FfcutResult<FfcutConfig> {
        Ok(toml::from_str(content)?)
    }
}
