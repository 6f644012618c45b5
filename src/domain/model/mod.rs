// Domain models - Core types and data structures

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::domain::errors::DomainError;
use crate::utils::path::default_destination;


/// Time offset handed to ffmpeg verbatim.
///
/// The raw text is never rewritten. [`Timecode::seconds`] is a best-effort
/// reading used only to catch an end time that precedes the start time;
/// anything it cannot read is left for ffmpeg to accept or reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timecode(String);

impl Timecode {
    /// Wrap a timecode string
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw text as supplied by the user
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse `SS[.ms]`, `MM:SS[.ms]` or `HH:MM:SS[.ms]` into seconds
    pub fn seconds(&self) -> Option<f64> {
        let parts: Vec<&str> = self.0.trim().split(':').collect();

        let (hours, minutes, seconds) = match parts.as_slice() {
            [s] => (0, 0, parse_seconds(s)?),
            [m, s] => (0, parse_field(m)?, parse_seconds(s)?),
            [h, m, s] => (parse_field(h)?, parse_field(m)?, parse_seconds(s)?),
            _ => return None,
        };

        if parts.len() > 1 && seconds >= 60.0 {
            return None;
        }
        if parts.len() > 2 && minutes >= 60 {
            return None;
        }

        Some(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds)
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn parse_field(text: &str) -> Option<u32> {
    if !is_digits(text) {
        return None;
    }
    text.parse().ok()
}

/// Plain decimal only: no sign, exponent or `inf`
fn parse_seconds(text: &str) -> Option<f64> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    if !is_digits(whole) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Timecode {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Timecode {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Audio tracks to mix down, addressed by per-type index (`0:a:N`).
///
/// Indices are unique and iterate in ascending order. An empty set means
/// "keep ffmpeg's default audio stream".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioTracks(BTreeSet<u32>);

impl AudioTracks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u32> for AudioTracks {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for AudioTracks {
    type Err = DomainError;

    /// Parse a comma-separated list such as `0,1`. Blank entries are skipped,
    /// so an empty string yields an empty set.
    fn from_str(list: &str) -> Result<Self, Self::Err> {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                entry.parse::<u32>().map_err(|_| {
                    DomainError::BadArgs(format!(
                        "Invalid audio track index '{}': expected a non-negative integer",
                        entry
                    ))
                })
            })
            .collect()
    }
}

/// x264 speed/compression tradeoff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum EncoderPreset {
    Ultrafast,
    Superfast,
    Veryfast,
    Faster,
    Fast,
    #[default]
    Medium,
    Slow,
    Slower,
    Veryslow,
    Placebo,
}

impl EncoderPreset {
    /// Name as ffmpeg expects it after `-preset`
    pub fn as_str(&self) -> &'static str {
        match self {
            EncoderPreset::Ultrafast => "ultrafast",
            EncoderPreset::Superfast => "superfast",
            EncoderPreset::Veryfast => "veryfast",
            EncoderPreset::Faster => "faster",
            EncoderPreset::Fast => "fast",
            EncoderPreset::Medium => "medium",
            EncoderPreset::Slow => "slow",
            EncoderPreset::Slower => "slower",
            EncoderPreset::Veryslow => "veryslow",
            EncoderPreset::Placebo => "placebo",
        }
    }
}

impl fmt::Display for EncoderPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoder flags appended to every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderSettings {
    pub video_codec: String,
    pub audio_codec: String,
    pub audio_bitrate: String,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
            audio_bitrate: "192k".to_string(),
        }
    }
}

/// Everything needed to build one ffmpeg invocation
#[derive(Debug, Clone, PartialEq)]
pub struct ClipRequest {
    pub source: PathBuf,
    pub destination: Option<PathBuf>,
    pub start: Option<Timecode>,
    pub end: Option<Timecode>,
    pub audio_tracks: AudioTracks,
    pub scale: Option<u32>,
    pub crf: Option<u8>,
    pub preset: EncoderPreset,
}

impl ClipRequest {
    /// Create a request that processes the whole source with defaults
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: None,
            start: None,
            end: None,
            audio_tracks: AudioTracks::new(),
            scale: None,
            crf: None,
            preset: EncoderPreset::default(),
        }
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_start(mut self, start: impl Into<Timecode>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn with_end(mut self, end: impl Into<Timecode>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub fn with_audio_tracks(mut self, tracks: AudioTracks) -> Self {
        self.audio_tracks = tracks;
        self
    }

    pub fn with_scale(mut self, width: u32) -> Self {
        self.scale = Some(width);
        self
    }

    pub fn with_crf(mut self, crf: u8) -> Self {
        self.crf = Some(crf);
        self
    }

    pub fn with_preset(mut self, preset: EncoderPreset) -> Self {
        self.preset = preset;
        self
    }

    /// Explicit destination, or `<source stem>_cut.mp4` next to the source
    pub fn resolve_destination(&self) -> Result<PathBuf, DomainError> {
        match &self.destination {
            Some(destination) => Ok(destination.clone()),
            None => default_destination(&self.source),
        }
    }

    /// Check the invariants that can be checked without touching the file system
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.source.as_os_str().is_empty() {
            return Err(DomainError::BadArgs("Source path cannot be empty".to_string()));
        }

        if self.scale == Some(0) {
            return Err(DomainError::BadArgs("Scale width must be positive".to_string()));
        }

        if let Some(crf) = self.crf {
            if crf > 51 {
                return Err(DomainError::BadArgs(format!(
                    "CRF value {} is out of range (0-51)",
                    crf
                )));
            }
        }

        if let (Some(start), Some(end)) = (&self.start, &self.end) {
            if let (Some(from), Some(to)) = (start.seconds(), end.seconds()) {
                if to <= from {
                    return Err(DomainError::InvalidTimeRange(format!(
                        "end ({}) must be after start ({})",
                        end, start
                    )));
                }
            }
        }

        let destination = self.resolve_destination()?;
        if same_path(&destination, &self.source) {
            return Err(DomainError::DestinationConflict(format!(
                "output would overwrite the source file {}",
                self.source.display()
            )));
        }

        Ok(())
    }
}

fn same_path(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Outcome of a successful clip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipReport {
    pub destination: PathBuf,
    pub size_bytes: u64,
    pub size: String,
}
