//! ffcut Library
//!
//! Builds and runs ffmpeg command lines that trim a clip, optionally mix
//! selected audio tracks, rescale the video and adjust compression.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{AudioTracks, ClipReport, ClipRequest, EncoderPreset, EncoderSettings, Timecode};
pub use domain::rules::FilterPath;
pub use engine::{CommandBuilder, FfmpegCommand};
pub use error::{FfcutError, FfcutResult};
pub use utils::abbreviate;
