//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;
use clap_num::number_range;

use crate::domain::model::{AudioTracks, ClipRequest, EncoderPreset, Timecode};

/// Arguments describing one clip
#[derive(Args, Debug, Clone)]
pub struct ClipArgs {
    /// Input video file path
    pub source: PathBuf,

    /// Start time (HH:MM:SS), passed to ffmpeg as-is
    pub start: String,

    /// End time (HH:MM:SS), passed to ffmpeg as-is
    #[arg(long)]
    pub end: Option<String>,

    /// Audio track indices to mix together, e.g. 0,1
    #[arg(long, default_value = "", value_parser = parse_audio_tracks)]
    pub audio: AudioTracks,

    /// Output width in pixels; height follows the aspect ratio
    #[arg(long, value_parser = scale_in_range)]
    pub scale: Option<u32>,

    /// Constant Rate Factor (0-51). Higher values compress further; 24-30 is a good range
    #[arg(long, value_parser = crf_in_range)]
    pub crf: Option<u8>,

    /// Encoder speed preset
    #[arg(long, value_enum, default_value_t = EncoderPreset::Medium)]
    pub preset: EncoderPreset,

    /// Output file path (default: <source stem>_cut.mp4 next to the source)
    #[arg(short = 'o', long)]
    pub destination: Option<PathBuf>,

    /// Print the ffmpeg command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the completion report as JSON
    #[arg(long)]
    pub json: bool,
}

impl ClipArgs {
    /// Convert parsed arguments into a domain request
    pub fn to_request(&self) -> ClipRequest {
        ClipRequest {
            source: self.source.clone(),
            destination: self.destination.clone(),
            start: Some(Timecode::new(self.start.as_str())),
            end: self.end.as_deref().map(Timecode::new),
            audio_tracks: self.audio.clone(),
            scale: self.scale,
            crf: self.crf,
            preset: self.preset,
        }
    }
}

fn parse_audio_tracks(list: &str) -> Result<AudioTracks, String> {
    list.parse::<AudioTracks>().map_err(|e| e.to_string())
}

fn scale_in_range(s: &str) -> Result<u32, String> {
    number_range(s, 1, u32::MAX)
}

fn crf_in_range(s: &str) -> Result<u8, String> {
    number_range(s, 0, 51)
}
