// Domain rules - Filter selection and filter expressions

use crate::domain::model::*;

#[cfg(test)]
mod tests;

/// Output labels of the filter graph
pub const VIDEO_OUT_LABEL: &str = "[vout]";
pub const AUDIO_OUT_LABEL: &str = "[aout]";

/// Which filtering strategy a request needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPath {
    /// Default stream selection, optional `-vf` chain
    Simple { video_filter: Option<String> },
    /// Explicit `-filter_complex` graph with mapped outputs
    Complex { graph: String },
}

impl FilterPath {
    /// Pick the simple path unless audio tracks were requested
    pub fn select(request: &ClipRequest) -> Self {
        if request.audio_tracks.is_empty() {
            FilterPath::Simple {
                video_filter: simple_video_filter(request.scale),
            }
        } else {
            FilterPath::Complex {
                graph: filter_graph(request.scale, &request.audio_tracks),
            }
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, FilterPath::Complex { .. })
    }
}

/// Scale to a fixed width; `-2` keeps the aspect ratio with an even height
pub fn scale_filter(width: u32) -> String {
    format!("scale={}:-2", width)
}

/// Comma-joined chain of the active video filters, `None` when nothing applies
pub fn simple_video_filter(scale: Option<u32>) -> Option<String> {
    let filters: Vec<String> = scale.into_iter().map(scale_filter).collect();

    if filters.is_empty() {
        None
    } else {
        Some(filters.join(","))
    }
}

/// Two-stage graph: video pass-through or scale, then an `amix` of the
/// requested audio tracks
pub fn filter_graph(scale: Option<u32>, tracks: &AudioTracks) -> String {
    let video_stage = match scale {
        Some(width) => format!("[0:v:0]{}{}", scale_filter(width), VIDEO_OUT_LABEL),
        None => format!("[0:v:0]copy{}", VIDEO_OUT_LABEL),
    };

    let audio_inputs: String = tracks.iter().map(|t| format!("[0:a:{}]", t)).collect();

    format!(
        "{};{}amix=inputs={}{}",
        video_stage,
        audio_inputs,
        tracks.len(),
        AUDIO_OUT_LABEL
    )
}
