//! ffmpeg argument construction

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::domain::errors::DomainError;
use crate::domain::model::{ClipRequest, EncoderSettings};
use crate::domain::rules::{FilterPath, AUDIO_OUT_LABEL, VIDEO_OUT_LABEL};

/// A program plus its ordered arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl FfmpegCommand {
    /// Whether the command routes streams through `-filter_complex`
    pub fn uses_filter_graph(&self) -> bool {
        self.args.iter().any(|arg| arg == "-filter_complex")
    }

    /// Value following the first occurrence of `flag`
    pub fn flag_value(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|arg| arg == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

impl fmt::Display for FfmpegCommand {
    /// Shell-style rendering; tokens with special characters are single-quoted
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

fn shell_quote(token: &str) -> String {
    let plain = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,+@%".contains(c));

    if plain {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}

/// Translates a [`ClipRequest`] into an ffmpeg invocation
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    program: String,
    settings: EncoderSettings,
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new("ffmpeg", EncoderSettings::default())
    }
}

impl CommandBuilder {
    pub fn new(program: impl Into<String>, settings: EncoderSettings) -> Self {
        Self {
            program: program.into(),
            settings,
        }
    }

    /// Build the full argument list. Pure: nothing is read or spawned.
    pub fn build(&self, request: &ClipRequest) -> Result<FfmpegCommand, DomainError> {
        let destination = request.resolve_destination()?;
        let mut args = vec![
            "-y".to_string(),
            "-i".to_string(),
            path_arg(&request.source)?,
        ];

        if let Some(start) = &request.start {
            args.extend(["-ss".to_string(), start.to_string()]);
        }
        if let Some(end) = &request.end {
            args.extend(["-to".to_string(), end.to_string()]);
        }

        let path = FilterPath::select(request);
        debug!(?path, "Selected filter path");

        match path {
            FilterPath::Simple { video_filter } => {
                if let Some(filter) = video_filter {
                    args.extend(["-vf".to_string(), filter]);
                }
                push_crf(&mut args, request.crf);
            }
            FilterPath::Complex { graph } => {
                // -crf is an output option, so it still binds to the output
                // file even though it precedes the global -filter_complex.
                push_crf(&mut args, request.crf);
                args.extend([
                    "-filter_complex".to_string(),
                    graph,
                    "-map".to_string(),
                    VIDEO_OUT_LABEL.to_string(),
                    "-map".to_string(),
                    AUDIO_OUT_LABEL.to_string(),
                ]);
            }
        }

        args.extend([
            "-c:v".to_string(),
            self.settings.video_codec.clone(),
            "-preset".to_string(),
            request.preset.to_string(),
            "-c:a".to_string(),
            self.settings.audio_codec.clone(),
            "-b:a".to_string(),
            self.settings.audio_bitrate.clone(),
            path_arg(&destination)?,
        ]);

        Ok(FfmpegCommand {
            program: self.program.clone(),
            args,
        })
    }
}

fn push_crf(args: &mut Vec<String>, crf: Option<u8>) {
    if let Some(crf) = crf {
        args.extend(["-crf".to_string(), crf.to_string()]);
    }
}

fn path_arg(path: &Path) -> Result<String, DomainError> {
    path.to_str().map(str::to_string).ok_or_else(|| {
        DomainError::BadArgs(format!("Path is not valid UTF-8: {}", path.display()))
    })
}
