//! Command construction engine

pub mod command;

pub use command::{CommandBuilder, FfmpegCommand};
