use std::sync::Arc;

use crate::adapters::{FFmpegAdapter, FfcutConfig, FsLocalAdapter};
use crate::app::clip_interactor::ClipInteractor;
use crate::engine::CommandBuilder;
use crate::ports::{ExecutePort, FsPort};

pub trait AppContainer: Send + Sync {
    fn clip_interactor(&self) -> Arc<ClipInteractor>;
}

pub struct DefaultAppContainer {
    clip_interactor: Arc<ClipInteractor>,
}

impl DefaultAppContainer {
    /// Wire the production adapters; `ffmpeg_path` overrides the configured binary
    pub fn new(config: &FfcutConfig, ffmpeg_path: Option<&str>) -> Self {
        let program = ffmpeg_path.unwrap_or(config.ffmpeg.path.as_str());
        let builder = CommandBuilder::new(program, config.encoder_settings());

        let execute_port = Arc::new(FFmpegAdapter::new());
        let fs_port = Arc::new(FsLocalAdapter::new());

        let clip_interactor = Arc::new(ClipInteractor::new(
            builder,
            execute_port as Arc<dyn ExecutePort>,
            fs_port as Arc<dyn FsPort>,
        ));

        Self { clip_interactor }
    }
}

impl AppContainer for DefaultAppContainer {
    fn clip_interactor(&self) -> Arc<ClipInteractor> {
        Arc::clone(&self.clip_interactor)
    }
}
