// Clip interactor - Orchestrates the trim/remix/compress use case

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::engine::{CommandBuilder, FfmpegCommand};
use crate::ports::*;
use crate::utils::abbreviate;

/// A validated request ready to run
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedClip {
    pub command: FfmpegCommand,
    pub destination: PathBuf,
}

/// Interactor for the clip use case
pub struct ClipInteractor {
    builder: CommandBuilder,
    execute_port: Arc<dyn ExecutePort>,
    fs_port: Arc<dyn FsPort>,
}

impl ClipInteractor {
    /// Create new clip interactor with injected ports
    pub fn new(
        builder: CommandBuilder,
        execute_port: Arc<dyn ExecutePort>,
        fs_port: Arc<dyn FsPort>,
    ) -> Self {
        Self {
            builder,
            execute_port,
            fs_port,
        }
    }

    /// Validate the request and build its command. Nothing is spawned.
    pub fn prepare(&self, request: &ClipRequest) -> Result<PreparedClip, DomainError> {
        request.validate()?;

        let destination = request.resolve_destination()?;
        let command = self.builder.build(request)?;

        info!(
            source = %request.source.display(),
            destination = %destination.display(),
            filter_graph = command.uses_filter_graph(),
            "Prepared clip command"
        );

        Ok(PreparedClip {
            command,
            destination,
        })
    }

    /// Run a prepared command and report the size of what it wrote
    #[instrument(skip_all, fields(destination = %prepared.destination.display()))]
    pub async fn run(&self, prepared: &PreparedClip) -> Result<ClipReport, DomainError> {
        self.execute_port.run(&prepared.command).await?;

        let size_bytes = self.fs_port.file_size(&prepared.destination).await?;
        let size = abbreviate(size_bytes);
        info!(size_bytes, %size, "Clip written");

        Ok(ClipReport {
            destination: prepared.destination.clone(),
            size_bytes,
            size,
        })
    }

    /// Prepare and run in one step
    pub async fn execute(&self, request: &ClipRequest) -> Result<ClipReport, DomainError> {
        let prepared = self.prepare(request)?;
        self.run(&prepared).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Mutex;

    /// Records commands and answers with a fixed exit code
    struct MockExecutePort {
        exit_code: i32,
        calls: Mutex<Vec<FfmpegCommand>>,
    }

    impl MockExecutePort {
        fn new(exit_code: i32) -> Self {
            Self {
                exit_code,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ExecutePort for MockExecutePort {
        async fn run(&self, command: &FfmpegCommand) -> Result<(), DomainError> {
            self.calls.lock().unwrap().push(command.clone());
            if self.exit_code == 0 {
                Ok(())
            } else {
                Err(DomainError::ProcessFailed {
                    program: command.program.clone(),
                    code: Some(self.exit_code),
                })
            }
        }
    }

    /// Reports a fixed size and counts lookups
    struct MockFsPort {
        size: u64,
        lookups: Mutex<Vec<PathBuf>>,
    }

    impl MockFsPort {
        fn new(size: u64) -> Self {
            Self {
                size,
                lookups: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl FsPort for MockFsPort {
        async fn file_size(&self, path: &Path) -> Result<u64, DomainError> {
            self.lookups.lock().unwrap().push(path.to_path_buf());
            Ok(self.size)
        }
    }

    fn interactor(
        exit_code: i32,
        size: u64,
    ) -> (ClipInteractor, Arc<MockExecutePort>, Arc<MockFsPort>) {
        let exec = Arc::new(MockExecutePort::new(exit_code));
        let fs = Arc::new(MockFsPort::new(size));
        let interactor = ClipInteractor::new(
            CommandBuilder::default(),
            Arc::clone(&exec) as Arc<dyn ExecutePort>,
            Arc::clone(&fs) as Arc<dyn FsPort>,
        );
        (interactor, exec, fs)
    }

    #[test]
    fn test_prepare_does_not_spawn() {
        let (interactor, exec, fs) = interactor(0, 0);
        let prepared = interactor
            .prepare(&ClipRequest::new("movie.mov").with_start("00:00:01"))
            .unwrap();

        assert_eq!(prepared.destination, PathBuf::from("movie_cut.mp4"));
        assert_eq!(prepared.command.args.last().unwrap(), "movie_cut.mp4");
        assert!(exec.calls.lock().unwrap().is_empty());
        assert!(fs.lookups.lock().unwrap().is_empty());
    }

    #[test]
    fn test_prepare_rejects_invalid_request() {
        let (interactor, _, _) = interactor(0, 0);
        let result = interactor.prepare(&ClipRequest::new("a.mp4").with_destination("a.mp4"));
        assert!(matches!(result, Err(DomainError::DestinationConflict(_))));
    }

    #[tokio::test]
    async fn test_execute_reports_size() {
        let (interactor, exec, fs) = interactor(0, 3 * 1024 * 1024 / 2);
        let report = interactor
            .execute(&ClipRequest::new("in.mp4").with_destination("out.mp4"))
            .await
            .unwrap();

        assert_eq!(report.destination, PathBuf::from("out.mp4"));
        assert_eq!(report.size_bytes, 1_572_864);
        assert_eq!(report.size, "1.5MiB");
        assert_eq!(exec.calls.lock().unwrap().len(), 1);
        assert_eq!(
            fs.lookups.lock().unwrap().as_slice(),
            &[PathBuf::from("out.mp4")]
        );
    }

    #[tokio::test]
    async fn test_failed_process_skips_size_lookup() {
        let (interactor, exec, fs) = interactor(1, 4096);
        let result = interactor.execute(&ClipRequest::new("in.mp4")).await;

        assert!(matches!(
            result,
            Err(DomainError::ProcessFailed { code: Some(1), .. })
        ));
        assert_eq!(exec.calls.lock().unwrap().len(), 1);
        assert!(fs.lookups.lock().unwrap().is_empty());
    }
}
