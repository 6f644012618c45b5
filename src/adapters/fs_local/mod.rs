// Local file system adapter

use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::ports::*;

/// File system adapter backed by `tokio::fs`
#[derive(Debug, Default)]
pub struct FsLocalAdapter;

impl FsLocalAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FsPort for FsLocalAdapter {
    async fn file_size(&self, path: &Path) -> Result<u64, DomainError> {
        let metadata = tokio::fs::metadata(path).await.map_err(|e| {
            DomainError::FsFail(format!("Failed to read metadata of {}: {}", path.display(), e))
        })?;

        if !metadata.is_file() {
            return Err(DomainError::FsFail(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        Ok(metadata.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clip.mp4");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let size = FsLocalAdapter::new().file_size(&path).await.unwrap();
        assert_eq!(size, 2048);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = FsLocalAdapter::new()
            .file_size(&dir.path().join("missing.mp4"))
            .await;
        assert!(matches!(result, Err(DomainError::FsFail(_))));
    }

    #[tokio::test]
    async fn test_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let result = FsLocalAdapter::new().file_size(dir.path()).await;
        assert!(result.is_err());
    }
}
