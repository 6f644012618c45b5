//! Output path derivation

use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;

/// Suffix that replaces the source extension in default output names
pub const CUT_SUFFIX: &str = "_cut.mp4";

/// `<dir>/<stem>_cut.mp4` for a source at `<dir>/<stem>.<ext>`
pub fn default_destination(source: &Path) -> Result<PathBuf, DomainError> {
    let stem = source.file_stem().ok_or_else(|| {
        DomainError::BadArgs(format!(
            "Cannot derive an output name from '{}'",
            source.display()
        ))
    })?;

    let mut name = stem.to_os_string();
    name.push(CUT_SUFFIX);

    Ok(source.with_file_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_extension() {
        assert_eq!(
            default_destination(Path::new("movie.mkv")).unwrap(),
            PathBuf::from("movie_cut.mp4")
        );
    }

    #[test]
    fn test_keeps_directory() {
        assert_eq!(
            default_destination(Path::new("/media/raw/take.2.mov")).unwrap(),
            PathBuf::from("/media/raw/take.2_cut.mp4")
        );
    }

    #[test]
    fn test_without_extension() {
        assert_eq!(
            default_destination(Path::new("clips/intro")).unwrap(),
            PathBuf::from("clips/intro_cut.mp4")
        );
    }

    #[test]
    fn test_mp4_source_gets_distinct_name() {
        let source = Path::new("video.mp4");
        let destination = default_destination(source).unwrap();
        assert_ne!(destination, source);
        assert_eq!(destination, PathBuf::from("video_cut.mp4"));
    }

    #[test]
    fn test_rejects_path_without_file_name() {
        assert!(default_destination(Path::new("")).is_err());
        assert!(default_destination(Path::new("..")).is_err());
    }
}
