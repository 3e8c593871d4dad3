//! Directory creation.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::FmError;

use super::helpers::io_error_with_help;
use super::probe::{exists, probe, PathKind};

/// Create `path` and any missing parents. Refuses if anything already exists there.
pub fn create_directory(path: &Path) -> Result<(), FmError> {
    if exists(path) {
        debug!(path = %path.display(), "create refused: already exists");
        return Err(FmError::AlreadyExists(path.to_path_buf()));
    }
    fs::create_dir_all(path).map_err(io_error_with_help("create directory", path))?;
    info!(path = %path.display(), "Created directory");
    Ok(())
}

/// Make sure `path` is a directory, creating it when missing.
/// Returns true if it had to be created.
pub fn ensure_directory(path: &Path) -> Result<bool, FmError> {
    match probe(path) {
        PathKind::Directory => Ok(false),
        PathKind::Missing => {
            fs::create_dir_all(path).map_err(io_error_with_help("create directory", path))?;
            info!(path = %path.display(), "Created directory");
            Ok(true)
        }
        PathKind::File | PathKind::Other => Err(FmError::NotADirectory(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn creates_nested_then_refuses_second_time() {
        let temp = assert_fs::TempDir::new().unwrap();
        let target = temp.path().join("a").join("b").join("c");
        create_directory(&target).unwrap();
        assert!(target.is_dir());

        std::fs::write(target.join("keep.txt"), "keep").unwrap();
        let err = create_directory(&target).unwrap_err();
        assert!(matches!(err, FmError::AlreadyExists(_)));
        assert_eq!(std::fs::read_to_string(target.join("keep.txt")).unwrap(), "keep");
    }

    #[test]
    fn ensure_directory_reports_creation_and_rejects_files() {
        let temp = assert_fs::TempDir::new().unwrap();
        let d = temp.path().join("dest");
        assert!(ensure_directory(&d).unwrap());
        assert!(!ensure_directory(&d).unwrap());

        let f = temp.child("file.txt");
        f.touch().unwrap();
        assert!(matches!(ensure_directory(f.path()), Err(FmError::NotADirectory(_))));
    }

    #[cfg(unix)]
    #[test]
    fn create_under_file_is_io_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("plain");
        f.touch().unwrap();
        let err = create_directory(&f.path().join("sub")).unwrap_err();
        assert!(matches!(err, FmError::Io { .. }), "got {err:?}");
    }
}
