//! Existence/type probe.
//! Queried right before each use; results are never cached since the
//! filesystem can change between prompts.

use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Missing,
    File,
    Directory,
    /// Exists but is neither (socket, fifo, dangling symlink target type...).
    Other,
}

/// Follows symlinks, like the `is_file`/`is_dir` checks of std.
pub fn probe(path: &Path) -> PathKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => PathKind::Directory,
        Ok(meta) if meta.is_file() => PathKind::File,
        Ok(_) => PathKind::Other,
        Err(_) => {
            // a dangling symlink still occupies the name
            if fs::symlink_metadata(path).is_ok() {
                PathKind::Other
            } else {
                PathKind::Missing
            }
        }
    }
}

#[inline]
pub fn exists(path: &Path) -> bool {
    probe(path) != PathKind::Missing
}
