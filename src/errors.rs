//! Typed error definitions for cmdfm.
//! Provides a small set of well-known failure modes so the menus can report
//! and recover, and logs can carry a stable numeric code.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Classification of a native filesystem failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsErrorKind {
    PermissionDenied,
    NotFound,
    AlreadyExists,
    CrossDevice,
    NoSpace,
    ReadOnly,
    Busy,
    Other,
}

impl FsErrorKind {
    /// Classify an io::Error, preferring raw OS codes where they are more precise.
    pub fn classify(e: &io::Error) -> Self {
        if let Some(code) = e.raw_os_error() {
            #[cfg(unix)]
            {
                match code {
                    libc::EACCES | libc::EPERM => return FsErrorKind::PermissionDenied,
                    libc::ENOENT => return FsErrorKind::NotFound,
                    libc::EEXIST => return FsErrorKind::AlreadyExists,
                    libc::EXDEV => return FsErrorKind::CrossDevice,
                    libc::ENOSPC => return FsErrorKind::NoSpace,
                    libc::EROFS => return FsErrorKind::ReadOnly,
                    libc::EBUSY => return FsErrorKind::Busy,
                    _ => {}
                }
            }
            #[cfg(windows)]
            {
                match code {
                    5 => return FsErrorKind::PermissionDenied,
                    2 | 3 => return FsErrorKind::NotFound,
                    80 | 183 => return FsErrorKind::AlreadyExists,
                    17 => return FsErrorKind::CrossDevice,
                    112 => return FsErrorKind::NoSpace,
                    19 => return FsErrorKind::ReadOnly,
                    32 => return FsErrorKind::Busy,
                    _ => {}
                }
            }
        }
        match e.kind() {
            io::ErrorKind::PermissionDenied => FsErrorKind::PermissionDenied,
            io::ErrorKind::NotFound => FsErrorKind::NotFound,
            io::ErrorKind::AlreadyExists => FsErrorKind::AlreadyExists,
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => FsErrorKind::Busy,
            _ => FsErrorKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FsErrorKind::PermissionDenied => "permission_denied",
            FsErrorKind::NotFound => "not_found",
            FsErrorKind::AlreadyExists => "already_exists",
            FsErrorKind::CrossDevice => "cross_device",
            FsErrorKind::NoSpace => "no_space",
            FsErrorKind::ReadOnly => "read_only",
            FsErrorKind::Busy => "busy",
            FsErrorKind::Other => "other",
        }
    }
}

impl fmt::Display for FsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum FmError {
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("Path does not exist: {0}")]
    NotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("File does not exist or is not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("Already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Source and destination are the same file: {0}")]
    SameFile(PathBuf),

    #[error("Unrecognized action '{0}'; expected exactly 'Copy' or 'Move'")]
    UnknownAction(String),

    /// Native filesystem failure; `message` already carries op, path and hint.
    #[error("{message}")]
    Io {
        op: &'static str,
        path: PathBuf,
        kind: FsErrorKind,
        message: String,
    },
}

impl FmError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            FmError::InvalidPath { .. } => 10,
            FmError::UnknownAction(_) => 11,
            FmError::NotFound(_) => 20,
            FmError::NotADirectory(_) => 21,
            FmError::NotAFile(_) => 22,
            FmError::AlreadyExists(_) => 23,
            FmError::SameFile(_) => 24,
            FmError::Io { .. } => 30,
        }
    }

    /// Short machine-friendly label used as the `kind` log field.
    pub fn kind_label(&self) -> &'static str {
        match self {
            FmError::InvalidPath { .. } => "invalid_path",
            FmError::UnknownAction(_) => "unknown_action",
            FmError::NotFound(_) => "not_found",
            FmError::NotADirectory(_) => "not_a_directory",
            FmError::NotAFile(_) => "not_a_file",
            FmError::AlreadyExists(_) => "already_exists",
            FmError::SameFile(_) => "same_file",
            FmError::Io { kind, .. } => kind.as_str(),
        }
    }

    /// True for mistakes in what the user typed (as opposed to filesystem state).
    pub fn is_user_input(&self) -> bool {
        matches!(self, FmError::InvalidPath { .. } | FmError::UnknownAction(_))
    }
}
