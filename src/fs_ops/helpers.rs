//! I/O error helpers.
//!
//! Turns a raw io::Error into an `FmError::Io` whose message names the
//! operation and path and carries a platform-aware hint.
//!
//! Usage:
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create directory", dir))?;

use std::io;
use std::path::Path;

use crate::errors::{FmError, FsErrorKind};

/// Format a human-friendly message with op/path plus a hint for the error kind.
fn build_message(op: &str, path: &Path, e: &io::Error, kind: FsErrorKind) -> String {
    let mut msg = format!("Could not {} '{}': {}", op, path.display(), e);

    let hint = match kind {
        FsErrorKind::PermissionDenied => Some("permission denied; check ownership and permissions"),
        FsErrorKind::NotFound => Some("path not found; verify it exists"),
        FsErrorKind::AlreadyExists => Some("already exists; pick another name or remove the target"),
        FsErrorKind::CrossDevice => {
            Some("source and destination are on different filesystems; copy the file instead")
        }
        FsErrorKind::NoSpace => Some("insufficient space on device"),
        FsErrorKind::ReadOnly => Some("read-only filesystem; cannot write here"),
        FsErrorKind::Busy => Some("resource busy; ensure no other process is using it"),
        FsErrorKind::Other => None,
    };
    if let Some(h) = hint {
        msg.push_str(" (");
        msg.push_str(h);
        msg.push(')');
    }

    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {}]", code));
    }
    msg
}

/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> FmError.
pub fn io_error_with_help<'a>(
    op: &'static str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> FmError + 'a {
    move |e: io::Error| {
        let kind = FsErrorKind::classify(&e);
        FmError::Io {
            op,
            path: path.to_path_buf(),
            kind,
            message: build_message(op, path, &e, kind),
        }
    }
}
