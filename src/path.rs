//! User path handling.
//! Every path typed at a prompt goes through `normalize` then `validate`
//! before it touches the filesystem.
//!
//! Rules:
//! - trailing whitespace is trimmed; leading whitespace is kept
//! - a matching pair of surrounding quotes is removed (pasted Windows paths)
//! - `\` separators become `/`
//! - `< > : " | ? *` are rejected, except the `:` of a leading `X:/` drive prefix

use std::path::{Path, PathBuf};

use crate::errors::FmError;

const FORBIDDEN: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Canonical separator form of a raw user string.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim_end();
    let unquoted = strip_matching_quotes(trimmed).trim_end();
    unquoted.replace('\\', "/")
}

#[inline]
fn strip_matching_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 && (b[0] == b'"' || b[0] == b'\'') && b[b.len() - 1] == b[0] {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Length of a `X:/` drive prefix at the start of `s`, if present.
fn drive_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    if b.len() >= 3 && b[0].is_ascii_alphabetic() && b[1] == b':' && (b[2] == b'/' || b[2] == b'\\')
    {
        3
    } else {
        0
    }
}

/// Check a normalized path against the character whitelist.
pub fn validate(path: &str) -> Result<(), FmError> {
    if path.trim().is_empty() {
        return Err(FmError::InvalidPath {
            path: path.to_string(),
            reason: "path is empty",
        });
    }
    let rest = &path[drive_prefix_len(path)..];
    if rest.contains(FORBIDDEN) {
        return Err(FmError::InvalidPath {
            path: path.to_string(),
            reason: "contains one of < > : \" | ? *",
        });
    }
    Ok(())
}

/// Normalize and validate a full path typed by the user.
pub fn parse_user_path(raw: &str) -> Result<PathBuf, FmError> {
    let normalized = normalize(raw);
    validate(&normalized)?;
    Ok(PathBuf::from(normalized))
}

/// Resolve a file name typed by the user against a directory.
///
/// The name is appended as text (as if `dir + "/" + name`), so a leading
/// separator in `name` does not escape to the filesystem root.
pub fn join_name(dir: &Path, raw_name: &str) -> Result<PathBuf, FmError> {
    let name = normalize(raw_name);
    validate(&name)?;
    let name = name.trim_start_matches('/');
    if name.is_empty() {
        return Err(FmError::InvalidPath {
            path: raw_name.to_string(),
            reason: "file name is empty",
        });
    }
    let base = normalize(&dir.to_string_lossy());
    let joined = if base.ends_with('/') {
        format!("{base}{name}")
    } else {
        format!("{base}/{name}")
    };
    Ok(PathBuf::from(joined))
}
