//! Directory enumeration (flat or recursive) on top of walkdir.
//!
//! Order is whatever the OS yields; callers must not rely on it.
//! A failure to read the root aborts the listing; failures below the root
//! are collected next to the entries so the rest of the tree is still shown.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::errors::FmError;

use super::helpers::io_error_with_help;
use super::probe::{probe, PathKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    Flat,
    Recursive,
}

/// One item of a listing, in enumeration order.
#[derive(Debug)]
pub enum ListItem {
    Entry(PathBuf),
    Failed(FmError),
}

#[derive(Debug, Default)]
pub struct Listing {
    pub items: Vec<ListItem>,
}

impl Listing {
    pub fn entries(&self) -> impl Iterator<Item = &Path> {
        self.items.iter().filter_map(|i| match i {
            ListItem::Entry(p) => Some(p.as_path()),
            ListItem::Failed(_) => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries().count()
    }

    pub fn error_count(&self) -> usize {
        self.items.len() - self.entry_count()
    }
}

fn walk_error_to_fm(err: walkdir::Error, fallback: &Path) -> FmError {
    let path = err.path().unwrap_or(fallback).to_path_buf();
    match err.into_io_error() {
        Some(ioe) => io_error_with_help("read directory", &path)(ioe),
        // walkdir reports symlink loops without an io::Error
        None => FmError::Io {
            op: "read directory",
            path: path.clone(),
            kind: crate::errors::FsErrorKind::Other,
            message: format!("Could not read directory '{}': symlink loop detected", path.display()),
        },
    }
}

pub fn list_entries(dir: &Path, mode: ListMode) -> Result<Listing, FmError> {
    match probe(dir) {
        PathKind::Directory => {}
        PathKind::Missing => return Err(FmError::NotFound(dir.to_path_buf())),
        _ => return Err(FmError::NotADirectory(dir.to_path_buf())),
    }

    let walker = match mode {
        ListMode::Flat => WalkDir::new(dir).min_depth(1).max_depth(1),
        ListMode::Recursive => WalkDir::new(dir).min_depth(1),
    };

    let mut listing = Listing::default();
    for item in walker {
        match item {
            Ok(entry) => listing.items.push(ListItem::Entry(entry.into_path())),
            Err(e) if e.depth() == 0 => return Err(walk_error_to_fm(e, dir)),
            Err(e) => {
                let fm = walk_error_to_fm(e, dir);
                warn!(code = fm.code(), kind = fm.kind_label(), "Skipping unreadable entry: {}", fm);
                listing.items.push(ListItem::Failed(fm));
            }
        }
    }
    debug!(
        dir = %dir.display(),
        ?mode,
        entries = listing.entry_count(),
        errors = listing.error_count(),
        "Listed directory"
    );
    Ok(listing)
}
