//! Copy/move of a single file out of a session directory.
//!
//! Split in two steps so the caller can ask questions in between:
//! `TransferRequest::plan` validates everything and reports what needs
//! confirming (missing destination directory, existing destination file);
//! `TransferPlan::execute` performs the transfer once those are settled.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::errors::FmError;
use crate::path::{join_name, parse_user_path};

use super::copy::safe_copy_and_rename;
use super::helpers::io_error_with_help;
use super::probe::{probe, PathKind};
use super::util::same_file;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    Copy,
    Move,
}

impl TransferKind {
    /// Past tense used in user messages ("copied", "moved").
    pub fn past_tense(&self) -> &'static str {
        match self {
            TransferKind::Copy => "copied",
            TransferKind::Move => "moved",
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransferKind::Copy => "Copy",
            TransferKind::Move => "Move",
        })
    }
}

/// Only the exact tokens `Copy` and `Move` are accepted (surrounding whitespace aside).
impl FromStr for TransferKind {
    type Err = FmError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Copy" => Ok(TransferKind::Copy),
            "Move" => Ok(TransferKind::Move),
            other => Err(FmError::UnknownAction(other.to_string())),
        }
    }
}

/// What the user asked for, still as typed.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub source_dir: PathBuf,
    pub file_name: String,
    pub dest_dir: String,
    pub kind: TransferKind,
}

/// A validated transfer, ready to run once confirmations are in.
#[derive(Debug, Clone)]
pub struct TransferPlan {
    pub kind: TransferKind,
    pub source: PathBuf,
    pub dest_dir: PathBuf,
    pub dest_file: PathBuf,
    /// The destination directory must be created before `execute`.
    pub dest_dir_missing: bool,
    /// `execute` will replace an existing file; needs the user's consent.
    pub dest_file_exists: bool,
}

impl TransferRequest {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        file_name: impl Into<String>,
        dest_dir: impl Into<String>,
        kind: TransferKind,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            file_name: file_name.into(),
            dest_dir: dest_dir.into(),
            kind,
        }
    }

    pub fn plan(&self) -> Result<TransferPlan, FmError> {
        let source = join_name(&self.source_dir, &self.file_name)?;
        if probe(&source) != PathKind::File {
            return Err(FmError::NotAFile(source));
        }

        let typed_dest = parse_user_path(&self.dest_dir)?;
        if matches!(probe(&typed_dest), PathKind::File | PathKind::Other) {
            return Err(FmError::NotADirectory(typed_dest));
        }

        // The name keeps its subdirectories: "sub/a.txt" lands as dest/sub/a.txt,
        // so the directory that must exist is the destination file's parent.
        let dest_file = join_name(&typed_dest, &self.file_name)?;
        let dest_dir = match dest_file.parent() {
            Some(p) => p.to_path_buf(),
            None => typed_dest,
        };
        let dest_dir_missing = match probe(&dest_dir) {
            PathKind::Directory => false,
            PathKind::Missing => true,
            PathKind::File | PathKind::Other => return Err(FmError::NotADirectory(dest_dir)),
        };

        let dest_file_exists = match probe(&dest_file) {
            PathKind::Missing => false,
            PathKind::File => {
                if same_file(&source, &dest_file) {
                    return Err(FmError::SameFile(source));
                }
                true
            }
            PathKind::Directory | PathKind::Other => {
                return Err(FmError::AlreadyExists(dest_file));
            }
        };

        Ok(TransferPlan {
            kind: self.kind,
            source,
            dest_dir,
            dest_file,
            dest_dir_missing,
            dest_file_exists,
        })
    }

    /// Non-interactive API: plan, create the destination directory if needed,
    /// and execute without prompting. An existing destination file is replaced
    /// only when `overwrite` is true. The interactive session goes through
    /// `plan` and `TransferPlan::execute` instead so it can ask in between.
    pub fn run(&self, overwrite: bool) -> Result<PathBuf, FmError> {
        let plan = self.plan()?;
        if plan.dest_dir_missing {
            super::create::ensure_directory(&plan.dest_dir)?;
        }
        plan.execute(overwrite)
    }
}

impl TransferPlan {
    /// Perform the transfer. Preconditions are probed again since the
    /// filesystem may have changed while the user was answering prompts.
    pub fn execute(&self, overwrite: bool) -> Result<PathBuf, FmError> {
        if probe(&self.source) != PathKind::File {
            return Err(FmError::NotAFile(self.source.clone()));
        }
        match probe(&self.dest_dir) {
            PathKind::Directory => {}
            PathKind::Missing => return Err(FmError::NotFound(self.dest_dir.clone())),
            _ => return Err(FmError::NotADirectory(self.dest_dir.clone())),
        }
        match probe(&self.dest_file) {
            PathKind::Missing => {}
            PathKind::File if overwrite => {}
            _ => return Err(FmError::AlreadyExists(self.dest_file.clone())),
        }

        match self.kind {
            TransferKind::Copy => {
                let bytes = safe_copy_and_rename(&self.source, &self.dest_file)?;
                info!(src = %self.source.display(), dest = %self.dest_file.display(), bytes, "Copied file");
            }
            TransferKind::Move => {
                fs::rename(&self.source, &self.dest_file)
                    .map_err(io_error_with_help("move file", &self.source))?;
                info!(src = %self.source.display(), dest = %self.dest_file.display(), "Moved file");
            }
        }
        Ok(self.dest_file.clone())
    }
}
