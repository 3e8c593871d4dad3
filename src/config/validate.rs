//! Config validation logic.
//! Checks that a configured log file can sensibly be opened for appending.

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::debug;

use super::paths::path_has_symlink_ancestor;
use super::types::Config;

impl Config {
    pub fn validate(&self) -> Result<()> {
        if let Some(log_file) = &self.log_file {
            ensure_log_file_usable(log_file)?;
        }
        debug!(
            log_level = %self.log_level,
            session_mode = %self.session_mode,
            json = self.json_logs,
            "Config validated"
        );
        Ok(())
    }
}

/// A log file must not be a directory nor sit below a symlinked ancestor.
fn ensure_log_file_usable(path: &Path) -> Result<()> {
    if path.is_dir() {
        bail!("log_file '{}' is a directory", path.display());
    }
    let has_link = path_has_symlink_ancestor(path)
        .with_context(|| format!("check log_file '{}' for symlinks", path.display()))?;
    if has_link {
        bail!(
            "log_file '{}' has a symlinked ancestor; refusing to log there",
            path.display()
        );
    }
    Ok(())
}
