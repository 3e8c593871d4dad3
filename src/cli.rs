//! CLI definition and parsing.
//! The program is interactive; flags only tune logging and menu behavior.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - Flags override values from the XML config file.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel, SessionMode};

/// Interactive console file manager.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone, Default)]
#[command(
    author,
    version,
    about = "Interactive console file manager: browse, list, copy, move and view files"
)]
pub struct Args {
    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, value_name = "LEVEL", help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<LogLevel>,

    /// Append logs to this file in addition to stderr.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath, help = "Append logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Return to the main menu after each directory operation.
    #[arg(
        long,
        help = "Run one directory operation per session, then return to the main menu"
    )]
    pub once: bool,

    /// Print where cmdfm looks for its config file, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,

    /// Write a commented template config file, then exit.
    #[arg(long, conflicts_with = "print_config", help = "Write a template config file and exit")]
    pub init_config: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.clone()
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(path) = &self.log_file {
            cfg.log_file = Some(path.clone());
        }
        if self.json {
            cfg.json_logs = true;
        }
        if self.once {
            cfg.session_mode = SessionMode::Once;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
