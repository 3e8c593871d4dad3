//! Core library for `cmdfm`, an interactive console file manager.
//!
//! Layers, bottom-up:
//! - `path`: normalization and validation of typed paths
//! - `fs_ops`: filesystem operations returning `Result<_, FmError>`
//! - `console` / `menu`: line-oriented prompts and numbered menus
//! - `session` / `shell`: the directory session and the menu state machine

pub mod cli;
pub mod config;
pub mod console;
pub mod errors;
pub mod fs_ops;
pub mod menu;
pub mod output;
pub mod path;
pub mod platform;
pub mod session;
pub mod shell;

pub use config::{Config, LogLevel, SessionMode};
pub use errors::{FmError, FsErrorKind};
pub use session::Session;
