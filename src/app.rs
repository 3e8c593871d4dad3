//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the Ctrl-C handler,
//! and runs the interactive menus.

use anyhow::{Context, Result};
use std::sync::{Arc, Mutex};
use tracing::debug;

use cmdfm::cli::Args;
use cmdfm::config::{config_path, create_template_config, load_config, Config, CONFIG_ENV};
use cmdfm::console::Console;
use cmdfm::output as out;
use cmdfm::shell;

use crate::logging::init_tracing;

fn print_config_location() {
    if std::env::var_os(CONFIG_ENV).is_some() {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):"));
    } else {
        out::print_info("Default cmdfm config path:");
    }
    match config_path() {
        Some(p) => {
            println!("  {}", p.display());
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file exists there yet; defaults apply. Use --init-config to create one.");
            }
        }
        None => out::print_error("Could not determine a config path."),
    }
}

fn init_config() -> Result<()> {
    let path = config_path().context("could not determine a config path")?;
    create_template_config(&path)?;
    out::print_success(&format!("A template cmdfm config was written to: {}", path.display()));
    Ok(())
}

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle informational flags before logging init
    if args.print_config {
        print_config_location();
        return Ok(());
    }
    if args.init_config {
        return init_config().inspect_err(|e| out::print_error(&format!("{e:#}")));
    }

    // Config file (if any), then CLI overrides (CLI wins)
    let mut cfg: Config = load_config()
        .inspect_err(|e| out::print_error(&format!("{e:#}")))?
        .unwrap_or_default();
    args.apply_overrides(&mut cfg);
    cfg.validate().inspect_err(|e| out::print_error(&format!("{e:#}")))?;

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json_logs)
        .inspect_err(|e| out::print_error(&format!("Failed to initialize logging: {e}")))?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            out::print_warn("Received interrupt; exiting.");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take(); // drop guard here to flush tracing_appender
            }
            std::process::exit(130);
        })
        .context("failed to install signal handler")?;
    }

    debug!(?cfg, "Starting cmdfm");

    let mut console = Console::stdio();
    let result = shell::run(&mut console, cfg.session_mode);

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}
