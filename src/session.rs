//! Directory session: one opened directory and the operations run against it.
//!
//! A `Session` is a plain value owned by the shell's current screen; it is
//! dropped when the user goes back to the main menu.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::console::Console;
use crate::errors::FmError;
use crate::fs_ops::{
    ensure_directory, list_entries, open_text, probe, ListItem, ListMode, PathKind, TransferKind,
    TransferRequest,
};
use crate::menu::SessionChoice;
use crate::path::{join_name, parse_user_path};

#[derive(Debug, Clone)]
pub struct Session {
    dir: PathBuf,
}

/// Print an operation failure to the user and record it in the logs.
pub(crate) fn report<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    err: &FmError,
) -> io::Result<()> {
    if err.is_user_input() {
        debug!(code = err.code(), kind = err.kind_label(), "{}", err);
    } else {
        warn!(code = err.code(), kind = err.kind_label(), "{}", err);
    }
    console.error(&err.to_string())
}

impl Session {
    /// Validate a user-typed path as an existing directory.
    pub fn open(raw: &str) -> Result<Self, FmError> {
        let dir = parse_user_path(raw)?;
        match probe(&dir) {
            PathKind::Directory => {
                info!(dir = %dir.display(), "Opened directory session");
                Ok(Session { dir })
            }
            PathKind::Missing => Err(FmError::NotFound(dir)),
            _ => Err(FmError::NotADirectory(dir)),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Run one sub-menu operation. `Return` is the shell's business and is a no-op here.
    pub fn handle<R: BufRead, W: Write, E: Write>(
        &self,
        choice: SessionChoice,
        console: &mut Console<R, W, E>,
    ) -> io::Result<()> {
        debug!(dir = %self.dir.display(), ?choice, "Dispatching session operation");
        match choice {
            SessionChoice::List => self.list(console, ListMode::Flat),
            SessionChoice::ListRecursive => self.list(console, ListMode::Recursive),
            SessionChoice::Copy => self.transfer(console, Some(TransferKind::Copy)),
            SessionChoice::Move => self.transfer(console, Some(TransferKind::Move)),
            SessionChoice::CopyOrMove => self.transfer(console, None),
            SessionChoice::View => self.view(console),
            SessionChoice::Return => Ok(()),
        }
    }

    fn list<R: BufRead, W: Write, E: Write>(
        &self,
        console: &mut Console<R, W, E>,
        mode: ListMode,
    ) -> io::Result<()> {
        let listing = match list_entries(&self.dir, mode) {
            Ok(l) => l,
            Err(e) => return report(console, &e),
        };
        for item in &listing.items {
            match item {
                ListItem::Entry(p) => console.say(&p.display().to_string())?,
                ListItem::Failed(e) => console.error(&e.to_string())?,
            }
        }
        let mut summary = format!("{} entries listed", listing.entry_count());
        if listing.error_count() > 0 {
            summary.push_str(&format!(", {} could not be read", listing.error_count()));
        }
        console.info(&summary)
    }

    /// Copy/move flow. With `fixed == None` the user types the action token,
    /// and anything other than `Copy`/`Move` starts the flow over.
    fn transfer<R: BufRead, W: Write, E: Write>(
        &self,
        console: &mut Console<R, W, E>,
        fixed: Option<TransferKind>,
    ) -> io::Result<()> {
        let verb = match fixed {
            Some(TransferKind::Copy) => "copy",
            Some(TransferKind::Move) => "move",
            None => "copy or move",
        };
        loop {
            let Some(name) =
                console.ask(&format!("Enter the name of the file to {verb} (e.g., example.txt): "))?
            else {
                return Ok(());
            };
            let Some(dest) = console.ask("Enter the full path of the destination directory: ")?
            else {
                return Ok(());
            };
            let kind = match fixed {
                Some(k) => k,
                None => {
                    let Some(token) = console.ask("Enter the action (Copy or Move): ")? else {
                        return Ok(());
                    };
                    match token.parse::<TransferKind>() {
                        Ok(k) => k,
                        Err(e) => {
                            report(console, &e)?;
                            continue;
                        }
                    }
                }
            };
            return self.run_transfer(console, TransferRequest::new(&self.dir, name, dest, kind));
        }
    }

    fn run_transfer<R: BufRead, W: Write, E: Write>(
        &self,
        console: &mut Console<R, W, E>,
        request: TransferRequest,
    ) -> io::Result<()> {
        let plan = match request.plan() {
            Ok(p) => p,
            Err(e) => return report(console, &e),
        };

        if plan.dest_dir_missing {
            let question = format!(
                "Destination directory '{}' does not exist. Create it?",
                plan.dest_dir.display()
            );
            if !console.confirm(&question)? {
                return console.info("Cancelled; the destination directory was not created.");
            }
            match ensure_directory(&plan.dest_dir) {
                Ok(_) => console.success(&format!(
                    "Directory created successfully: {}",
                    plan.dest_dir.display()
                ))?,
                Err(e) => return report(console, &e),
            }
        }

        if plan.dest_file_exists {
            let question = format!("File '{}' already exists. Overwrite?", plan.dest_file.display());
            if !console.confirm(&question)? {
                debug!(dest = %plan.dest_file.display(), "Overwrite declined");
                return console.info(&format!(
                    "Skipped; nothing was {}.",
                    plan.kind.past_tense()
                ));
            }
        }

        match plan.execute(plan.dest_file_exists) {
            Ok(dest) => console.success(&format!(
                "File {} successfully to: {}",
                plan.kind.past_tense(),
                dest.display()
            )),
            Err(e) => report(console, &e),
        }
    }

    fn view<R: BufRead, W: Write, E: Write>(&self, console: &mut Console<R, W, E>) -> io::Result<()> {
        let Some(name) = console.ask("Enter the name of the file to view (e.g., example.txt): ")?
        else {
            return Ok(());
        };
        let path = match join_name(&self.dir, &name) {
            Ok(p) => p,
            Err(e) => return report(console, &e),
        };
        let lines = match open_text(&path) {
            Ok(l) => l,
            Err(e) => return report(console, &e),
        };

        console.say(&format!("Contents of {}:", path.display()))?;
        let mut count = 0usize;
        for line in lines {
            match line {
                Ok(text) => {
                    console.say(&text)?;
                    count += 1;
                }
                Err(e) => {
                    report(console, &e)?;
                    break;
                }
            }
        }
        debug!(path = %path.display(), lines = count, "Viewed file");
        Ok(())
    }
}
