//! Menu dispatcher.
//!
//! The program is a small state machine over `Screen`. The open directory
//! lives inside `Screen::Directory`, so it is passed from step to step as a
//! value and dropped as soon as the user leaves it.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::config::SessionMode;
use crate::console::Console;
use crate::fs_ops::create_directory;
use crate::menu::{select, MainChoice, Selection, SessionChoice};
use crate::path::{join_name, parse_user_path};
use crate::session::{report, Session};

pub const GOODBYE: &str = "Exiting program. Goodbye!";
pub const INVALID_CHOICE: &str = "Invalid choice.";

#[derive(Debug)]
enum Screen {
    Main,
    Directory(Session),
    Exit,
}

/// Run the menus until the user exits or input ends. Only console I/O
/// failures escape; every filesystem problem is reported and recovered.
pub fn run<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
    mode: SessionMode,
) -> Result<()> {
    info!(%mode, "Starting interactive shell");
    let mut screen = Screen::Main;
    loop {
        screen = match screen {
            Screen::Main => main_step(console)?,
            Screen::Directory(session) => directory_step(session, console, mode)?,
            Screen::Exit => break,
        };
    }
    console.say(GOODBYE)?;
    info!("Shell finished");
    Ok(())
}

fn main_step<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> io::Result<Screen> {
    Ok(match select::<MainChoice, _, _, _>(console)? {
        Selection::EndOfInput => {
            debug!("End of input at main menu");
            Screen::Exit
        }
        Selection::OutOfRange(n) => {
            debug!(choice = n, "Out-of-range main menu choice");
            console.error(INVALID_CHOICE)?;
            Screen::Main
        }
        Selection::Picked(MainChoice::OpenDirectory) => open_directory(console)?,
        Selection::Picked(MainChoice::CreateDirectory) => {
            create_directory_prompt(console)?;
            Screen::Main
        }
        Selection::Picked(MainChoice::Exit) => Screen::Exit,
    })
}

fn open_directory<R: BufRead, W: Write, E: Write>(console: &mut Console<R, W, E>) -> io::Result<Screen> {
    let Some(raw) = console.ask("Enter the full path of the directory to open: ")? else {
        return Ok(Screen::Exit);
    };
    match Session::open(&raw) {
        Ok(session) => {
            console.info(&format!("Current directory: {}", session.dir().display()))?;
            Ok(Screen::Directory(session))
        }
        Err(e) => {
            report(console, &e)?;
            Ok(Screen::Main)
        }
    }
}

fn directory_step<R: BufRead, W: Write, E: Write>(
    session: Session,
    console: &mut Console<R, W, E>,
    mode: SessionMode,
) -> io::Result<Screen> {
    let stay = |session: Session| match mode {
        SessionMode::Loop => Screen::Directory(session),
        SessionMode::Once => Screen::Main,
    };
    Ok(match select::<SessionChoice, _, _, _>(console)? {
        Selection::EndOfInput => Screen::Exit,
        Selection::OutOfRange(n) => {
            debug!(choice = n, "Out-of-range directory menu choice");
            console.error(INVALID_CHOICE)?;
            stay(session)
        }
        Selection::Picked(SessionChoice::Return) => {
            debug!(dir = %session.dir().display(), "Closing directory session");
            Screen::Main
        }
        Selection::Picked(choice) => {
            session.handle(choice, console)?;
            stay(session)
        }
    })
}

/// Parent directory + new name; an empty name creates the parent path itself.
fn create_directory_prompt<R: BufRead, W: Write, E: Write>(
    console: &mut Console<R, W, E>,
) -> io::Result<()> {
    let Some(parent) = console.ask("Enter the parent directory path: ")? else {
        return Ok(());
    };
    let Some(name) =
        console.ask("Enter the name of the new directory (leave empty to create the path above): ")?
    else {
        return Ok(());
    };

    let target = parse_user_path(&parent).and_then(|parent| {
        if name.trim().is_empty() {
            Ok(parent)
        } else {
            join_name(&parent, &name)
        }
    });
    let result = target.and_then(|t| create_directory(&t).map(|()| t));
    match result {
        Ok(created) => console.success(&format!("Directory created successfully: {}", created.display())),
        Err(e) => report(console, &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

    fn run_with(input: &str, mode: SessionMode) -> (String, String) {
        let mut c: TestConsole = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new());
        run(&mut c, mode).unwrap();
        let (out, err) = c.into_writers();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn exit_prints_goodbye_once() {
        let (out, _) = run_with("3\n", SessionMode::Loop);
        assert_eq!(out.matches(GOODBYE).count(), 1);
    }

    #[test]
    fn garbage_then_out_of_range_then_exit() {
        let (out, err) = run_with("hello\n42\n3\n", SessionMode::Loop);
        assert_eq!(err.matches(crate::console::NOT_A_NUMBER).count(), 1);
        assert_eq!(err.matches(INVALID_CHOICE).count(), 1);
        // menu drawn for the first prompt and again after the invalid choice
        assert_eq!(out.matches("Main Menu:").count(), 2);
        assert_eq!(out.matches(GOODBYE).count(), 1);
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (out, _) = run_with("", SessionMode::Loop);
        assert_eq!(out.matches(GOODBYE).count(), 1);
    }

    #[test]
    fn invalid_directory_returns_to_main_menu() {
        let (out, err) = run_with("1\n/definitely/not/here\n3\n", SessionMode::Loop);
        assert!(err.contains("does not exist"), "stderr: {err}");
        assert!(!out.contains("Directory Operations:"));
        assert_eq!(out.matches("Main Menu:").count(), 2);
    }

    #[test]
    fn once_mode_returns_after_one_operation() {
        let temp = tempfile::tempdir().unwrap();
        let d = temp.path().display().to_string();
        let (out, _) = run_with(&format!("1\n{d}\n1\n3\n"), SessionMode::Once);
        assert_eq!(out.matches("Directory Operations:").count(), 1);
        assert_eq!(out.matches(GOODBYE).count(), 1);
    }

    #[test]
    fn loop_mode_keeps_the_session_until_return() {
        let temp = tempfile::tempdir().unwrap();
        let d = temp.path().display().to_string();
        let (out, err) = run_with(&format!("1\n{d}\n1\n9\n2\n7\n3\n"), SessionMode::Loop);
        assert_eq!(out.matches("Directory Operations:").count(), 4);
        assert_eq!(err.matches(INVALID_CHOICE).count(), 1);
        assert_eq!(out.matches("Main Menu:").count(), 2);
    }

    #[test]
    fn create_directory_with_parent_and_name() {
        let temp = tempfile::tempdir().unwrap();
        let d = temp.path().display().to_string();
        let (out, err) = run_with(&format!("2\n{d}\nnew/inner\n2\n{d}\nnew/inner\n3\n"), SessionMode::Loop);
        assert!(temp.path().join("new").join("inner").is_dir());
        assert_eq!(out.matches("Directory created successfully").count(), 1);
        assert!(err.contains("Already exists"), "stderr: {err}");
    }
}
