//! Numbered menus.
//!
//! Both menus are plain enums implementing `Menu`; numbering comes from the
//! order of `ITEMS`, so rendering and parsing can never disagree.

use std::io::{self, BufRead, Write};

use crate::console::Console;

pub const CHOICE_PROMPT: &str = "Enter your choice: ";

pub trait Menu: Sized + Copy + PartialEq + 'static {
    const TITLE: &'static str;
    const ITEMS: &'static [Self];

    fn label(self) -> &'static str;

    fn number(self) -> i64 {
        Self::ITEMS
            .iter()
            .position(|item| *item == self)
            .map(|i| i as i64 + 1)
            .unwrap_or(0)
    }

    fn from_number(n: i64) -> Option<Self> {
        if n < 1 {
            return None;
        }
        Self::ITEMS.get((n - 1) as usize).copied()
    }

    fn render() -> String {
        let mut s = format!("\n{}:\n", Self::TITLE);
        for item in Self::ITEMS {
            s.push_str(&format!("{}. {}\n", item.number(), item.label()));
        }
        s
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    OpenDirectory,
    CreateDirectory,
    Exit,
}

impl Menu for MainChoice {
    const TITLE: &'static str = "Main Menu";
    const ITEMS: &'static [Self] = &[
        MainChoice::OpenDirectory,
        MainChoice::CreateDirectory,
        MainChoice::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MainChoice::OpenDirectory => "Open directory (view, copy or move files)",
            MainChoice::CreateDirectory => "Create a new directory",
            MainChoice::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionChoice {
    List,
    ListRecursive,
    Copy,
    Move,
    CopyOrMove,
    View,
    Return,
}

impl Menu for SessionChoice {
    const TITLE: &'static str = "Directory Operations";
    const ITEMS: &'static [Self] = &[
        SessionChoice::List,
        SessionChoice::ListRecursive,
        SessionChoice::Copy,
        SessionChoice::Move,
        SessionChoice::CopyOrMove,
        SessionChoice::View,
        SessionChoice::Return,
    ];

    fn label(self) -> &'static str {
        match self {
            SessionChoice::List => "Display files in the directory",
            SessionChoice::ListRecursive => "Display files recursively (including subdirectories)",
            SessionChoice::Copy => "Copy a file from this directory",
            SessionChoice::Move => "Move a file from this directory",
            SessionChoice::CopyOrMove => "Copy or move a file (choose the action)",
            SessionChoice::View => "View the contents of a text file",
            SessionChoice::Return => "Return to Main Menu",
        }
    }
}

/// Outcome of one menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<M> {
    Picked(M),
    OutOfRange(i64),
    EndOfInput,
}

/// Render `M` and read one selection. Non-numeric input is retried inside
/// `Console::ask_number`; out-of-range numbers are handed back to the caller.
pub fn select<M, R, W, E>(console: &mut Console<R, W, E>) -> io::Result<Selection<M>>
where
    M: Menu,
    R: BufRead,
    W: Write,
    E: Write,
{
    console.say(M::render().trim_end())?;
    Ok(match console.ask_number(CHOICE_PROMPT)? {
        None => Selection::EndOfInput,
        Some(n) => match M::from_number(n) {
            Some(choice) => Selection::Picked(choice),
            None => Selection::OutOfRange(n),
        },
    })
}
