//! Line-oriented console I/O for the menus.
//!
//! Generic over reader/writers so the menus can be driven from tests with
//! in-memory buffers. stdout gets menus, listings and confirmations; stderr
//! gets warnings and errors.

use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

use crate::output::{is_tty, tagged, Tag};

pub const NOT_A_NUMBER: &str = "Invalid input. Please enter a number.";

pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
    color: bool,
}

impl Console<StdinLock<'static>, Stdout, Stderr> {
    /// Console bound to the process streams; colors when stdout is a TTY.
    pub fn stdio() -> Self {
        Console {
            input: io::stdin().lock(),
            out: io::stdout(),
            err: io::stderr(),
            color: is_tty(),
        }
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    /// Uncolored console over arbitrary streams.
    pub fn new(input: R, out: W, err: E) -> Self {
        Console {
            input,
            out,
            err,
            color: false,
        }
    }

    /// Consume the console and hand back the output streams.
    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }

    /// Next input line without its terminator; `None` once input is exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Print `prompt` (no newline) and read the answer.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        self.read_line()
    }

    /// Read an integer, re-prompting with a warning until one is given.
    /// Blank lines are skipped quietly. `None` means end of input.
    pub fn ask_number(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match trimmed.parse::<i64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => {
                    tracing::debug!(input = %trimmed, "Rejected non-numeric menu input");
                    self.warn(NOT_A_NUMBER)?;
                }
            }
        }
    }

    /// Yes/no question; only `y`/`Y` counts as yes. End of input is a no.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(matches!(
            self.ask(&format!("{} (y/n): ", prompt))?.as_deref().map(str::trim),
            Some("y") | Some("Y")
        ))
    }

    /// Plain stdout line.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)
    }

    pub fn info(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{}", tagged(Tag::Info, msg, self.color))
    }

    pub fn success(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.out, "{}", tagged(Tag::Ok, msg, self.color))
    }

    pub fn warn(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.err, "{}", tagged(Tag::Warn, msg, self.color))
    }

    pub fn error(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.err, "{}", tagged(Tag::Error, msg, self.color))
    }
}
