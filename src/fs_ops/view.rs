//! Line-by-line text reading for the "view file" operation.
//!
//! Lines are split on `\n` (a trailing `\r` is dropped too); a last line
//! without a terminator still counts. Bytes that are not UTF-8 are shown
//! lossily, so binary files come out garbled rather than failing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::errors::FmError;

use super::helpers::io_error_with_help;
use super::probe::{probe, PathKind};

pub struct TextLines {
    reader: BufReader<File>,
    path: PathBuf,
    buf: Vec<u8>,
    done: bool,
}

/// Open a regular file for sequential line reading.
pub fn open_text(path: &Path) -> Result<TextLines, FmError> {
    match probe(path) {
        PathKind::File => {}
        PathKind::Missing => return Err(FmError::NotFound(path.to_path_buf())),
        _ => return Err(FmError::NotAFile(path.to_path_buf())),
    }
    let file = File::open(path).map_err(io_error_with_help("open file", path))?;
    Ok(TextLines {
        reader: BufReader::new(file),
        path: path.to_path_buf(),
        buf: Vec::with_capacity(256),
        done: false,
    })
}

impl Iterator for TextLines {
    type Item = Result<String, FmError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => {
                self.done = true;
                Some(Err(io_error_with_help("read file", &self.path)(e)))
            }
        }
    }
}
