//! Text input for the pager.
//!
//! Reads a whole file, or piped stdin, into one string per line. Invalid
//! UTF-8 is replaced rather than rejected, so binary-ish logs still page.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::PathBuf;
use thiserror::Error;

/// Errors reading pager input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// No file argument and stdin is a terminal.
    #[error("No input: pass a file or pipe text into stdin")]
    NoInput,

    /// I/O failure while reading.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Read every line from `file`, or from stdin when no file is given.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` for a missing file,
/// `InputError::NoInput` when stdin is an interactive terminal, and
/// `InputError::Io` for read failures.
pub fn read_lines(file: Option<PathBuf>) -> Result<Vec<String>, InputError> {
    match file {
        Some(path) => {
            if !path.exists() {
                return Err(InputError::FileNotFound { path });
            }
            let reader = BufReader::new(File::open(&path)?);
            read_from(reader)
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(InputError::NoInput);
            }
            read_from(stdin.lock())
        }
    }
}

/// Read every line from `reader`.
///
/// Lines end at `\n`; a trailing `\r` is dropped. A final line without a
/// terminator is still returned.
///
/// # Errors
///
/// Returns `InputError::Io` if the reader fails.
pub fn read_from<R: BufRead>(reader: R) -> Result<Vec<String>, InputError> {
    let mut lines = Vec::new();
    for chunk in reader.split(b'\n') {
        let mut bytes = chunk?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        lines.push(String::from_utf8_lossy(&bytes).into_owned());
    }
    Ok(lines)
}
