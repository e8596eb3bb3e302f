//! Strict text reading and line counting
//!
//! Cited files and the report itself must be valid UTF-8. Unlike a lossy
//! read, a decoding failure is surfaced to the caller so it can become a
//! warning (cited file) or abort the run (report).

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Why a file could not be read as text
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("invalid UTF-8 at byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
}

/// Read a whole file as strict UTF-8 text
pub fn read_text(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| ReadError::InvalidUtf8 {
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Read a file and return its line count
pub fn read_line_count(path: &Path) -> Result<usize, ReadError> {
    let text = read_text(path)?;
    Ok(count_lines(&text))
}

/// Count lines the way a universal-newline text reader would.
///
/// `\n`, `\r\n` and a lone `\r` each terminate a line; a non-empty trailing
/// segment without a terminator is one more line.
pub fn count_lines(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0;
    let mut pending = false;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                count += 1;
                pending = false;
            }
            b'\r' => {
                count += 1;
                pending = false;
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            _ => pending = true,
        }
        i += 1;
    }

    if pending {
        count += 1;
    }
    count
}
