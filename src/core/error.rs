//! Error types for citation checks
//!
//! Per-citation problems never become errors here; they are collected as
//! `Finding`s. Only conditions that abort a whole run live in `CheckError`.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::file_reader::ReadError;

/// Conditions that stop a run before any citation is verified.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The report exists but is not readable UTF-8 text.
    #[error("could not read findings file {}", path.display())]
    ReadReport {
        path: PathBuf,
        #[source]
        source: ReadError,
    },
}
