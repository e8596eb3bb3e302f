//! Citations module - Validate `file:line` references in findings reports
//!
//! Extraction finds candidate citations in text, verification checks them
//! against the filesystem, and the check driver ties the two together.

pub mod check;
pub mod extract;
pub mod verify;
