//! Check driver
//!
//! Reads a findings report, extracts its citations and verifies every one
//! of them against a shared cache. Per-citation problems are collected; only
//! a missing or unreadable report stops the run early.

use std::path::{Path, PathBuf};

use crate::citations::extract::extract_citations;
use crate::citations::verify::{RepeatBounds, Verifier};
use crate::core::error::CheckError;
use crate::core::file_reader::read_text;
use crate::core::model::{Finding, ValidationReport};

/// Options for a check run
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Base directory cited paths are resolved against
    pub root: PathBuf,

    /// Whether repeated citations of a path are bound-checked
    pub repeat_bounds: RepeatBounds,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            repeat_bounds: RepeatBounds::default(),
        }
    }
}

/// Validate all citations in the report at `report_path`.
///
/// The report path is resolved against the working directory, not the check
/// root. A missing report yields a report with a single error.
pub fn check_report(
    report_path: &Path,
    options: &CheckOptions,
) -> Result<ValidationReport, CheckError> {
    let mut report = ValidationReport::new();

    if !report_path.exists() {
        report.push(Finding::report_not_found(&report_path.display().to_string()));
        return Ok(report);
    }

    let text = read_text(report_path).map_err(|source| CheckError::ReadReport {
        path: report_path.to_path_buf(),
        source,
    })?;

    Ok(check_text(&text, options))
}

/// Validate all citations in already-loaded report text
pub fn check_text(text: &str, options: &CheckOptions) -> ValidationReport {
    let citations = extract_citations(text);
    let mut verifier = Verifier::new(&options.root, options.repeat_bounds);
    let mut report = ValidationReport::new();
    report.citations = citations.len();

    for citation in &citations {
        verifier.verify(citation, &mut report);
    }

    tracing::info!(
        root = %verifier.root().display(),
        citations = report.citations,
        files_read = verifier.cache().len(),
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "check complete"
    );

    report
}
