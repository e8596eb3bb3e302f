//! Validation Result Model
//!
//! Extraction produces `Citation`s, verification produces `Finding`s, and a run
//! accumulates them into a `ValidationReport` before rendering.

use serde::{Deserialize, Serialize};

/// A `path:line` reference found in report text, not yet verified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Path exactly as matched, possibly wrapped in quotes/backticks
    pub raw_path: String,

    /// Path with surrounding quotes/backticks stripped
    pub path: String,

    /// Line digits as written in the report
    pub line_text: String,

    /// Parsed line number (saturates at u64::MAX)
    pub line: u64,

    /// 1-based line of the report containing the citation
    pub report_line: u32,
}

impl Citation {
    pub fn new(
        raw_path: impl Into<String>,
        line_text: impl Into<String>,
        report_line: u32,
    ) -> Self {
        let raw_path = raw_path.into();
        let line_text = line_text.into();
        let path = strip_quotes(&raw_path).to_string();
        let line = parse_line_number(&line_text);
        Self {
            raw_path,
            path,
            line_text,
            line,
            report_line,
        }
    }
}

/// Strip any leading/trailing backtick, single-quote or double-quote characters
pub fn strip_quotes(raw: &str) -> &str {
    raw.trim_matches(|c| matches!(c, '`' | '\'' | '"'))
}

/// Parse an ASCII digit run; values too large for u64 saturate
fn parse_line_number(digits: &str) -> u64 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Stable machine-readable finding codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingCode {
    FileNotFound,
    LineOutOfRange,
    InvalidLine,
    UnreadableFile,
    ReportNotFound,
}

impl FindingCode {
    #[allow(dead_code)]
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingCode::FileNotFound => "FILE_NOT_FOUND",
            FindingCode::LineOutOfRange => "LINE_OUT_OF_RANGE",
            FindingCode::InvalidLine => "INVALID_LINE",
            FindingCode::UnreadableFile => "UNREADABLE_FILE",
            FindingCode::ReportNotFound => "REPORT_NOT_FOUND",
        }
    }
}

/// A single problem found during a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub code: FindingCode,
    pub message: String,

    /// Cited path (normalized)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Cited line, as written in the report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,

    /// Report line the citation came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_line: Option<u32>,
}

impl Finding {
    pub fn error(code: FindingCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            path: None,
            line: None,
            report_line: None,
        }
    }

    pub fn warning(code: FindingCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            path: None,
            line: None,
            report_line: None,
        }
    }

    /// Attach the citation this finding is about
    pub fn for_citation(mut self, citation: &Citation) -> Self {
        self.path = Some(citation.path.clone());
        self.line = Some(citation.line_text.clone());
        self.report_line = Some(citation.report_line);
        self
    }

    pub fn file_not_found(citation: &Citation) -> Self {
        Self::error(
            FindingCode::FileNotFound,
            format!("File not found: {}:{}", citation.path, citation.line_text),
        )
        .for_citation(citation)
    }

    pub fn line_out_of_range(citation: &Citation, line_count: usize) -> Self {
        Self::error(
            FindingCode::LineOutOfRange,
            format!(
                "Line {} out of range in {} (file has {} lines)",
                citation.line_text, citation.path, line_count
            ),
        )
        .for_citation(citation)
    }

    pub fn invalid_line(citation: &Citation) -> Self {
        Self::error(
            FindingCode::InvalidLine,
            format!("Invalid line number {} in {}", citation.line_text, citation.path),
        )
        .for_citation(citation)
    }

    pub fn unreadable(citation: &Citation, detail: impl std::fmt::Display) -> Self {
        Self::warning(
            FindingCode::UnreadableFile,
            format!("Could not read {}: {}", citation.path, detail),
        )
        .for_citation(citation)
    }

    pub fn report_not_found(report: &str) -> Self {
        Self::error(
            FindingCode::ReportNotFound,
            format!("Findings file not found: {}", report),
        )
    }
}

/// Everything a run found, in encounter order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Number of citations extracted from the report
    pub citations: usize,
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a finding into the errors or warnings sequence
    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
        }
    }

    /// Warnings alone do not fail a run
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
