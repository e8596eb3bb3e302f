//! Citation extraction
//!
//! Finds `path:line` references in free-form report text:
//! `src/foo.cs:42`, `` `path/to/file.py:123` ``, ...
//!
//! Only a fixed set of source extensions is recognized. No I/O happens here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::Citation;

/// Source-file extensions a citation path may end with
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "cs", "py", "ts", "js", "tsx", "jsx", "java", "go", "rb", "rs", "php", "cpp", "c", "h",
];

/// Static regex for citations
/// Format: [`]<non-space path>.<ext>:<digits>[`]
pub static CITATION_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"`?(\S+\.(?:{})):([0-9]+)`?",
        SOURCE_EXTENSIONS.join("|")
    );
    Regex::new(&pattern).expect("Invalid CITATION_RE regex")
});

/// Extract citations from report text, in order, duplicates kept
pub fn extract_citations(text: &str) -> Vec<Citation> {
    let mut citations = Vec::new();
    let mut report_line = 1u32;
    let mut scanned = 0usize;

    for caps in CITATION_RE.captures_iter(text) {
        let (Some(path), Some(line)) = (caps.get(1), caps.get(2)) else {
            continue;
        };

        let start = caps.get(0).map_or(path.start(), |m| m.start());
        report_line += text[scanned..start].matches('\n').count() as u32;
        scanned = start;

        citations.push(Citation::new(path.as_str(), line.as_str(), report_line));
    }

    tracing::debug!(count = citations.len(), "extracted citations");
    citations
}
