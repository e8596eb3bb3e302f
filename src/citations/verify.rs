//! Citation verification
//!
//! Checks each citation against the filesystem:
//! - the cited file must exist
//! - the cited line must be within the file's line count
//!
//! Each cited path is read at most once per run. Failed reads are not cached,
//! so a later citation of the same unreadable path is retried.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::file_reader::read_line_count;
use crate::core::model::{Citation, Finding, ValidationReport};
use crate::core::paths::{entry_exists, resolve_cited};

/// Which citations of a path get their line bound-checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatBounds {
    /// Only the citation that triggered the first read. Later citations of
    /// the same path pass unchecked.
    #[default]
    FirstOnly,
    /// Every citation, using the cached line count for repeats.
    Every,
}

/// Line counts of paths already read in this run, keyed by cited path
#[derive(Debug, Default)]
pub struct FileCache {
    counts: HashMap<String, usize>,
}

impl FileCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<usize> {
        self.counts.get(path).copied()
    }

    pub fn insert(&mut self, path: impl Into<String>, line_count: usize) {
        self.counts.insert(path.into(), line_count);
    }

    #[allow(dead_code)]
    pub fn contains(&self, path: &str) -> bool {
        self.counts.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Verifies citations one at a time, sharing a cache across the run
pub struct Verifier {
    root: PathBuf,
    repeat_bounds: RepeatBounds,
    cache: FileCache,
}

impl Verifier {
    pub fn new(root: impl Into<PathBuf>, repeat_bounds: RepeatBounds) -> Self {
        Self {
            root: root.into(),
            repeat_bounds,
            cache: FileCache::new(),
        }
    }

    /// Base directory cited paths are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cache(&self) -> &FileCache {
        &self.cache
    }

    /// Verify one citation, pushing any findings into `report`
    pub fn verify(&mut self, citation: &Citation, report: &mut ValidationReport) {
        let full_path = resolve_cited(&self.root, &citation.path);

        if !entry_exists(&full_path) {
            tracing::debug!(path = %citation.path, "cited file not found");
            report.push(Finding::file_not_found(citation));
            return;
        }

        let line_count = match self.cache.get(&citation.path) {
            Some(count) => match self.repeat_bounds {
                RepeatBounds::Every => count,
                RepeatBounds::FirstOnly => {
                    tracing::trace!(
                        path = %citation.path,
                        line = citation.line,
                        "repeat citation, bounds not rechecked"
                    );
                    return;
                }
            },
            None => match read_line_count(&full_path) {
                Ok(count) => {
                    tracing::debug!(path = %citation.path, lines = count, "counted lines");
                    self.cache.insert(citation.path.clone(), count);
                    count
                }
                Err(e) => {
                    tracing::debug!(path = %citation.path, error = %e, "cited file unreadable");
                    report.push(Finding::unreadable(citation, e));
                    return;
                }
            },
        };

        if let Some(finding) = check_bounds(citation, line_count) {
            report.push(finding);
        }
    }
}

/// Bound-check a citation against a known line count
pub fn check_bounds(citation: &Citation, line_count: usize) -> Option<Finding> {
    if citation.line > line_count as u64 {
        Some(Finding::line_out_of_range(citation, line_count))
    } else if citation.line < 1 {
        Some(Finding::invalid_line(citation))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::FindingCode;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn ten_line_file(temp: &TempDir, name: &str) {
        let content: String = (1..=10).map(|i| format!("line {}\n", i)).collect();
        fs::write(temp.path().join(name), content).unwrap();
    }

    fn run(verifier: &mut Verifier, citations: &[Citation]) -> ValidationReport {
        let mut report = ValidationReport::new();
        for c in citations {
            verifier.verify(c, &mut report);
        }
        report
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp = tempdir().unwrap();
        let mut verifier = Verifier::new(temp.path(), RepeatBounds::FirstOnly);

        let report = run(&mut verifier, &[Citation::new("src/gone.py", "12", 1)]);

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].code, FindingCode::FileNotFound);
        assert_eq!(report.errors[0].message, "File not found: src/gone.py:12");
        assert!(!verifier.cache().contains("src/gone.py"));
    }

    #[test]
    fn test_first_citation_out_of_range() {
        let temp = tempdir().unwrap();
        ten_line_file(&temp, "a.py");
        let mut verifier = Verifier::new(temp.path(), RepeatBounds::FirstOnly);

        let report = run(&mut verifier, &[Citation::new("a.py", "11", 1)]);

        assert_eq!(report.errors.len(), 1);
        assert_eq!(
            report.errors[0].message,
            "Line 11 out of range in a.py (file has 10 lines)"
        );
    }

    #[test]
    fn test_first_citation_last_line_valid() {
        let temp = tempdir().unwrap();
        ten_line_file(&temp, "a.py");
        let mut verifier = Verifier::new(temp.path(), RepeatBounds::FirstOnly);

        let report = run(&mut verifier, &[Citation::new("a.py", "10", 1)]);

        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(verifier.cache().get("a.py"), Some(10));
    }

    #[test]
    fn test_repeat_citation_skips_bound_check() {
        let temp = tempdir().unwrap();
        ten_line_file(&temp, "a.py");
        let mut verifier = Verifier::new(temp.path(), RepeatBounds::FirstOnly);

        let report = run(
            &mut verifier,
            &[Citation::new("a.py", "5", 1), Citation::new("a.py", "999", 2)],
        );

        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_repeat_citation_checked_when_every() {
        let temp = tempdir().unwrap();
        ten_line_file(&temp, "a.py");
        let mut verifier = Verifier::new(temp.path(), RepeatBounds::Every);

        let report = run(
            &mut verifier,
            &[
                Citation::new("a.py", "5", 1),
                Citation::new("a.py", "999", 2),
                Citation::new("a.py", "0", 3),
            ],
        );

        assert_eq!(report.errors.len(), 2);
        assert_eq!(
            report.errors[0].message,
            "Line 999 out of range in a.py (file has 10 lines)"
        );
        assert_eq!(report.errors[1].code, FindingCode::InvalidLine);
    }

    #[test]
    fn test_first_citation_line_zero_is_invalid() {
        let temp = tempdir().unwrap();
        ten_line_file(&temp, "a.py");
        let mut verifier = Verifier::new(temp.path(), RepeatBounds::FirstOnly);

        let report = run(&mut verifier, &[Citation::new("a.py", "0", 1)]);

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].code, FindingCode::InvalidLine);
        assert_eq!(report.errors[0].message, "Invalid line number 0 in a.py");
    }

    #[test]
    fn test_line_zero_on_empty_file_is_invalid() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("empty.rs"), "").unwrap();
        let mut verifier = Verifier::new(temp.path(), RepeatBounds::FirstOnly);

        let report = run(&mut verifier, &[Citation::new("empty.rs", "0", 1)]);

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].code, FindingCode::InvalidLine);
    }

    #[test]
    fn test_undecodable_file_is_warning() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("blob.c"), b"\xff\xfe\x00binary").unwrap();
        let mut verifier = Verifier::new(temp.path(), RepeatBounds::FirstOnly);

        let report = run(&mut verifier, &[Citation::new("blob.c", "1", 1)]);

        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].code, FindingCode::UnreadableFile);
        assert!(report.warnings[0]
            .message
            .starts_with("Could not read blob.c: "));
    }

    #[test]
    fn test_unreadable_file_retried_each_citation() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("blob.c"), b"\xff").unwrap();
        let mut verifier = Verifier::new(temp.path(), RepeatBounds::FirstOnly);

        let report = run(
            &mut verifier,
            &[Citation::new("blob.c", "1", 1), Citation::new("blob.c", "2", 2)],
        );

        assert_eq!(report.warnings.len(), 2);
        assert!(!verifier.cache().contains("blob.c"));
    }

    #[test]
    fn test_directory_citation_is_warning() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("pkg.go")).unwrap();
        let mut verifier = Verifier::new(temp.path(), RepeatBounds::FirstOnly);

        let report = run(&mut verifier, &[Citation::new("pkg.go", "1", 1)]);

        assert!(report.errors.is_empty());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_distinct_spellings_cached_separately() {
        let temp = tempdir().unwrap();
        ten_line_file(&temp, "a.py");
        let mut verifier = Verifier::new(temp.path(), RepeatBounds::FirstOnly);

        let report = run(
            &mut verifier,
            &[Citation::new("a.py", "5", 1), Citation::new("./a.py", "11", 2)],
        );

        assert_eq!(report.errors.len(), 1);
        assert_eq!(verifier.cache().len(), 2);
    }

    #[test]
    fn test_errors_keep_encounter_order() {
        let temp = tempdir().unwrap();
        ten_line_file(&temp, "a.py");
        let mut verifier = Verifier::new(temp.path(), RepeatBounds::FirstOnly);

        let report = run(
            &mut verifier,
            &[
                Citation::new("z.rs", "1", 1),
                Citation::new("a.py", "20", 2),
                Citation::new("b.rs", "3", 3),
            ],
        );

        let codes: Vec<_> = report.errors.iter().map(|f| f.code).collect();
        assert_eq!(
            codes,
            vec![
                FindingCode::FileNotFound,
                FindingCode::LineOutOfRange,
                FindingCode::FileNotFound,
            ]
        );
    }

    #[test]
    fn test_check_bounds() {
        let c = Citation::new("a.rs", "3", 1);
        assert!(check_bounds(&c, 3).is_none());
        assert!(check_bounds(&c, 2).is_some());
    }
}
