//! Path resolution for cited files
//!
//! Cited paths are used literally: no canonicalization, no `..` folding.
//! They are only joined onto the check root.

use std::path::{Path, PathBuf};

/// Resolve a cited path against the check root (absolute paths win)
pub fn resolve_cited(root: &Path, cited: &str) -> PathBuf {
    let cited = Path::new(cited);
    if cited.is_absolute() || root == Path::new(".") {
        cited.to_path_buf()
    } else {
        root.join(cited)
    }
}

/// Whether a filesystem entry (file, directory, ...) exists at `path`.
///
/// Symlinks are followed, so a dangling link does not exist.
pub fn entry_exists(path: &Path) -> bool {
    path.exists()
}
