//! Signature scanning over an extracted directory tree.
//!
//! The [`Scanner`] walks every entry below a root directory and reports
//! whether any entry's path contains one of the known Electron
//! [signatures](SIGNATURES).
//!
//! # Example
//!
//! ```no_run
//! use electroscan::scanner::Scanner;
//! use std::path::Path;
//!
//! let scanner = Scanner::new();
//! let is_electron = scanner.scan(Path::new("/tmp/extracted"))?;
//! println!("electron: {}", is_electron);
//! # Ok::<(), electroscan::error::ScanError>(())
//! ```

mod signatures;

pub use signatures::{SignatureSet, SIGNATURES};

use crate::error::ScanError;
use crate::model::Classification;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// What the walk driver should do after visiting an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Keep going, descending into the entry if it is a directory.
    Continue,
    /// End the walk here.
    Stop,
}

/// Result of driving a walk to completion or to a [`Walk::Stop`].
#[derive(Debug, Default)]
struct WalkSummary {
    stopped: bool,
    first_error: Option<walkdir::Error>,
    error_count: usize,
}

/// Visits every entry reachable from `root`, letting `visit` decide when to stop.
///
/// Entry errors do not end the walk; the first one is kept for the caller.
fn walk<F>(root: &Path, mut visit: F) -> WalkSummary
where
    F: FnMut(&DirEntry) -> Walk,
{
    let mut summary = WalkSummary::default();

    for entry in WalkDir::new(root).follow_links(false) {
        match entry {
            Ok(entry) => {
                if visit(&entry) == Walk::Stop {
                    summary.stopped = true;
                    break;
                }
            }
            Err(err) => {
                warn!("Error walking through directory: {}", err);
                summary.error_count += 1;
                if summary.first_error.is_none() {
                    summary.first_error = Some(err);
                }
            }
        }
    }

    summary
}

/// Path of `entry` relative to `root`, `/`-separated, with a trailing `/`
/// for directories. `None` for the root itself.
fn candidate_path(root: &Path, entry: &DirEntry) -> Option<String> {
    let rel = entry.path().strip_prefix(root).ok()?;
    if rel.as_os_str().is_empty() {
        return None;
    }

    let mut candidate = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    if entry.file_type().is_dir() {
        candidate.push('/');
    }

    Some(candidate)
}

/// Turns a finished walk into the scan result.
///
/// A match wins over any number of entry errors. Without a match, the first
/// error is reported.
fn conclude(summary: WalkSummary) -> Result<bool, ScanError> {
    if summary.stopped {
        if summary.error_count > 0 {
            debug!(
                errors = summary.error_count,
                "match found despite traversal errors"
            );
        }
        return Ok(true);
    }

    match summary.first_error {
        Some(first) => Err(ScanError::Traversal {
            first,
            count: summary.error_count,
        }),
        None => Ok(false),
    }
}

/// Scans extracted installer contents for Electron signatures.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    signatures: SignatureSet,
}

impl Scanner {
    /// Creates a scanner using the built-in signature table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scanner with a custom signature set.
    pub fn with_signatures(signatures: SignatureSet) -> Self {
        Self { signatures }
    }

    /// Returns `true` if any entry below `root` matches a signature.
    ///
    /// The walk stops at the first match. Errors on individual entries are
    /// logged and skipped; they never override a match, but if the walk
    /// finishes without one the first error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::NotADirectory`] if `root` exists but is not a
    /// directory, and [`ScanError::Traversal`] if `root` cannot be read or
    /// if any entry failed and nothing matched.
    pub fn scan(&self, root: &Path) -> Result<bool, ScanError> {
        // A missing root is left to the walk, which reports it as a traversal error.
        if let Ok(meta) = fs::metadata(root) {
            if !meta.is_dir() {
                return Err(ScanError::NotADirectory(root.to_path_buf()));
            }
        }

        let summary = walk(root, |entry| {
            let Some(candidate) = candidate_path(root, entry) else {
                return Walk::Continue;
            };
            match self.signatures.find(&candidate) {
                Some(signature) => {
                    debug!(path = %candidate, signature, "signature matched");
                    Walk::Stop
                }
                None => Walk::Continue,
            }
        });

        conclude(summary)
    }

    /// Like [`scan`](Self::scan), wrapped as a [`Classification`].
    pub fn classify(&self, root: &Path) -> Result<Classification, ScanError> {
        self.scan(root).map(Classification::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tree(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, b"").unwrap();
        }
        dir
    }

    #[test]
    fn test_app_asar() {
        let dir = tree(&["resources/app.asar"]);
        assert!(Scanner::new().scan(dir.path()).unwrap());
    }

    #[test]
    fn test_package_json() {
        let dir = tree(&["app/package.json"]);
        assert!(Scanner::new().scan(dir.path()).unwrap());
    }

    #[test]
    fn test_node_dll() {
        let dir = tree(&["lib/node.dll"]);
        assert!(Scanner::new().scan(dir.path()).unwrap());
    }

    #[test]
    fn test_no_signature() {
        let dir = tree(&["readme.txt", "setup.bin"]);
        assert!(!Scanner::new().scan(dir.path()).unwrap());
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(!Scanner::new().scan(dir.path()).unwrap());
        assert_eq!(
            Scanner::new().classify(dir.path()).unwrap(),
            Classification::NotElectron
        );
    }

    #[test]
    fn test_deeply_nested_match() {
        let dir = tree(&[
            "a/readme.txt",
            "b/c/d/e/setup.bin",
            "b/c/d/e/f/libEGL.dll",
        ]);
        assert!(Scanner::new().scan(dir.path()).unwrap());
    }

    #[test]
    fn test_directory_name_matches() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Frameworks/Mantle.framework")).unwrap();
        assert!(Scanner::new().scan(dir.path()).unwrap());
    }

    #[test]
    fn test_separator_signature_matches_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/electron")).unwrap();
        let scanner = Scanner::with_signatures(SignatureSet::new(["node_modules/electron/"]));
        assert!(scanner.scan(dir.path()).unwrap());
    }

    #[test]
    fn test_electronics_false_positive() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("electronics")).unwrap();
        assert!(Scanner::new().scan(dir.path()).unwrap());
    }

    #[test]
    fn test_root_name_is_ignored() {
        let parent = TempDir::new().unwrap();
        let root = parent.path().join("electron_inspection");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("readme.txt"), b"").unwrap();
        assert!(!Scanner::new().scan(&root).unwrap());
    }

    #[test]
    fn test_idempotent() {
        let scanner = Scanner::new();
        let hit = tree(&["resources/electron.asar"]);
        let miss = tree(&["data/readme.txt"]);
        for _ in 0..2 {
            assert!(scanner.scan(hit.path()).unwrap());
            assert!(!scanner.scan(miss.path()).unwrap());
        }
    }

    #[test]
    fn test_missing_root_is_traversal_error() {
        let parent = TempDir::new().unwrap();
        let err = Scanner::new()
            .scan(&parent.path().join("does-not-exist"))
            .unwrap_err();
        assert!(matches!(err, ScanError::Traversal { count: 1, .. }));
    }

    /// A real walkdir error, taken from walking a path that does not exist.
    fn walk_error() -> walkdir::Error {
        let parent = TempDir::new().unwrap();
        WalkDir::new(parent.path().join("gone"))
            .into_iter()
            .next()
            .unwrap()
            .unwrap_err()
    }

    #[test]
    fn test_match_wins_over_entry_errors() {
        let summary = WalkSummary {
            stopped: true,
            first_error: Some(walk_error()),
            error_count: 3,
        };
        assert!(conclude(summary).unwrap());
    }

    #[test]
    fn test_entry_error_without_match_fails() {
        let summary = WalkSummary {
            stopped: false,
            first_error: Some(walk_error()),
            error_count: 2,
        };
        let err = conclude(summary).unwrap_err();
        assert!(matches!(err, ScanError::Traversal { count: 2, .. }));
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_clean_walk_without_match() {
        assert!(!conclude(WalkSummary::default()).unwrap());
    }

    #[test]
    fn test_file_root_is_rejected() {
        let parent = TempDir::new().unwrap();
        let root = parent.path().join("electron.asar");
        fs::write(&root, b"").unwrap();

        let err = Scanner::new().scan(&root).unwrap_err();

        assert!(matches!(err, ScanError::NotADirectory(ref p) if p == &root));
    }

    #[test]
    fn test_walk_stops_early() {
        let dir = tree(&["a.txt", "b.txt", "c.txt"]);
        let mut visited = 0;
        let summary = walk(dir.path(), |_| {
            visited += 1;
            if visited == 2 {
                Walk::Stop
            } else {
                Walk::Continue
            }
        });
        assert!(summary.stopped);
        assert_eq!(visited, 2);
        assert!(summary.first_error.is_none());
    }

    #[test]
    fn test_candidate_path_is_relative() {
        let dir = tree(&["sub/file.txt"]);
        let mut seen = Vec::new();
        walk(dir.path(), |entry| {
            if let Some(c) = candidate_path(dir.path(), entry) {
                seen.push(c);
            }
            Walk::Continue
        });
        seen.sort();
        assert_eq!(seen, vec!["sub/".to_string(), "sub/file.txt".to_string()]);
    }
}
