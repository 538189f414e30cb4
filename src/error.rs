//! Error types.
//!
//! The `Display` output of [`ProbeError`] is the single diagnostic line the
//! command-line tool prints, so messages are written for end users.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure of a single inspection.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Please provide a file path using the -f flag.")]
    InputNotProvided,

    #[error("The provided file path does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to extract .exe file: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Error walking through directory: {0}")]
    Traversal(#[from] ScanError),
}

/// The external unpacking step failed.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("could not create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),

    #[error("could not run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}{}", stderr_suffix(.stderr))]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Filesystem failure while walking an extracted tree.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{first}")]
    Traversal {
        #[source]
        first: walkdir::Error,
        /// Total number of entries that failed.
        count: usize,
    },
}
