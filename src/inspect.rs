//! End-to-end inspection of a single installer.

use crate::config::Config;
use crate::error::ProbeError;
use crate::extractor::{ExtractedDir, Extractor};
use crate::model::Classification;
use crate::scanner::Scanner;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

/// Extracts `path`, scans the contents and classifies the installer.
///
/// The temporary extraction directory is removed before this returns,
/// whatever the outcome.
///
/// # Errors
///
/// - [`ProbeError::InputNotFound`] if `path` does not exist
/// - [`ProbeError::Extraction`] if unpacking fails
/// - [`ProbeError::Traversal`] if the extracted tree cannot be walked and
///   nothing matched
pub fn inspect(
    path: &Path,
    extractor: &dyn Extractor,
    scanner: &Scanner,
    config: &Config,
) -> Result<Classification, ProbeError> {
    check_input(path)?;

    let extracted = match ExtractedDir::create(extractor, path, config) {
        Ok(dir) => dir,
        Err(err) => {
            if !extractor.is_available() {
                warn!("{} is not available on this system", extractor.name());
            }
            return Err(err.into());
        }
    };

    let result = scanner.classify(extracted.path());

    if let Err(err) = extracted.close() {
        warn!("failed to remove temporary directory: {}", err);
    }

    let classification = result?;
    info!(path = %path.display(), %classification, "inspection finished");
    Ok(classification)
}

/// Rejects only paths that do not exist. Other `stat` failures are left
/// for the extractor to report.
fn check_input(path: &Path) -> Result<(), ProbeError> {
    match fs::metadata(path) {
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(ProbeError::InputNotFound(path.to_path_buf()))
        }
        Err(err) => {
            debug!(path = %path.display(), "cannot stat input: {}", err);
            Ok(())
        }
        Ok(_) => Ok(()),
    }
}
