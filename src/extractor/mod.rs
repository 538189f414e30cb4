//! Unpacking installers into scoped temporary directories.
//!
//! Extraction itself is delegated to an external tool through the
//! [`Extractor`] trait. [`ExtractedDir`] owns the temporary directory the
//! contents land in and deletes it when dropped, on success and failure
//! alike.

mod sevenzip;

pub use sevenzip::SevenZip;

use crate::config::Config;
use crate::error::ExtractionError;
use std::path::Path;
use tempfile::TempDir;
use tracing::debug;

/// Trait for tools that unpack an installer into a directory.
///
/// # Example
///
/// ```no_run
/// use electroscan::extractor::{ExtractedDir, Extractor, SevenZip};
/// use electroscan::Config;
/// use std::path::Path;
///
/// let config = Config::default();
/// let extractor = SevenZip::from_config(&config);
/// let extracted = ExtractedDir::create(&extractor, Path::new("setup.exe"), &config)?;
/// println!("unpacked into {}", extracted.path().display());
/// # Ok::<(), electroscan::error::ExtractionError>(())
/// ```
pub trait Extractor {
    /// Returns the human-readable name of this extractor.
    fn name(&self) -> &'static str;

    /// Returns true if the underlying tool can be run.
    fn is_available(&self) -> bool;

    /// Unpacks `archive` into the existing directory `dest`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool cannot be started or reports failure.
    /// Cleaning up `dest` is the caller's job.
    fn unpack(&self, archive: &Path, dest: &Path) -> Result<(), ExtractionError>;
}

/// A freshly created temporary directory holding extracted contents.
///
/// The directory is removed when this value is dropped.
#[derive(Debug)]
pub struct ExtractedDir {
    dir: TempDir,
}

impl ExtractedDir {
    /// Creates a uniquely named temporary directory and unpacks `archive` into it.
    ///
    /// If unpacking fails the directory is removed before the error is
    /// returned.
    pub fn create(
        extractor: &dyn Extractor,
        archive: &Path,
        config: &Config,
    ) -> Result<Self, ExtractionError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(&config.temp_prefix);

        let dir = match &config.temp_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .map_err(ExtractionError::TempDir)?;

        debug!(
            extractor = extractor.name(),
            dest = %dir.path().display(),
            "unpacking {}",
            archive.display()
        );

        // On error `dir` is dropped here, which deletes it.
        extractor.unpack(archive, dir.path())?;

        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Deletes the directory now, reporting any failure.
    pub fn close(self) -> std::io::Result<()> {
        self.dir.close()
    }
}
