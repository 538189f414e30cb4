//! Runtime settings.
//!
//! The command-line tool always runs with [`Config::default`]; there is no
//! configuration file. Library callers and tests override individual fields.
//!
//! # Example
//!
//! ```
//! use electroscan::Config;
//!
//! let config = Config {
//!     extractor_program: "/opt/7zip/7zz".to_string(),
//!     ..Config::default()
//! };
//! assert_eq!(config.temp_prefix, "installer-probe-");
//! ```

use std::path::PathBuf;

/// Default extractor executable, looked up on `PATH`.
pub const DEFAULT_EXTRACTOR: &str = "7z";

/// Prefix for the per-run temporary directory.
///
/// Contains no signature.
pub const DEFAULT_TEMP_PREFIX: &str = "installer-probe-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Program used to unpack installers.
    ///
    /// Default: `7z`
    pub extractor_program: String,

    /// Directory in which the temporary extraction directory is created.
    ///
    /// Default: `None` (the system temp directory)
    pub temp_root: Option<PathBuf>,

    /// Name prefix of the temporary extraction directory.
    pub temp_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extractor_program: DEFAULT_EXTRACTOR.to_string(),
            temp_root: None,
            temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
        }
    }
}
