//! Result types.
//!
//! - [`Classification`] - Whether an installer was built with Electron
//!
//! # Example
//!
//! ```
//! use electroscan::Classification;
//!
//! let result = Classification::from(true);
//! assert_eq!(result.token(), "ELECTRON");
//! ```

mod classification;

pub use classification::*;
