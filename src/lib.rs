pub mod config;
pub mod error;
pub mod extractor;
pub mod inspect;
pub mod model;
pub mod scanner;

pub use config::Config;
pub use error::{ExtractionError, ProbeError, ScanError};
pub use extractor::{ExtractedDir, Extractor, SevenZip};
pub use inspect::inspect;
pub use model::Classification;
pub use scanner::{Scanner, SignatureSet, SIGNATURES};
