use crate::config::Config;
use crate::error::ExtractionError;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Longest stderr excerpt carried in an error.
const STDERR_LIMIT: usize = 512;

/// Extracts archives with the `7z` command-line tool.
#[derive(Debug, Clone)]
pub struct SevenZip {
    program: String,
}

impl SevenZip {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.extractor_program.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SevenZip {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl super::Extractor for SevenZip {
    fn name(&self) -> &'static str {
        "7-Zip"
    }

    fn is_available(&self) -> bool {
        // 7z prints its banner and usage when run bare
        Command::new(&self.program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    fn unpack(&self, archive: &Path, dest: &Path) -> Result<(), ExtractionError> {
        let mut out_arg = std::ffi::OsString::from("-o");
        out_arg.push(dest);

        // Output is captured so that 7z's listing never reaches our stdout.
        let output = Command::new(&self.program)
            .arg("x")
            .arg(archive)
            .arg(out_arg)
            .arg("-y")
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ExtractionError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if output.status.success() {
            debug!(program = %self.program, "extraction finished");
            return Ok(());
        }

        let stderr = tail(&String::from_utf8_lossy(&output.stderr), STDERR_LIMIT);
        debug!(program = %self.program, status = %output.status, %stderr, "extraction failed");

        Err(ExtractionError::Failed {
            program: self.program.clone(),
            status: output.status,
            stderr,
        })
    }
}

/// Last `limit` bytes of trimmed `text`, cut on a char boundary, on one line.
fn tail(text: &str, limit: usize) -> String {
    let text = text.trim();
    let mut start = text.len().saturating_sub(limit);
    while !text.is_char_boundary(start) {
        start += 1;
    }
    text[start..].split_whitespace().collect::<Vec<_>>().join(" ")
}
