//! Known Electron signatures and the matcher built from them.

use aho_corasick::AhoCorasick;
use std::sync::OnceLock;

/// Path fragments that show up inside installers built with Electron.
///
/// Matching is a plain substring test, so this is a heuristic allowlist
/// rather than a fingerprint. The bare `electron` entry matches any path
/// containing that word, including unrelated names such as `electronics`.
pub const SIGNATURES: &[&str] = &[
    "electron.asar",
    "app.asar",
    "package.json",
    "node_modules/electron/",
    "Electron Framework.framework",
    "Mantle.framework",
    "ReactiveObjc.framework",
    "Squirrel.framework",
    "electron",
    "node.dll",
    "content_shell.pak",
    "icudtl.dat",
    "libGLESv2.dll",
    "libEGL.dll",
    "snapshot_blob.bin",
];

/// A compiled set of signatures.
///
/// Wraps an Aho-Corasick automaton so that every candidate path is tested
/// against the whole table in a single pass.
#[derive(Debug, Clone)]
pub struct SignatureSet {
    patterns: Vec<String>,
    matcher: Option<AhoCorasick>,
}

impl SignatureSet {
    /// Builds a set from arbitrary patterns. Empty patterns are ignored.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(Into::into)
            .filter(|p| !p.is_empty())
            .collect();

        let matcher = if patterns.is_empty() {
            None
        } else {
            AhoCorasick::new(&patterns).ok()
        };

        Self { patterns, matcher }
    }

    /// The process-wide set built from [`SIGNATURES`].
    pub fn builtin() -> &'static SignatureSet {
        static BUILTIN: OnceLock<SignatureSet> = OnceLock::new();
        BUILTIN.get_or_init(|| SignatureSet::new(SIGNATURES.iter().copied()))
    }

    /// Returns the first signature found anywhere in `haystack`.
    pub fn find(&self, haystack: &str) -> Option<&str> {
        match &self.matcher {
            Some(ac) => ac
                .find(haystack)
                .map(|m| self.patterns[m.pattern().as_usize()].as_str()),
            // Only reached if the automaton could not be built.
            None => self
                .patterns
                .iter()
                .find(|p| haystack.contains(p.as_str()))
                .map(String::as_str),
        }
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.find(haystack).is_some()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for SignatureSet {
    fn default() -> Self {
        SignatureSet::builtin().clone()
    }
}
