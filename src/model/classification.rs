/// Outcome of scanning an installer.
///
/// Carries no detail about which signature matched or where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Electron,
    NotElectron,
}

impl Classification {
    /// The literal line printed for this result.
    pub fn token(&self) -> &'static str {
        match self {
            Classification::Electron => "ELECTRON",
            Classification::NotElectron => "NO",
        }
    }

    pub fn is_electron(&self) -> bool {
        matches!(self, Classification::Electron)
    }
}

impl From<bool> for Classification {
    fn from(matched: bool) -> Self {
        if matched {
            Classification::Electron
        } else {
            Classification::NotElectron
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
