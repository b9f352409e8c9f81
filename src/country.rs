/// Two-letter country codes as specified by ISO 3166-1 alpha-2.
///
/// Only the tracked country is listed.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Country {
    /// Türkiye
    TR,
}

impl Country {
    const CODES: &[&'static str] = &["TR"];
    const NAMES: &[&'static str] = &["Türkiye"];

    // Returns a long name
    pub fn name(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for Country {
    fn as_ref(&self) -> &str {
        Self::CODES[*self as usize]
    }
}
