//! Participant model
//!
//! A participant is a normalized name: surrounding whitespace removed and
//! lowercased, so "  Alice " and "alice" are the same person.

/// A single gift-exchange participant
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Participant(String);

impl Participant {
    /// Create a participant from a raw name, normalizing it
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    /// The normalized name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this name looks like a `#` header line
    #[must_use]
    pub fn is_comment(&self) -> bool {
        self.0.starts_with('#')
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Participant {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Trim and lowercase a raw name
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}
