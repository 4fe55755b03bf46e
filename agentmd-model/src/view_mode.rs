//! View-mode identifiers.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const FULL: &str = "full";

/// Identifier of a view mode — a named, pre-configured rendering recipe
/// controlling which fields of an entity are shown and how.
///
/// The literal `full` mode is special: it is the hard-coded fallback and is
/// assumed to exist for every (entity type, bundle) pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewMode(String);

impl ViewMode {
    /// Creates a view mode from an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The `full` view mode.
    #[must_use]
    pub fn full() -> Self {
        Self(FULL.to_string())
    }

    /// Whether this is the literal `full` mode.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0 == FULL
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ViewMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for ViewMode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ViewMode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ViewMode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ViewMode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
