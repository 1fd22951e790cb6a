//! Upstream collection names.

use std::fmt;

/// A top-level collection of the Star Wars API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Films,
    People,
    Planets,
    Species,
    Starships,
}

impl Collection {
    /// Path segment of the collection (e.g. `planets`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Films => "films",
            Self::People => "people",
            Self::Planets => "planets",
            Self::Species => "species",
            Self::Starships => "starships",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
