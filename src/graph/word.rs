//! Word: the label type that identifies a node in the graph

use serde::{Deserialize, Serialize};

/// A node label in the word graph
///
/// Serializes as a plain string. Identity is by label: two `Word`s with the
/// same text are the same node, so no separate id type is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Create a Word from any string-like value
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }

    /// Case-fold a query argument to the stored label form
    ///
    /// Every label in the graph is lowercase, so lookups fold their input
    /// the same way ingestion does.
    pub fn normalize(word: &str) -> Self {
        Self(word.to_lowercase())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Word {
    fn from(s: String) -> Self {
        Self(s)
    }
}
