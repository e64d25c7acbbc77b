//! Core domain types for the roster.

use serde::{Deserialize, Serialize};

// ── Person ────────────────────────────────────────────────────────

/// Unique identifier for a Person record.
///
/// Ids are assigned by the backing store at create time and never change
/// afterwards. The graph backend delegates generation to the database
/// (`randomUuid()`), so this wraps the string form rather than a parsed UUID.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A person record: an immutable id and a mutable display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}
