//! Entity Identifier
//!
//! Opaque identity shared by forms, modules, projects, accounts and users.
//! Identifiers arriving in request bodies are kept as-is; entities created
//! server-side mint a fresh UUID.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier value object for entities
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    /// Mint a new random identifier
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_ids_are_unique() {
        assert_ne!(EntityId::new(), EntityId::new());
    }

    #[test]
    fn test_from_string_round_trips() {
        let id = EntityId::from_string("form-7");
        assert_eq!(id.as_str(), "form-7");
        assert_eq!(id.to_string(), "form-7");
    }
}
