//! Unique identifiers for system entities

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a browsing context
///
/// A browsing context is an environment in which a document is presented:
/// a tab, a frame, or an embedded guest. Identifiers are opaque; two
/// contexts never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContextId(Uuid);

impl ContextId {
    /// Creates a new random context ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a context ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Context({})", self.0)
    }
}

/// Unique identifier for a host-side container
///
/// Containers are the resizable host elements that embed guest documents.
/// The host allocates one per registered embed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(Uuid);

impl ContainerId {
    /// Creates a new random container ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a container ID from a UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ContainerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Container({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_id_creation() {
        let id1 = ContextId::new();
        let id2 = ContextId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_context_id_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = ContextId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), uuid);
    }

    #[test]
    fn test_context_id_display() {
        let id = ContextId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("Context("));
    }

    #[test]
    fn test_container_id_creation() {
        let id1 = ContainerId::new();
        let id2 = ContainerId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_container_id_display() {
        let id = ContainerId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("Container("));
    }
}
