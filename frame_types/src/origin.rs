//! Origin addressing for cross-document posts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Serialized origin of a browsing context
///
/// An origin is the `scheme://host[:port]` tuple a document was loaded
/// from. Compared byte-for-byte; this crate does no normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageOrigin(String);

impl MessageOrigin {
    /// Creates an origin from its serialized form
    pub fn new(origin: impl Into<String>) -> Self {
        Self(origin.into())
    }

    /// Returns the origin as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MessageOrigin {
    fn from(origin: &str) -> Self {
        Self::new(origin)
    }
}

/// Target-origin restriction for an outbound post
///
/// `Wildcard` addresses any parent regardless of origin and is the
/// compatibility default. `Only` restricts delivery to a single origin;
/// a post whose target does not match the receiving context is dropped
/// by the port, never delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TargetOrigin {
    /// Deliver to any origin (`*`)
    #[default]
    Wildcard,
    /// Deliver only to the given origin
    Only(MessageOrigin),
}

impl TargetOrigin {
    /// Creates a restriction to a single origin
    pub fn only(origin: impl Into<MessageOrigin>) -> Self {
        Self::Only(origin.into())
    }

    /// Checks if this is the wildcard target
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// Checks whether a receiving context with the given origin is addressed
    pub fn accepts(&self, origin: &MessageOrigin) -> bool {
        match self {
            Self::Wildcard => true,
            Self::Only(target) => target == origin,
        }
    }
}

impl From<MessageOrigin> for TargetOrigin {
    fn from(origin: MessageOrigin) -> Self {
        Self::Only(origin)
    }
}

impl fmt::Display for TargetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => write!(f, "*"),
            Self::Only(origin) => write!(f, "{}", origin),
        }
    }
}
