//! Ambient document events
//!
//! Events are structured values, not callbacks into hidden global state.
//! An event always fires on a specific scope: listeners registered on one
//! scope never observe events dispatched on the other.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The ambient object an event fires on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventScope {
    /// The window (outermost) object
    Window,
    /// The document object
    Document,
}

impl fmt::Display for EventScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventScope::Window => write!(f, "window"),
            EventScope::Document => write!(f, "document"),
        }
    }
}

/// Event observed on a document or window scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentEvent {
    /// The rendered geometry changed
    Resize,
    // Reserved for future:
    // Load,
    // VisibilityChange,
}

impl DocumentEvent {
    /// Returns true if this is a resize event
    pub fn is_resize(&self) -> bool {
        matches!(self, Self::Resize)
    }
}

impl fmt::Display for DocumentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentEvent::Resize => write!(f, "resize"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_scope_display() {
        assert_eq!(EventScope::Window.to_string(), "window");
        assert_eq!(EventScope::Document.to_string(), "document");
    }

    #[test]
    fn test_event_is_resize() {
        assert!(DocumentEvent::Resize.is_resize());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(DocumentEvent::Resize.to_string(), "resize");
    }

    #[test]
    fn test_scopes_are_distinct() {
        assert_ne!(EventScope::Window, EventScope::Document);
    }
}
