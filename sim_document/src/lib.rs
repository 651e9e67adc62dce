//! # Simulated Document
//!
//! This crate implements `document_api` over an in-memory simulation so the
//! whole embedding pipeline runs under `cargo test`.
//!
//! ## Philosophy
//!
//! - **Deterministic**: no real rendering, no timers; the test sets the
//!   scroll height and the location explicitly
//! - **Observable**: every payload the parent port delivers is recorded in
//!   order, and origin-mismatch drops are counted
//! - **Composable**: delivered payloads can be drained and fed straight
//!   into a host-side consumer

use document_api::{DocumentApi, ParentPort, PortError};
use frame_types::{ContentHeight, ContextId, MessageOrigin, TargetOrigin};
use messaging::HeightReport;

/// Simulated parent context port
///
/// Records delivered payloads for inspection. A post whose target origin
/// does not match this context's origin is dropped, not delivered — the
/// same observable behavior as a real cross-document post.
#[derive(Debug)]
pub struct SimParentPort {
    origin: MessageOrigin,
    delivered: Vec<Vec<u8>>,
    dropped: usize,
    detached: bool,
}

impl SimParentPort {
    /// Creates a port for a parent context with the given origin
    pub fn new(origin: impl Into<MessageOrigin>) -> Self {
        Self {
            origin: origin.into(),
            delivered: Vec::new(),
            dropped: 0,
            detached: false,
        }
    }

    /// Returns the parent context's origin
    pub fn origin(&self) -> &MessageOrigin {
        &self.origin
    }

    /// Returns the payloads delivered so far, oldest first
    pub fn delivered(&self) -> &[Vec<u8>] {
        &self.delivered
    }

    /// Returns how many posts were dropped by target-origin mismatch
    pub fn dropped_count(&self) -> usize {
        self.dropped
    }

    /// Drains the delivered payloads, e.g. to feed them into a host
    pub fn take_delivered(&mut self) -> Vec<Vec<u8>> {
        std::mem::take(&mut self.delivered)
    }

    /// Simulates the parent context going away mid-session
    ///
    /// Subsequent posts fail with [`PortError::Detached`].
    pub fn detach(&mut self) {
        self.detached = true;
    }
}

impl ParentPort for SimParentPort {
    fn post(&mut self, report: &HeightReport, target: &TargetOrigin) -> Result<(), PortError> {
        if self.detached {
            return Err(PortError::Detached("simulated parent detached".to_string()));
        }

        let raw = report.encode()?;
        if target.accepts(&self.origin) {
            self.delivered.push(raw);
        } else {
            self.dropped += 1;
        }
        Ok(())
    }
}

/// Simulated guest document
///
/// Built with a location search string, a scroll height, and optionally an
/// attached parent port. Defaults to a top-level document: no query, zero
/// height, no parent.
#[derive(Debug)]
pub struct SimDocument {
    context_id: ContextId,
    search: String,
    scroll_height: ContentHeight,
    parent: Option<SimParentPort>,
}

impl SimDocument {
    /// Creates a top-level document with no query and zero height
    pub fn new() -> Self {
        Self {
            context_id: ContextId::new(),
            search: String::new(),
            scroll_height: ContentHeight::from_px(0),
            parent: None,
        }
    }

    /// Sets the raw location search string (including the `?` delimiter)
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the initial scroll height
    pub fn with_scroll_height(mut self, height: ContentHeight) -> Self {
        self.scroll_height = height;
        self
    }

    /// Attaches a parent port, making this an embedded document
    pub fn with_parent(mut self, parent: SimParentPort) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Returns this document's context ID
    pub fn context_id(&self) -> ContextId {
        self.context_id
    }

    /// Simulates a reflow changing the rendered content height
    pub fn set_scroll_height(&mut self, height: ContentHeight) {
        self.scroll_height = height;
    }

    /// Returns the attached parent port for inspection
    pub fn parent(&self) -> Option<&SimParentPort> {
        self.parent.as_ref()
    }

    /// Returns the attached parent port mutably
    pub fn parent_mut(&mut self) -> Option<&mut SimParentPort> {
        self.parent.as_mut()
    }
}

impl Default for SimDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentApi for SimDocument {
    fn scroll_height(&self) -> ContentHeight {
        self.scroll_height
    }

    fn location_search(&self) -> &str {
        &self.search
    }

    fn parent_port(&mut self) -> Option<&mut dyn ParentPort> {
        match self.parent.as_mut() {
            Some(port) => Some(port),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frame_types::EmbedToken;

    fn report(token: &str, px: u32) -> HeightReport {
        HeightReport::new(EmbedToken::new(token), ContentHeight::from_px(px))
    }

    #[test]
    fn test_top_level_document_has_no_port() {
        let mut doc = SimDocument::new();
        assert!(doc.parent_port().is_none());
    }

    #[test]
    fn test_port_records_delivered_payloads_in_order() {
        let mut port = SimParentPort::new("https://host");
        port.post(&report("a=1", 100), &TargetOrigin::Wildcard).unwrap();
        port.post(&report("a=1", 200), &TargetOrigin::Wildcard).unwrap();

        assert_eq!(port.delivered().len(), 2);
        assert_eq!(port.delivered()[0], br#"["a=1","setHeight",100]"#.to_vec());
        assert_eq!(port.delivered()[1], br#"["a=1","setHeight",200]"#.to_vec());
    }

    #[test]
    fn test_port_drops_on_origin_mismatch() {
        let mut port = SimParentPort::new("https://host");
        let target = TargetOrigin::only("https://other");

        port.post(&report("a=1", 100), &target).unwrap();

        assert!(port.delivered().is_empty());
        assert_eq!(port.dropped_count(), 1);
    }

    #[test]
    fn test_port_delivers_on_origin_match() {
        let mut port = SimParentPort::new("https://host");
        let target = TargetOrigin::only("https://host");

        port.post(&report("a=1", 100), &target).unwrap();

        assert_eq!(port.delivered().len(), 1);
        assert_eq!(port.dropped_count(), 0);
    }

    #[test]
    fn test_detached_port_errors() {
        let mut port = SimParentPort::new("https://host");
        port.detach();

        let result = port.post(&report("a=1", 100), &TargetOrigin::Wildcard);
        assert!(matches!(result, Err(PortError::Detached(_))));
    }

    #[test]
    fn test_take_delivered_drains() {
        let mut port = SimParentPort::new("https://host");
        port.post(&report("a=1", 100), &TargetOrigin::Wildcard).unwrap();

        let drained = port.take_delivered();
        assert_eq!(drained.len(), 1);
        assert!(port.delivered().is_empty());
    }

    #[test]
    fn test_document_builder() {
        let mut doc = SimDocument::new()
            .with_search("?foo=bar")
            .with_scroll_height(ContentHeight::from_px(842))
            .with_parent(SimParentPort::new("https://host"));

        assert_eq!(doc.location_search(), "?foo=bar");
        assert_eq!(doc.scroll_height(), ContentHeight::from_px(842));
        assert!(doc.parent_port().is_some());
    }

    #[test]
    fn test_set_scroll_height_simulates_reflow() {
        let mut doc = SimDocument::new().with_scroll_height(ContentHeight::from_px(300));
        doc.set_scroll_height(ContentHeight::from_px(450));
        assert_eq!(doc.scroll_height(), ContentHeight::from_px(450));
    }
}
