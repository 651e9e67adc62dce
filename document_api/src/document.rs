//! Document and parent-port traits

use crate::PortError;
use frame_types::{ContentHeight, TargetOrigin};
use messaging::HeightReport;

/// Port for posting cross-document messages to the embedding parent
///
/// Posting is fire-and-forget: a post whose target origin does not match
/// the receiving context is dropped by the port without error, mirroring
/// cross-document messaging semantics. A port that can no longer reach its
/// context returns [`PortError`].
pub trait ParentPort {
    /// Posts a height report toward the parent context
    fn post(&mut self, report: &HeightReport, target: &TargetOrigin) -> Result<(), PortError>;
}

/// The document environment trait
///
/// This defines the interface between FrameFit components and the document
/// they run in. Multiple implementations are possible:
/// - Simulated document (for testing)
/// - Real embedder glue (bindings to an actual rendering environment)
///
/// # Design Principles
///
/// **Injected capability**: components receive a `DocumentApi`, they never
/// look up window or document globals themselves.
///
/// **Optional parent**: a top-level document, or one whose parent cannot
/// receive cross-document messages, returns `None` from [`parent_port`] —
/// the single condition components guard against.
///
/// # Example
///
/// ```
/// use document_api::DocumentApi;
/// use frame_types::EmbedToken;
///
/// fn current_token<D: DocumentApi>(doc: &D) -> EmbedToken {
///     EmbedToken::from_location_search(doc.location_search())
/// }
/// ```
///
/// [`parent_port`]: DocumentApi::parent_port
pub trait DocumentApi {
    /// Returns the scroll height of the root element
    ///
    /// This is the full rendered content height including overflow, not the
    /// visible viewport height.
    fn scroll_height(&self) -> ContentHeight;

    /// Returns the raw location search string
    ///
    /// Includes the leading `?` delimiter when a query is present; empty
    /// when the location has none.
    fn location_search(&self) -> &str;

    /// Returns the port to the embedding parent context, if any
    ///
    /// `None` means the document is top-level or the parent lacks the
    /// capability to receive cross-document messages.
    fn parent_port(&mut self) -> Option<&mut dyn ParentPort>;
}
