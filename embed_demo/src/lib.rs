//! # Embed Demo
//!
//! This is a simple demonstration of wiring a simulated guest document to
//! an embed host. It is NOT a real embedder integration.

use frame_types::{ContentHeight, DocumentEvent, EmbedToken, EventScope};
use services_diagnostics::SharedLog;
use services_embed_host::{EmbedHost, HostConfig};
use services_height_reporter::{EmbedRuntime, ReporterConfig};
use sim_document::{SimDocument, SimParentPort};

/// Bootstrap function
///
/// Wires together a host with one registered container and an embedded
/// guest document carrying the matching token. Returns the host, the
/// installed runtime, and the shared log so callers can inspect all three.
pub fn bootstrap() -> (EmbedHost, EmbedRuntime<SimDocument>, SharedLog) {
    let log = SharedLog::new();

    let mut host = EmbedHost::new(HostConfig::new()).with_log_sink(Box::new(log.clone()));
    host.register_container(EmbedToken::new("campaign=42"))
        .expect("token not yet registered");

    let doc = SimDocument::new()
        .with_search("?campaign=42")
        .with_scroll_height(ContentHeight::from_px(842))
        .with_parent(SimParentPort::new("https://embedder.example"));
    let (runtime, initial) = EmbedRuntime::install(doc, ReporterConfig::new());
    initial.expect("initial report");

    (host, runtime, log)
}

/// Demo function showing one full resize cycle
///
/// Returns the container heights the host applied, in order.
pub fn demo() -> Vec<ContentHeight> {
    let (mut host, mut runtime, _log) = bootstrap();
    let guest_origin = frame_types::MessageOrigin::new("https://guest.example");
    let mut applied = Vec::new();

    // Initial height, posted at install time.
    for raw in runtime
        .document_mut()
        .parent_mut()
        .expect("demo guest is embedded")
        .take_delivered()
    {
        let update = host
            .handle_message(&raw, &guest_origin)
            .expect("demo payloads are well-formed");
        applied.push(update.height);
    }

    // Content grows; the document-scope resize event repeats the cycle.
    runtime
        .document_mut()
        .set_scroll_height(ContentHeight::from_px(1204));
    runtime
        .dispatch(EventScope::Document, DocumentEvent::Resize)
        .expect("dispatch");
    for raw in runtime
        .document_mut()
        .parent_mut()
        .expect("demo guest is embedded")
        .take_delivered()
    {
        let update = host
            .handle_message(&raw, &guest_origin)
            .expect("demo payloads are well-formed");
        applied.push(update.height);
    }

    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_applies_both_heights() {
        let applied = demo();
        assert_eq!(
            applied,
            vec![ContentHeight::from_px(842), ContentHeight::from_px(1204)]
        );
    }

    #[test]
    fn test_bootstrap_registers_one_container() {
        let (host, _runtime, log) = bootstrap();
        assert_eq!(host.container_count(), 1);
        assert!(log.is_empty());
    }
}
