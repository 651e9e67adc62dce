//! Embed runtime: listener registration and event dispatch

use crate::{HeightReporter, ReportOutcome, ReporterConfig};
use document_api::{DocumentApi, PortError};
use frame_types::{DocumentEvent, EventScope};

/// Outcome of dispatching one ambient event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A registered listener handled the event
    Handled(ReportOutcome),
    /// No listener matched the event's scope and kind
    Ignored,
}

impl DispatchOutcome {
    /// Returns true if no listener matched
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    /// Returns the report outcome, if the event was handled
    pub fn handled(&self) -> Option<&ReportOutcome> {
        match self {
            Self::Handled(outcome) => Some(outcome),
            Self::Ignored => None,
        }
    }
}

/// Owns the guest document and routes ambient events to the reporter
///
/// Installation mirrors script-load evaluation: the resize listener is
/// registered first, then one unconditional initial report is made so the
/// parent learns the height without waiting for an event.
///
/// The listener binds to the **document** scope, not the window. Resize
/// events dispatched on the window scope therefore never reach it; this
/// reproduces the observed embed-script behavior and is pinned by tests.
#[derive(Debug)]
pub struct EmbedRuntime<D: DocumentApi> {
    document: D,
    reporter: HeightReporter,
    listeners: Vec<(EventScope, DocumentEvent)>,
}

impl<D: DocumentApi> EmbedRuntime<D> {
    /// Registers the resize listener and fires the initial report
    ///
    /// The listener stays registered even when the initial report fails;
    /// the initial result is returned alongside the runtime so the caller
    /// can observe it either way.
    pub fn install(document: D, config: ReporterConfig) -> (Self, Result<ReportOutcome, PortError>) {
        let mut runtime = Self {
            document,
            reporter: HeightReporter::with_config(config),
            listeners: vec![(EventScope::Document, DocumentEvent::Resize)],
        };
        let initial = runtime.reporter.report(&mut runtime.document);
        (runtime, initial)
    }

    /// Delivers an ambient event to the registered listeners
    ///
    /// A resize on the document scope triggers a report; anything else is
    /// ignored. Port failures from a triggered report propagate.
    pub fn dispatch(
        &mut self,
        scope: EventScope,
        event: DocumentEvent,
    ) -> Result<DispatchOutcome, PortError> {
        let matched = self
            .listeners
            .iter()
            .any(|(listener_scope, listener_event)| {
                *listener_scope == scope && *listener_event == event
            });
        if !matched {
            return Ok(DispatchOutcome::Ignored);
        }

        let outcome = self.reporter.report(&mut self.document)?;
        Ok(DispatchOutcome::Handled(outcome))
    }

    /// Returns the owned document
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Returns the owned document mutably, e.g. to simulate reflow
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Returns the registered listeners as (scope, event) pairs
    pub fn listeners(&self) -> &[(EventScope, DocumentEvent)] {
        &self.listeners
    }
}
