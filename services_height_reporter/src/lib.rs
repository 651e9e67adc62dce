//! # Height Reporter Service
//!
//! This crate implements the guest side of FrameFit: measuring the rendered
//! content height of an embedded document and reporting it to the embedding
//! parent context so the host can resize the container.
//!
//! ## Philosophy
//!
//! - **Capability-injected**: the reporter reads document state and reaches
//!   the parent only through [`document_api`] traits, never through globals
//! - **Fire-and-forget**: one post per trigger, no retries, no dedup
//! - **Graceful when top-level**: a document with no addressable parent
//!   produces zero messages, silently
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A layout engine (heights are read, never computed)
//! - A message bus (exactly one outbound report shape)
//! - A scheduler (dispatch is driven by the embedder)

pub mod reporter;
pub mod runtime;

pub use reporter::{HeightReporter, ReportOutcome, ReporterConfig};
pub use runtime::{DispatchOutcome, EmbedRuntime};
