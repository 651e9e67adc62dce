//! # Embedding Integration Tests
//!
//! End-to-end tests for the guest-to-host resize pipeline.
//!
//! ## Test Philosophy
//!
//! - **Happy path**: install → initial report → host applies the height
//! - **Event-driven updates**: reflow + document-scope resize → new height
//! - **Silence**: top-level guests and window-scope events produce nothing
//! - **Origin discipline**: both the guest's target origin and the host's
//!   allowlist are enforced at their respective ends
//!
//! The tests live in `tests/embed_resize_pipeline.rs`.
