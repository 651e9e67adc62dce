//! # Messaging
//!
//! This crate defines FrameFit's cross-document wire contract.
//!
//! ## Philosophy
//!
//! - **The wire shape is the contract**: a height report is the ordered
//!   triple `[token, "setHeight", height]`, nothing more. No envelope, no
//!   schema version, no correlation ID.
//! - **Strict on receive**: consumers validate the shape and the literal
//!   action tag before reacting.
//! - **Stable**: the exact JSON encoding is frozen by contract tests.
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A general message bus
//! - A request/response protocol (reports are fire-and-forget)
//! - A transport (ports live in `document_api`)

pub mod report;

pub use report::{HeightReport, WireError, SET_HEIGHT_ACTION};
