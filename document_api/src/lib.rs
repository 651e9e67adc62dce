//! # Document API
//!
//! This crate defines the interface between FrameFit components and the
//! ambient browsing environment.
//!
//! ## Philosophy
//!
//! The environment provides **capabilities**, not globals:
//! - Document metrics (scroll height, location) are read through a trait
//! - The parent context is an explicit, optional port
//! - A top-level document simply has no port; nothing probes global state
//!
//! ## Design Goals
//!
//! 1. **Testability**: The entire API can be mocked and tested
//! 2. **Explicitness**: No hidden state or ambient authority
//! 3. **Simplicity**: Minimal surface area
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A DOM binding (no nodes, no styles, no selectors)
//! - An event loop (dispatch lives with the embed runtime)
//! - A specific transport (the traits can be implemented many ways)

pub mod document;
pub mod error;

pub use document::{DocumentApi, ParentPort};
pub use error::PortError;
