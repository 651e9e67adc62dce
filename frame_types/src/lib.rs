//! # Frame Types
//!
//! This crate defines the fundamental types used throughout FrameFit.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: Origins, tokens, and heights are distinct
//!   types that cannot be confused with each other or with bare strings.
//! - **Type safety first**: The type system prevents misuse at compile time.
//! - **Serializable**: Everything that crosses a context boundary can be
//!   serialized and snapshot-tested.
//!
//! ## Key Types
//!
//! - [`ContextId`]: Unique identifier for a browsing context
//! - [`ContainerId`]: Unique identifier for a host-side container
//! - [`EmbedToken`]: Query-derived token correlating a guest with its container
//! - [`ContentHeight`]: Rendered content height in pixels
//! - [`MessageOrigin`] / [`TargetOrigin`]: Origin addressing for posts
//! - [`EventScope`] / [`DocumentEvent`]: Ambient events and where they fire

pub mod events;
pub mod geometry;
pub mod ids;
pub mod origin;
pub mod token;

pub use events::{DocumentEvent, EventScope};
pub use geometry::ContentHeight;
pub use ids::{ContainerId, ContextId};
pub use origin::{MessageOrigin, TargetOrigin};
pub use token::EmbedToken;
