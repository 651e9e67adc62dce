//! Height report contract tests
//!
//! These tests define the stable wire contract for height reports. A host
//! written against this contract parses a three-element ordered sequence
//! and reacts to the literal `setHeight` tag; nothing here may change
//! without breaking deployed embedders.

use frame_types::{ContentHeight, EmbedToken};
use messaging::{HeightReport, SET_HEIGHT_ACTION};

// ===== Action Identifier =====
const ACTION_SET_HEIGHT: &str = "setHeight";

// ===== Contract Tests =====
