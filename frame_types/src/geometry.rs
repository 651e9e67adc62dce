//! Content geometry types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered content height in CSS pixels
///
/// This is the scroll height of the root element: the full height of the
/// rendered content including portions hidden by overflow, not the visible
/// viewport height. Always a non-negative integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct ContentHeight(u32);

impl ContentHeight {
    /// Creates a height from a pixel count
    pub const fn from_px(px: u32) -> Self {
        Self(px)
    }

    /// Returns the height in pixels
    pub const fn px(&self) -> u32 {
        self.0
    }

    /// Checks if the content has zero height
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ContentHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}
