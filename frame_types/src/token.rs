//! Embed tokens derived from the document location

use serde::{Deserialize, Serialize};
use std::fmt;

/// Token correlating a guest document with its host container
///
/// The token is carried in the guest's URL query string and echoed back in
/// every height report, so the host can tell which of its containers the
/// report belongs to. It is an opaque string from this crate's perspective:
/// no percent-decoding, no key/value parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmbedToken(String);

impl EmbedToken {
    /// Creates a token from an already-stripped string
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Derives a token from a raw location search string
    ///
    /// Drops exactly one leading character (the `?` delimiter): `"?a=1"`
    /// yields `"a=1"`, and the empty string stays empty. Mirrors substring
    /// semantics rather than a stricter delimiter parse.
    pub fn from_location_search(search: &str) -> Self {
        let mut chars = search.chars();
        chars.next();
        Self(chars.as_str().to_string())
    }

    /// Returns the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks if the token is empty (guest loaded with no query)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EmbedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EmbedToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}
