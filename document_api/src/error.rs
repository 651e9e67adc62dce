//! Port error types

use messaging::WireError;
use thiserror::Error;

/// Errors raised by a parent message port
///
/// A missing port is not an error (the document is simply top-level); these
/// are failures of a port that does exist. Callers propagate them unhandled;
/// there is no retry or recovery on the posting path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortError {
    #[error("Parent context is detached: {0}")]
    Detached(String),

    #[error("Encoding error: {0}")]
    Encode(String),
}

impl From<WireError> for PortError {
    fn from(error: WireError) -> Self {
        PortError::Encode(error.to_string())
    }
}
