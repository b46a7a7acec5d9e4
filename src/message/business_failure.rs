use serde::{Deserialize, Serialize};
use std::fmt;

/// Application-level failure produced by a dispatched method.
///
/// Recoverable from the caller's point of view; carried as data inside an
/// [`InternalResponse`](super::InternalResponse), never as a
/// translation-layer error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessFailure {
    /// Human-readable message. The only part that reaches a weakly-typed peer.
    pub message: String,

    /// Structured detail (cause chain, internal codes). Stays on this side of
    /// the boundary.
    pub detail: Option<String>,
}

impl BusinessFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: Some(detail.into()),
        }
    }

    /// The single lossy step at the text boundary: exactly this string is
    /// shown to a weakly-typed peer, everything else is dropped.
    pub fn to_display_message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for BusinessFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for BusinessFailure {}
