//! Error types for the dispatcher and its collaborators.
//!
//! None of these are fatal. A failed message leaves the caches consistent and
//! the dispatcher ready for the next one.

use steam_social_proto::{DecodeError, MessageKind};
use thiserror::Error;

// ============================================================================
// Dispatch Errors (inbound message processing)
// ============================================================================

/// Errors that abort processing of a single inbound message.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// An embedded binary record could not be decoded. Records applied before
    /// the failure stay applied.
    #[error("malformed {} payload: {source}", .kind.as_str())]
    Malformed {
        kind: MessageKind,
        #[source]
        source: DecodeError,
    },
}

impl DispatchError {
    pub(crate) fn malformed(kind: MessageKind, source: DecodeError) -> Self {
        Self::Malformed { kind, source }
    }

    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "malformed_record",
        }
    }

    /// Kind of the message that failed.
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Malformed { kind, .. } => *kind,
        }
    }
}

/// Result type for message handlers.
pub type DispatchResult = Result<(), DispatchError>;

// ============================================================================
// Transport Errors (outbound requests)
// ============================================================================

/// Errors reported by a [`Transport`](crate::transport::Transport) when
/// handing over an outbound request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("transport closed")]
    Closed,

    #[error("request rejected: {0}")]
    Rejected(String),
}
