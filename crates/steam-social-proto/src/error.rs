//! Error types for the binary codec.

use thiserror::Error;

/// Convenience type alias for Results using [`DecodeError`].
pub type Result<T, E = DecodeError> = std::result::Result<T, E>;

/// Errors raised while decoding an embedded binary record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The payload ended before the record layout was complete.
    #[error("malformed record: {field} at byte {offset} needs {needed} bytes, {available} left")]
    MalformedRecord {
        /// Layout field being read when the payload ran out.
        field: &'static str,
        /// Byte offset of that field from the start of the payload.
        offset: usize,
        /// Bytes the field needs.
        needed: usize,
        /// Bytes that were left.
        available: usize,
    },
}

impl DecodeError {
    /// Layout field the decoder was reading when it failed.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::MalformedRecord { field, .. } => field,
        }
    }
}
