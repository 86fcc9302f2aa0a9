//! Protocol error types.

use std::io;

use thiserror::Error;

/// Errors that can occur when reading or writing protocol data.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// An I/O error occurred, including a clean end-of-stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A `VarInt` was too long (more than 5 bytes).
    #[error("VarInt too long")]
    VarIntTooLong,

    /// A `VarLong` was too long (more than 10 bytes).
    #[error("VarLong too long")]
    VarLongTooLong,

    /// An invalid next state was received in a handshake.
    #[error("invalid next state: {0}")]
    InvalidNextState(i32),
}

impl ProtocolError {
    /// Whether this is a malformed-encoding failure rather than a stream
    /// failure.
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(
            self,
            Self::VarIntTooLong | Self::VarLongTooLong | Self::InvalidNextState(_)
        )
    }
}

/// Result type alias using [`ProtocolError`].
pub type Result<T> = std::result::Result<T, ProtocolError>;
