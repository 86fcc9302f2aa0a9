//! Per-connection protocol state.

use crate::error::{ProtocolError, Result};

/// The protocol state of a connection.
///
/// Every connection starts in [`Handshaking`](Self::Handshaking); the
/// handshake packet's next-state field moves it to `Status` or `Login`.
/// The active state selects which packet-ID namespace is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolState {
    /// Initial state, before the handshake has been read.
    Handshaking,
    /// Server list ping.
    Status,
    /// Authentication.
    Login,
    /// In-game.
    Play,
}

impl ProtocolState {
    /// Interpret a handshake next-state field.
    ///
    /// Only `1` (Status) and `2` (Login) are valid choices for a client.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidNextState`] for any other value.
    pub const fn from_next_state(value: i32) -> Result<Self> {
        match value {
            1 => Ok(Self::Status),
            2 => Ok(Self::Login),
            other => Err(ProtocolError::InvalidNextState(other)),
        }
    }

    /// The wire value used for this state in a handshake.
    #[must_use]
    pub const fn id(self) -> i32 {
        match self {
            Self::Handshaking => 0,
            Self::Status => 1,
            Self::Login => 2,
            Self::Play => 3,
        }
    }
}
