//! Server-side error types.

use thiserror::Error;

use quarry_proto::ProtocolError;

/// Errors returned by packet handlers.
///
/// A handler failure after a successfully framed header is logged by the
/// session loop and the connection keeps reading; only failures while
/// decoding the length/ID prefix itself terminate a session.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// A protocol decode or I/O failure inside the handler.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The packet is recognized but its handler is a placeholder.
    #[error("not implemented")]
    NotImplemented,
}

/// Result type alias for packet handlers.
pub type HandlerResult = Result<(), HandlerError>;
