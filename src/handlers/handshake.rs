//! Handshaking-state handlers.

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

use quarry_proto::codec::write_packet;
use quarry_proto::packets::{Handshake, StatusResponse};
use quarry_proto::ProtocolState;

use crate::dispatch::HandlerFuture;
use crate::error::HandlerError;
use crate::session::Session;

/// Handle the handshake packet (Handshaking, 0x00).
///
/// Moves the session to the client's chosen next state. A status
/// handshake is answered immediately with the status document; the
/// subsequent status-request packet carries no further information.
pub fn handshake<S>(session: &mut Session<S>) -> HandlerFuture<'_>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    Box::pin(async move {
        let handshake = Handshake::read(&mut session.reader).await?;

        debug!(
            protocol = handshake.protocol_version,
            address = %handshake.server_address,
            port = handshake.server_port,
            next_state = ?handshake.next_state,
            "received handshake"
        );

        session.state = handshake.next_state;

        if handshake.next_state == ProtocolState::Status {
            let response = StatusResponse::new(session.status.document().to_string());
            write_packet(&mut session.writer, &response.to_raw()).await?;
        }

        Ok(())
    })
}

/// Handle a legacy (pre-framing) server list ping (Handshaking, leading
/// 0xFE). Detection only; decoding the legacy body is an open extension
/// point.
pub fn legacy_server_list_ping<S>(session: &mut Session<S>) -> HandlerFuture<'_>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    let _ = session;
    Box::pin(async move { Err(HandlerError::NotImplemented) })
}
