//! Status-state handlers.

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

use quarry_proto::codec::write_packet;
use quarry_proto::packets::{Ping, Pong};

use crate::dispatch::HandlerFuture;
use crate::session::Session;

/// Handle a status request (Status, 0x00).
///
/// The packet is empty and the response was already sent when the
/// handshake arrived, so nothing happens here.
pub fn status_request<S>(session: &mut Session<S>) -> HandlerFuture<'_>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    let _ = session;
    Box::pin(async move { Ok(()) })
}

/// Handle a ping (Status, 0x01): echo the 8-byte payload back in a pong.
pub fn ping<S>(session: &mut Session<S>) -> HandlerFuture<'_>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    Box::pin(async move {
        let ping = Ping::read(&mut session.reader).await?;

        debug!(payload = ping.payload, "received ping");

        write_packet(&mut session.writer, &Pong::new(ping.payload).to_raw()).await?;
        Ok(())
    })
}
