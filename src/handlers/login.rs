//! Login-state handlers. The login flow itself is unimplemented; the
//! login start payload is decoded so the stream stays aligned.

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

use quarry_proto::packets::LoginStart;

use crate::dispatch::HandlerFuture;
use crate::error::HandlerError;
use crate::session::Session;

/// Handle login start (Login, 0x00): decode the username, then report
/// not-implemented.
pub fn login_start<S>(session: &mut Session<S>) -> HandlerFuture<'_>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    Box::pin(async move {
        let login = LoginStart::read(&mut session.reader).await?;

        debug!(name = %login.name, "received login start");

        Err(HandlerError::NotImplemented)
    })
}

/// Handle encryption response (Login, 0x01). Placeholder.
pub fn encryption_response<S>(session: &mut Session<S>) -> HandlerFuture<'_>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    let _ = session;
    Box::pin(async move { Err(HandlerError::NotImplemented) })
}

/// Handle login plugin response (Login, 0x02). Placeholder.
pub fn login_plugin_response<S>(session: &mut Session<S>) -> HandlerFuture<'_>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    let _ = session;
    Box::pin(async move { Err(HandlerError::NotImplemented) })
}
