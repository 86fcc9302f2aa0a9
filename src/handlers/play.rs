//! Play-state handlers.
//!
//! All serverbound Play packet IDs route here. None of them decode their
//! payload, so a Play-state client will desynchronize the stream; the
//! Play state is an extension point, not a supported surface.

use tokio::io::{AsyncRead, AsyncWrite};

use crate::dispatch::HandlerFuture;
use crate::error::HandlerError;
use crate::session::Session;

/// Shared placeholder for every serverbound Play packet.
pub fn placeholder<S>(session: &mut Session<S>) -> HandlerFuture<'_>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    let _ = session;
    Box::pin(async move { Err(HandlerError::NotImplemented) })
}
