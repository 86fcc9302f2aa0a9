//! Login packets.
//!
//! Only the Login Start payload is decoded; the rest of the login flow
//! (encryption, plugin channels) is an open extension point.

use tokio::io::AsyncRead;

use crate::codec::read_string;
use crate::error::Result;

/// Login Start packet ID.
pub const LOGIN_START_PACKET_ID: i32 = 0x00;

/// Encryption Response packet ID.
pub const ENCRYPTION_RESPONSE_PACKET_ID: i32 = 0x01;

/// Login Plugin Response packet ID.
pub const LOGIN_PLUGIN_RESPONSE_PACKET_ID: i32 = 0x02;

/// Login Start packet (client -> server, Login 0x00).
#[derive(Debug, Clone)]
pub struct LoginStart {
    /// The player's username.
    pub name: String,
}

impl LoginStart {
    /// Read a login start payload from an async source positioned just
    /// after the packet ID.
    ///
    /// # Errors
    ///
    /// Returns an error on a stream failure or a malformed string.
    pub async fn read<R: AsyncRead + Unpin>(reader: &mut R) -> Result<Self> {
        let name = read_string(reader).await?;
        Ok(Self { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;
    use std::io::Cursor;

    use crate::codec::write_string;

    #[tokio::test]
    async fn login_start_decode() {
        let mut payload = BytesMut::new();
        write_string(&mut payload, "Notch");

        let mut cursor = Cursor::new(payload.to_vec());
        let parsed = LoginStart::read(&mut cursor).await.unwrap();
        assert_eq!(parsed.name, "Notch");
    }
}
