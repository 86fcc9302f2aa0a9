//! Handshake packet.
//!
//! The handshake is the first packet sent by the client and determines
//! whether the connection is a status ping or a login attempt.

use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::codec::{read_string, write_string, RawPacket};
use crate::error::Result;
use crate::state::ProtocolState;
use crate::varint::{read_varint, write_varint_to_buf};

/// Handshake packet ID.
pub const PACKET_ID: i32 = 0x00;

/// Handshake packet sent by the client (Handshaking, 0x00).
#[derive(Debug, Clone)]
pub struct Handshake {
    /// The protocol version the client is using.
    pub protocol_version: i32,
    /// The server address the client connected to.
    pub server_address: String,
    /// The server port the client connected to (big-endian on the wire).
    pub server_port: u16,
    /// The state the connection moves to: Status (1) or Login (2).
    pub next_state: ProtocolState,
}

impl Handshake {
    /// Read a handshake payload from an async source positioned just
    /// after the packet ID.
    ///
    /// # Errors
    ///
    /// Returns an error on a stream failure, a malformed `VarInt`, or an
    /// invalid next-state value.
    pub async fn read<R: AsyncRead + Unpin>(reader: &mut R) -> Result<Self> {
        let protocol_version = read_varint(reader).await?;
        let server_address = read_string(reader).await?;
        let server_port = reader.read_u16().await?;
        let next_state = ProtocolState::from_next_state(read_varint(reader).await?)?;

        Ok(Self {
            protocol_version,
            server_address,
            server_port,
            next_state,
        })
    }

    /// Encode the handshake to a raw packet.
    #[must_use]
    pub fn to_raw(&self) -> RawPacket {
        let mut payload = BytesMut::new();

        write_varint_to_buf(&mut payload, self.protocol_version);
        write_string(&mut payload, &self.server_address);
        payload.put_u16(self.server_port);
        write_varint_to_buf(&mut payload, self.next_state.id());

        RawPacket::new(PACKET_ID, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn handshake_roundtrip() {
        let original = Handshake {
            protocol_version: 404,
            server_address: "localhost".to_string(),
            server_port: 25565,
            next_state: ProtocolState::Status,
        };

        let raw = original.to_raw();
        let mut cursor = Cursor::new(raw.payload.to_vec());
        let parsed = Handshake::read(&mut cursor).await.unwrap();

        assert_eq!(parsed.protocol_version, original.protocol_version);
        assert_eq!(parsed.server_address, original.server_address);
        assert_eq!(parsed.server_port, original.server_port);
        assert_eq!(parsed.next_state, original.next_state);
    }

    #[tokio::test]
    async fn handshake_rejects_bad_next_state() {
        let mut payload = BytesMut::new();
        write_varint_to_buf(&mut payload, 404);
        write_string(&mut payload, "x");
        payload.put_u16(25565);
        write_varint_to_buf(&mut payload, 7);

        let mut cursor = Cursor::new(payload.to_vec());
        assert!(Handshake::read(&mut cursor).await.is_err());
    }
}
