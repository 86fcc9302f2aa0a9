//! Status (server list ping) packets.

use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::codec::{write_string, RawPacket};
use crate::error::Result;

/// Status Request / Status Response packet ID.
pub const STATUS_PACKET_ID: i32 = 0x00;

/// Ping / Pong packet ID.
pub const PING_PACKET_ID: i32 = 0x01;

/// Status Response packet (server -> client, Status 0x00).
///
/// Carries a JSON document with `version`, `players` and `description`
/// fields, encoded as a length-prefixed string.
#[derive(Debug, Clone)]
pub struct StatusResponse {
    /// JSON response containing server status.
    pub json: String,
}

impl StatusResponse {
    /// Create a new status response with the given JSON.
    #[must_use]
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }

    /// Encode to a raw packet.
    #[must_use]
    pub fn to_raw(&self) -> RawPacket {
        let mut payload = BytesMut::new();
        write_string(&mut payload, &self.json);
        RawPacket::new(STATUS_PACKET_ID, payload)
    }
}

/// Ping packet (client -> server, Status 0x01).
///
/// The payload is an arbitrary 8-byte big-endian value, usually a
/// timestamp, echoed back unchanged in a [`Pong`].
#[derive(Debug, Clone, Copy)]
pub struct Ping {
    /// Arbitrary client payload.
    pub payload: i64,
}

impl Ping {
    /// Read a ping payload from an async source positioned just after
    /// the packet ID.
    ///
    /// # Errors
    ///
    /// Returns an error on a stream failure.
    pub async fn read<R: AsyncRead + Unpin>(reader: &mut R) -> Result<Self> {
        let payload = reader.read_i64().await?;
        Ok(Self { payload })
    }

    /// Encode to a raw packet.
    #[must_use]
    pub fn to_raw(self) -> RawPacket {
        let mut payload = BytesMut::with_capacity(8);
        payload.put_i64(self.payload);
        RawPacket::new(PING_PACKET_ID, payload)
    }
}

/// Pong packet (server -> client, Status 0x01).
#[derive(Debug, Clone, Copy)]
pub struct Pong {
    /// The payload from the ping packet, unchanged.
    pub payload: i64,
}

impl Pong {
    /// Create a pong echoing the given ping payload.
    #[must_use]
    pub const fn new(payload: i64) -> Self {
        Self { payload }
    }

    /// Encode to a raw packet.
    #[must_use]
    pub fn to_raw(self) -> RawPacket {
        let mut payload = BytesMut::with_capacity(8);
        payload.put_i64(self.payload);
        RawPacket::new(PING_PACKET_ID, payload)
    }
}
