//! Packet framing and string codec.
//!
//! Packets are framed as `[VarInt length][VarInt packet_id][payload...]`,
//! where the length covers the packet ID and payload but not itself.
//!
//! Inbound traffic is deliberately not buffered here: the session decodes
//! the length and ID prefix, and the selected handler consumes its payload
//! directly from the same byte source. Only the outbound direction builds
//! a full frame before writing.

use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::Result;
use crate::varint::{read_varint, varint_len, write_varint_to_buf};

/// Value of the leading length `VarInt` that marks a legacy (pre-framing)
/// server list ping. The legacy probe starts with the bytes `FE 01`,
/// which decode as the `VarInt` 0xFE. Only meaningful in the handshaking
/// state.
pub const LEGACY_PING_MARKER: i32 = 0xFE;

/// An outbound packet: ID plus payload, not yet length-prefixed.
#[derive(Debug, Clone)]
pub struct RawPacket {
    /// The packet ID.
    pub id: i32,
    /// The packet payload (without the packet ID).
    pub payload: BytesMut,
}

impl RawPacket {
    /// Create a new raw packet with the given ID and payload.
    #[must_use]
    pub const fn new(id: i32, payload: BytesMut) -> Self {
        Self { id, payload }
    }

    /// Create a new raw packet with the given ID and an empty payload.
    #[must_use]
    pub fn empty(id: i32) -> Self {
        Self {
            id,
            payload: BytesMut::new(),
        }
    }
}

/// Write a packet to an async writer as a single framed unit:
/// `VarInt(len(id) + len(payload)) ++ VarInt(id) ++ payload`.
///
/// # Errors
///
/// Returns an error if an I/O error occurs.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub async fn write_packet<W: AsyncWrite + Unpin>(writer: &mut W, packet: &RawPacket) -> Result<()> {
    let body_len = varint_len(packet.id) + packet.payload.len();

    let mut frame = BytesMut::with_capacity(varint_len(body_len as i32) + body_len);
    write_varint_to_buf(&mut frame, body_len as i32);
    write_varint_to_buf(&mut frame, packet.id);
    frame.extend_from_slice(&packet.payload);

    writer.write_all(&frame).await?;
    Ok(())
}

/// Read a length-prefixed UTF-8 string from an async reader.
///
/// A declared length of zero or less yields an empty string. No maximum
/// length is enforced at this layer.
///
/// # Errors
///
/// Fails with an I/O error, producing no partial string, if the source is
/// exhausted before the declared length is read, or if the bytes are not
/// valid UTF-8.
pub async fn read_string<R: AsyncRead + Unpin>(reader: &mut R) -> Result<String> {
    let len = read_varint(reader).await?;

    let Ok(len) = usize::try_from(len) else {
        return Ok(String::new());
    };
    if len == 0 {
        return Ok(String::new());
    }

    let mut bytes = vec![0u8; len];
    reader.read_exact(&mut bytes).await?;

    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()).into())
}

/// Write a string into a buffer as `VarInt(byte length) ++ UTF-8 bytes`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn write_string(buf: &mut impl BufMut, s: &str) {
    let bytes = s.as_bytes();
    write_varint_to_buf(buf, bytes.len() as i32);
    buf.put_slice(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn string_known_encodings() {
        let cases: &[(&str, &[u8])] = &[
            ("", &[0x00]),
            (
                "This is a test",
                &[
                    0x0E, 0x54, 0x68, 0x69, 0x73, 0x20, 0x69, 0x73, 0x20, 0x61, 0x20, 0x74, 0x65,
                    0x73, 0x74,
                ],
            ),
            (
                "76435863",
                &[0x08, 0x37, 0x36, 0x34, 0x33, 0x35, 0x38, 0x36, 0x33],
            ),
        ];

        for (s, expected) in cases {
            let mut buf = BytesMut::new();
            write_string(&mut buf, s);
            assert_eq!(&buf[..], *expected, "encode failed for {s:?}");

            let mut cursor = Cursor::new(expected.to_vec());
            assert_eq!(&read_string(&mut cursor).await.unwrap(), s);
        }
    }

    #[tokio::test]
    async fn string_truncated() {
        // Declared length 14, only 3 bytes available
        let mut cursor = Cursor::new(vec![0x0E, 0x54, 0x68, 0x69]);
        let result = read_string(&mut cursor).await;
        assert!(matches!(
            result,
            Err(crate::error::ProtocolError::Io(_))
        ));
    }

    #[tokio::test]
    async fn string_negative_length_is_empty() {
        let mut buf = BytesMut::new();
        write_varint_to_buf(&mut buf, -5);
        let mut cursor = Cursor::new(buf.to_vec());
        assert_eq!(read_string(&mut cursor).await.unwrap(), "");
    }

    #[tokio::test]
    async fn packet_framing() {
        let packet = RawPacket::new(0x00, BytesMut::from(&b"hello"[..]));

        let mut buf = Vec::new();
        write_packet(&mut buf, &packet).await.unwrap();

        // [length = id(1) + payload(5)][id][payload]
        assert_eq!(buf[0], 6);
        assert_eq!(buf[1], 0x00);
        assert_eq!(&buf[2..], b"hello");
    }

    #[tokio::test]
    async fn packet_framing_empty_payload() {
        let packet = RawPacket::empty(0x01);

        let mut buf = Vec::new();
        write_packet(&mut buf, &packet).await.unwrap();

        assert_eq!(buf, vec![0x01, 0x01]);
    }

    #[tokio::test]
    async fn packet_framing_wide_id() {
        // A two-byte packet ID must be counted in the length prefix
        let packet = RawPacket::new(300, BytesMut::from(&[0xAA][..]));

        let mut buf = Vec::new();
        write_packet(&mut buf, &packet).await.unwrap();

        let mut cursor = Cursor::new(buf);
        assert_eq!(read_varint(&mut cursor).await.unwrap(), 3);
        assert_eq!(read_varint(&mut cursor).await.unwrap(), 300);
    }
}
