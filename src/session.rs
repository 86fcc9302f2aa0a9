//! Per-connection session and read loop.

use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, BufReader, ReadHalf, WriteHalf};
use tracing::{debug, trace, warn};

use quarry_proto::codec::LEGACY_PING_MARKER;
use quarry_proto::varint::read_varint;
use quarry_proto::{ProtocolError, ProtocolState};

use crate::dispatch::DispatchTable;
use crate::error::HandlerError;
use crate::server::StatusInfo;

/// One connection's state and socket halves.
///
/// A session is created on accept, driven only by its own read loop, and
/// destroyed when the socket closes or the length/ID prefix can no longer
/// be decoded. It is never shared across connections.
pub struct Session<S> {
    /// Session identifier, for logging.
    pub id: usize,
    /// Current protocol state, selecting the active packet-ID namespace.
    pub state: ProtocolState,
    /// Status document advertised to pinging clients.
    pub status: Arc<StatusInfo>,
    pub(crate) reader: BufReader<ReadHalf<S>>,
    pub(crate) writer: WriteHalf<S>,
}

impl<S: AsyncRead + AsyncWrite> Session<S> {
    /// Create a session over the given stream, starting in the
    /// handshaking state.
    pub fn new(id: usize, stream: S, status: Arc<StatusInfo>) -> Self {
        let (reader, writer) = tokio::io::split(stream);
        Self {
            id,
            state: ProtocolState::Handshaking,
            status,
            reader: BufReader::new(reader),
            writer,
        }
    }
}

impl<S: AsyncRead + AsyncWrite + Unpin + Send> Session<S> {
    /// Drive the read loop until the connection closes or the stream can
    /// no longer be framed.
    ///
    /// Each iteration blocks on the length `VarInt` (or the legacy ping
    /// marker during handshaking), reads the packet ID, resolves the
    /// handler for the current state and invokes it. Handler failures are
    /// logged and the loop continues; failures decoding the length/ID
    /// prefix itself terminate the session, since the stream is no longer
    /// framable.
    pub async fn run(&mut self, table: &DispatchTable<S>) {
        loop {
            let length = match read_varint(&mut self.reader).await {
                Ok(v) => v,
                Err(e) => {
                    log_disconnect(self.id, &e);
                    break;
                }
            };

            // A legacy server list ping has no length prefix; its first
            // two bytes decode as the VarInt 0xFE.
            if self.state == ProtocolState::Handshaking && length == LEGACY_PING_MARKER {
                self.invoke(table, LEGACY_PING_MARKER).await;
                continue;
            }

            let id = match read_varint(&mut self.reader).await {
                Ok(v) => v,
                Err(e) => {
                    warn!(sid = self.id, "failed to decode packet ID: {e}");
                    break;
                }
            };

            trace!(length, "packet ID {id:#04x}");

            self.invoke(table, id).await;
        }
    }

    /// Resolve and run the handler for a packet ID in the current state.
    ///
    /// Unknown packets and handler failures are reported, never fatal.
    async fn invoke(&mut self, table: &DispatchTable<S>, id: i32) {
        let state = self.state;
        let Some(handler) = table.resolve(state, id) else {
            warn!(state = ?state, "unknown packet ID {id:#04x}");
            return;
        };

        match handler(self).await {
            Ok(()) => {}
            Err(HandlerError::NotImplemented) => {
                debug!(state = ?state, "packet {id:#04x} handler not implemented");
            }
            Err(e) => {
                warn!(state = ?state, "packet {id:#04x} handler error: {e}");
            }
        }
    }
}

/// Log the error that ended a session. A clean end-of-stream is an
/// ordinary disconnect, everything else is surfaced.
fn log_disconnect(sid: usize, err: &ProtocolError) {
    match err {
        ProtocolError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            debug!(sid, "client disconnected");
        }
        other => warn!(sid, "failed to decode packet length: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::{BufMut, BytesMut};
    use serde_json::Value;
    use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream, ReadHalf as IoReadHalf};

    use quarry_proto::codec::{read_string, write_packet, RawPacket};
    use quarry_proto::packets::Handshake;

    use crate::handlers;

    /// Spawn a session over one end of an in-memory duplex stream and
    /// return the client halves.
    ///
    /// Each direction is its own duplex pipe so that dropping the client
    /// writer drops its pipe entirely and the session reads EOF; a
    /// `tokio::io::split` write half alone would not shut the stream down.
    fn start_session() -> (
        IoReadHalf<DuplexStream>,
        WriteHalf<DuplexStream>,
        tokio::task::JoinHandle<()>,
    ) {
        let (c2s_client, c2s_server) = tokio::io::duplex(4096);
        let (s2c_client, s2c_server) = tokio::io::duplex(4096);
        let server = tokio::io::join(c2s_server, s2c_server);
        let table = handlers::default_table();
        let mut session = Session::new(0, server, Arc::new(StatusInfo::default()));

        let handle = tokio::spawn(async move {
            session.run(&table).await;
        });

        let (client_reader, _) = tokio::io::split(s2c_client);
        let (_, client_writer) = tokio::io::split(c2s_client);
        (client_reader, client_writer, handle)
    }

    async fn send_handshake(
        writer: &mut WriteHalf<DuplexStream>,
        next_state: ProtocolState,
    ) {
        let handshake = Handshake {
            protocol_version: 404,
            server_address: "x".to_string(),
            server_port: 25565,
            next_state,
        };
        write_packet(writer, &handshake.to_raw()).await.unwrap();
    }

    async fn read_frame_header(reader: &mut IoReadHalf<DuplexStream>) -> (i32, i32) {
        let length = read_varint(reader).await.unwrap();
        let id = read_varint(reader).await.unwrap();
        (length, id)
    }

    #[tokio::test]
    async fn handshake_to_status_sends_response() {
        let (mut reader, mut writer, _handle) = start_session();

        send_handshake(&mut writer, ProtocolState::Status).await;

        let (_, id) = read_frame_header(&mut reader).await;
        assert_eq!(id, 0x00);

        let json = read_string(&mut reader).await.unwrap();
        let doc: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(doc["version"]["protocol"], 404);
        assert!(doc["players"]["max"].is_number());
        assert!(doc["description"]["text"].is_string());
    }

    #[tokio::test]
    async fn ping_is_echoed_as_pong() {
        let (mut reader, mut writer, _handle) = start_session();

        send_handshake(&mut writer, ProtocolState::Status).await;

        // Skip the status response
        let (_, id) = read_frame_header(&mut reader).await;
        assert_eq!(id, 0x00);
        read_string(&mut reader).await.unwrap();

        // Status request is a no-op
        write_packet(&mut writer, &RawPacket::empty(0x00))
            .await
            .unwrap();

        let mut payload = BytesMut::new();
        payload.put_i64(0x1122_3344_5566_7788);
        write_packet(&mut writer, &RawPacket::new(0x01, payload))
            .await
            .unwrap();

        let (length, id) = read_frame_header(&mut reader).await;
        assert_eq!(length, 9);
        assert_eq!(id, 0x01);

        let mut echoed = [0u8; 8];
        reader.read_exact(&mut echoed).await.unwrap();
        assert_eq!(echoed, [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]);
    }

    #[tokio::test]
    async fn unknown_packet_does_not_end_session() {
        let (mut reader, mut writer, _handle) = start_session();

        send_handshake(&mut writer, ProtocolState::Status).await;

        // Skip the status response
        read_frame_header(&mut reader).await;
        read_string(&mut reader).await.unwrap();

        // No such packet ID in the status state; the payload is empty so
        // the stream stays aligned
        write_packet(&mut writer, &RawPacket::empty(0x05))
            .await
            .unwrap();

        // A ping afterwards still gets its pong
        let mut payload = BytesMut::new();
        payload.put_i64(7);
        write_packet(&mut writer, &RawPacket::new(0x01, payload))
            .await
            .unwrap();

        let (_, id) = read_frame_header(&mut reader).await;
        assert_eq!(id, 0x01);

        let mut echoed = [0u8; 8];
        reader.read_exact(&mut echoed).await.unwrap();
        assert_eq!(i64::from_be_bytes(echoed), 7);
    }

    #[tokio::test]
    async fn handshake_to_login_switches_state() {
        let (mut reader, mut writer, handle) = start_session();

        send_handshake(&mut writer, ProtocolState::Login).await;

        // Login start decodes its name and hits the placeholder; the
        // session must survive it
        let mut payload = BytesMut::new();
        quarry_proto::codec::write_string(&mut payload, "Notch");
        write_packet(&mut writer, &RawPacket::new(0x00, payload))
            .await
            .unwrap();

        // Closing the client ends the session cleanly
        drop(writer);
        handle.await.unwrap();

        // No status response was sent for a login handshake
        let mut rest = Vec::new();
        reader.read_to_end(&mut rest).await.unwrap();
        assert!(rest.is_empty());
    }

    #[tokio::test]
    async fn legacy_ping_marker_is_intercepted() {
        let (mut reader, mut writer, _handle) = start_session();

        // A legacy server list ping starts with the raw bytes FE 01,
        // which the loop decodes as the VarInt 0xFE and routes to the
        // legacy placeholder instead of length/ID framing
        writer.write_all(&[0xFE, 0x01]).await.unwrap();

        // The session must survive the placeholder and still frame a
        // normal handshake afterwards
        send_handshake(&mut writer, ProtocolState::Status).await;

        let (_, id) = read_frame_header(&mut reader).await;
        assert_eq!(id, 0x00);

        let json = read_string(&mut reader).await.unwrap();
        let doc: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(doc["version"]["protocol"], 404);
    }

    #[tokio::test]
    async fn session_ends_on_eof() {
        let (_reader, writer, handle) = start_session();

        drop(writer);
        handle.await.unwrap();
    }
}
