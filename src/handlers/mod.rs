//! Packet handlers and the default routing table.
//!
//! A handler receives the owning session positioned immediately after the
//! packet ID, consumes exactly the bytes belonging to its packet, and may
//! mutate the session state or write response frames. Game-domain packets
//! (login flow, everything in Play) are placeholders: the IDs are routed
//! so they are recognized, but their handlers report not-implemented.

pub mod handshake;
pub mod login;
pub mod play;
pub mod status;

use tokio::io::{AsyncRead, AsyncWrite};

use quarry_proto::codec::LEGACY_PING_MARKER;
use quarry_proto::packets::handshake as handshake_ids;
use quarry_proto::packets::login as login_ids;
use quarry_proto::packets::play::serverbound;
use quarry_proto::packets::status as status_ids;
use quarry_proto::ProtocolState;

use crate::dispatch::DispatchTable;

/// Build the default dispatch table. Called once before the accept loop;
/// the table is shared read-only by every session afterwards.
pub fn default_table<S>() -> DispatchTable<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    let mut table = DispatchTable::new();

    table.register(
        ProtocolState::Handshaking,
        handshake_ids::PACKET_ID,
        handshake::handshake,
    );
    table.register(
        ProtocolState::Handshaking,
        LEGACY_PING_MARKER,
        handshake::legacy_server_list_ping,
    );

    table.register(
        ProtocolState::Status,
        status_ids::STATUS_PACKET_ID,
        status::status_request,
    );
    table.register(ProtocolState::Status, status_ids::PING_PACKET_ID, status::ping);

    table.register(
        ProtocolState::Login,
        login_ids::LOGIN_START_PACKET_ID,
        login::login_start,
    );
    table.register(
        ProtocolState::Login,
        login_ids::ENCRYPTION_RESPONSE_PACKET_ID,
        login::encryption_response,
    );
    table.register(
        ProtocolState::Login,
        login_ids::LOGIN_PLUGIN_RESPONSE_PACKET_ID,
        login::login_plugin_response,
    );

    for id in 0..=serverbound::MAX_PACKET_ID {
        table.register(ProtocolState::Play, id, play::placeholder);
    }

    table
}
