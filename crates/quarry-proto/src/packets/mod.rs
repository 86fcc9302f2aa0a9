//! Typed protocol packets.
//!
//! Packets are organized by the connection state they belong to:
//! - Handshaking: initial connection
//! - Status: server list ping
//! - Login: authentication (placeholder handlers only)
//! - Play: in-game (packet IDs reserved, handlers unimplemented)

pub mod handshake;
pub mod login;
pub mod play;
pub mod status;

pub use handshake::Handshake;
pub use login::LoginStart;
pub use status::{Ping, Pong, StatusResponse};
