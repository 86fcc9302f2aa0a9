//! Minecraft-style wire protocol implementation for Quarry.
//!
//! This crate provides the transport-level building blocks: `VarInt` and
//! `VarLong` codecs, length-prefixed strings, packet framing, the
//! per-connection protocol state enum, and typed packets for the
//! handshake/status exchanges.

pub mod codec;
pub mod error;
pub mod packets;
pub mod state;
pub mod varint;

pub use error::ProtocolError;
pub use state::ProtocolState;
