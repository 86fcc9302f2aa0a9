//! Quarry: a Minecraft-style protocol server.
//!
//! Implements the transport and framing layer: VarInt codecs,
//! length-prefixed packet framing, a per-connection protocol state
//! machine, and state-scoped dispatch of inbound packets to handlers.

mod dispatch;
mod error;
mod handlers;
mod server;
mod session;

use tokio::net::TcpListener;
use tracing::info;

use crate::server::Server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let listen_addr = std::env::var("ADDR").unwrap_or_else(|_| "0.0.0.0:25565".to_string());
    let listener = TcpListener::bind(&listen_addr).await?;

    info!("Listening on {listen_addr}");

    let server = Server::new();
    server.run(listener).await;

    Ok(())
}
