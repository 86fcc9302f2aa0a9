//! TCP acceptor: one session task per accepted connection.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info_span, Instrument};

use crate::dispatch::DispatchTable;
use crate::handlers;
use crate::session::Session;

/// Default protocol version advertised in the status document.
const PROTOCOL_VERSION: i32 = 404;

/// Default protocol version name (1.13.2).
const VERSION_NAME: &str = "1.13.2";

/// The server status document advertised to pinging clients.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    /// Human-readable version name.
    pub version_name: String,
    /// Protocol version number.
    pub protocol: i32,
    /// Maximum players to show.
    pub max_players: u32,
    /// Message of the day.
    pub motd: String,
}

impl Default for StatusInfo {
    fn default() -> Self {
        Self {
            version_name: VERSION_NAME.to_string(),
            protocol: PROTOCOL_VERSION,
            max_players: 100_000_000,
            motd: "A Quarry Server".to_string(),
        }
    }
}

impl StatusInfo {
    /// Build the status JSON document.
    #[must_use]
    pub fn document(&self) -> Value {
        json!({
            "version": {
                "name": self.version_name,
                "protocol": self.protocol
            },
            "players": {
                "max": self.max_players,
                "online": 0,
                "sample": []
            },
            "description": {
                "text": self.motd
            }
        })
    }
}

/// The server: a dispatch table built once, a status document, and an
/// unbounded accept loop spawning one task per connection.
pub struct Server {
    table: Arc<DispatchTable<TcpStream>>,
    status: Arc<StatusInfo>,
    session_counter: AtomicUsize,
}

impl Server {
    /// Create a server with the default handlers and status document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: Arc::new(handlers::default_table()),
            status: Arc::new(StatusInfo::default()),
            session_counter: AtomicUsize::new(0),
        }
    }

    /// Set the MOTD shown in the status document.
    #[must_use]
    pub fn with_motd(mut self, motd: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.status).motd = motd.into();
        self
    }

    /// Set the maximum players shown in the status document.
    #[must_use]
    pub fn with_max_players(mut self, max_players: u32) -> Self {
        Arc::make_mut(&mut self.status).max_players = max_players;
        self
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Sessions run concurrently with no coordination beyond the shared
    /// read-only dispatch table. Closing the socket is the only way a
    /// session ends; no timeouts are configured.
    pub async fn run(&self, listener: TcpListener) {
        loop {
            match listener.accept().await {
                Ok((stream, client_addr)) => {
                    let sid = self.session_counter.fetch_add(1, Ordering::SeqCst);
                    let table = Arc::clone(&self.table);
                    let status = Arc::clone(&self.status);

                    tokio::spawn(
                        async move {
                            let mut session = Session::new(sid, stream, status);
                            session.run(&table).await;
                        }
                        .instrument(info_span!(
                            "conn",
                            sid,
                            ip = %client_addr.ip(),
                            port = client_addr.port()
                        )),
                    );
                }
                Err(e) => {
                    error!("Failed to accept connection: {e}");
                }
            }
        }
    }
}

impl Default for Server {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_document_fields() {
        let status = StatusInfo::default();
        let doc = status.document();

        assert_eq!(doc["version"]["protocol"], 404);
        assert_eq!(doc["version"]["name"], "1.13.2");
        assert_eq!(doc["players"]["online"], 0);
        assert!(doc["players"]["sample"].as_array().unwrap().is_empty());
    }

    #[test]
    fn builder_overrides() {
        let server = Server::new().with_motd("hello").with_max_players(20);
        let doc = server.status.document();

        assert_eq!(doc["description"]["text"], "hello");
        assert_eq!(doc["players"]["max"], 20);
    }
}
