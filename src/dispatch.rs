//! State-scoped packet dispatch.
//!
//! The dispatch table is an explicit two-level lookup: first by
//! [`ProtocolState`], then by packet ID. It is built once before the
//! accept loop and shared read-only (behind an `Arc`) by every session,
//! so lookups need no locking.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use quarry_proto::ProtocolState;

use crate::error::HandlerResult;
use crate::session::Session;

/// The boxed future returned by a packet handler, borrowing the session
/// for the duration of the call.
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = HandlerResult> + Send + 'a>>;

/// A packet handler. Receives the owning session with the byte source
/// positioned immediately after the packet ID, and must consume exactly
/// the bytes belonging to its packet.
pub type Handler<S> = for<'a> fn(&'a mut Session<S>) -> HandlerFuture<'a>;

/// Routing table from (protocol state, packet ID) to handler.
pub struct DispatchTable<S> {
    states: HashMap<ProtocolState, HashMap<i32, Handler<S>>>,
}

impl<S> DispatchTable<S> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Register a handler for a packet ID within a state, replacing any
    /// previous registration.
    pub fn register(&mut self, state: ProtocolState, id: i32, handler: Handler<S>) {
        self.states.entry(state).or_default().insert(id, handler);
    }

    /// Look up the handler for a packet ID in the given state.
    ///
    /// `None` is the recoverable unknown-packet condition: the session
    /// logs it and keeps reading.
    #[must_use]
    pub fn resolve(&self, state: ProtocolState, id: i32) -> Option<Handler<S>> {
        self.states.get(&state)?.get(&id).copied()
    }
}

impl<S> Default for DispatchTable<S> {
    fn default() -> Self {
        Self::new()
    }
}
