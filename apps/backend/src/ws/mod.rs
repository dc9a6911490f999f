//! WebSocket layer: event protocol, connected-viewer registry, and the
//! per-connection actor.

pub mod hub;
pub mod protocol;
pub mod session;
