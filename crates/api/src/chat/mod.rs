//! Real-time chat over WebSocket.
//!
//! - [`hub`] -- room-scoped connection registry and fan-out.
//! - [`handler`] -- the WebSocket upgrade handler and frame protocol.

pub mod handler;
pub mod hub;

pub use hub::ChatHub;
