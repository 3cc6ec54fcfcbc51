//! Room registry and WebSocket fan-out for a content-agnostic signaling relay.
//!
//! Peers connect to `/ws/{room_id}`; every frame a peer sends is forwarded
//! unchanged to every other peer currently in the same room.

pub mod config;
pub mod error;
pub mod room;
pub mod server;
pub mod signaling;
pub mod transport;

pub use config::*;
pub use error::*;
pub use room::*;
pub use server::*;
pub use signaling::*;
pub use transport::*;
