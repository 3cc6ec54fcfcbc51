mod membership;
mod peer_handle;
mod room_registry;

pub use membership::*;
pub use peer_handle::*;
pub use room_registry::*;
