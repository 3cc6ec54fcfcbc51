mod ws_peer;

pub use ws_peer::*;
