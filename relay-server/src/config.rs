use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_OUTBOUND_CAPACITY: usize = 256;

/// Runtime settings for the relay.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub listen_addr: SocketAddr,
    /// Frames that may queue up for one slow recipient before further frames to it are dropped.
    pub outbound_capacity: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            outbound_capacity: DEFAULT_OUTBOUND_CAPACITY,
        }
    }
}
