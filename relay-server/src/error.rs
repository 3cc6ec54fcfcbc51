use std::io;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors that stop the relay server itself. Per-peer failures never surface here.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}
