use thiserror::Error;

/// Reasons a frame could not be handed to a peer's outbound channel.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SendError {
    /// The peer's writer is gone (socket closed or task finished).
    #[error("peer channel closed")]
    Closed,

    /// The peer's outbound queue is at capacity.
    #[error("peer outbound queue full")]
    Full,

    /// A text frame whose bytes are not UTF-8.
    #[error("text frame is not valid UTF-8")]
    InvalidText,
}
