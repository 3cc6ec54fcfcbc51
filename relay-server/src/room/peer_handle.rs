use relay_core::{PeerId, SendError, SignalPayload};

/// What the registry needs from a connected client: an identity and a way to hand it a frame.
///
/// `send` must not block; the registry calls it while fanning out on the sender's task.
pub trait PeerHandle: Send + Sync {
    fn id(&self) -> PeerId;

    fn send(&self, payload: SignalPayload) -> Result<(), SendError>;
}
