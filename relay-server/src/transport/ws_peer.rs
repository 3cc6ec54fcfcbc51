use crate::room::PeerHandle;
use axum::extract::ws::{Message, Utf8Bytes};
use relay_core::{FrameKind, PeerId, SendError, SignalPayload};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Registry-side handle of one WebSocket connection.
///
/// Frames go into a bounded queue drained by the connection's writer task,
/// so a slow socket never stalls the peer that is broadcasting.
pub struct WsPeer {
    id: PeerId,
    tx: mpsc::Sender<Message>,
}

impl WsPeer {
    /// Create the handle together with the receiving end for the writer task.
    pub fn channel(id: PeerId, capacity: usize) -> (Self, mpsc::Receiver<Message>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { id, tx }, rx)
    }
}

impl PeerHandle for WsPeer {
    fn id(&self) -> PeerId {
        self.id
    }

    fn send(&self, payload: SignalPayload) -> Result<(), SendError> {
        let msg = match payload.kind() {
            FrameKind::Text => Utf8Bytes::try_from(payload.into_bytes())
                .map(Message::Text)
                .map_err(|_| SendError::InvalidText)?,
            FrameKind::Binary => Message::Binary(payload.into_bytes()),
        };

        self.tx.try_send(msg).map_err(|e| match e {
            TrySendError::Full(_) => SendError::Full,
            TrySendError::Closed(_) => SendError::Closed,
        })
    }
}
