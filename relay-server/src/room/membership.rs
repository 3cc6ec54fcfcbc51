use crate::room::room_registry::RoomRegistry;
use relay_core::{PeerId, RoomId, SignalPayload};

/// A peer's seat in a room. Leaves exactly once: on `leave` or on drop,
/// whichever comes first, so every exit path of a connection cleans up.
pub struct Membership {
    registry: RoomRegistry,
    room: RoomId,
    peer_id: PeerId,
    active: bool,
}

impl Membership {
    pub(crate) fn new(registry: RoomRegistry, room: RoomId, peer_id: PeerId, active: bool) -> Self {
        Self {
            registry,
            room,
            peer_id,
            active,
        }
    }

    pub fn room(&self) -> &RoomId {
        &self.room
    }

    pub fn peer_id(&self) -> PeerId {
        self.peer_id
    }

    /// False for a guard whose join was ignored, or after it has left.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Relay a frame from this peer to the rest of its room.
    pub fn broadcast(&self, payload: SignalPayload) {
        self.registry.broadcast(&self.room, &self.peer_id, payload);
    }

    pub fn leave(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if std::mem::take(&mut self.active) {
            self.registry.leave(&self.room, &self.peer_id);
        }
    }
}

impl Drop for Membership {
    fn drop(&mut self) {
        self.release();
    }
}
