use crate::room::membership::Membership;
use crate::room::peer_handle::PeerHandle;
use relay_core::{PeerId, RoomId, SignalPayload};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

type Members = Vec<Arc<dyn PeerHandle>>;

/// Room membership shared by every connection.
///
/// All reads and writes go through one lock. The lock covers list operations
/// only; frames are sent after it is released.
#[derive(Clone, Default)]
pub struct RoomRegistry {
    rooms: Arc<Mutex<HashMap<RoomId, Members>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // The map stays consistent between statements, so a panic elsewhere
    // while holding the lock leaves nothing to repair.
    fn rooms(&self) -> MutexGuard<'_, HashMap<RoomId, Members>> {
        self.rooms.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add `peer` to `room`, creating the room if this is its first member.
    /// Returns whether the peer was added.
    ///
    /// A second join for a peer id that is already in the room is ignored.
    pub fn join(&self, room: &RoomId, peer: Arc<dyn PeerHandle>) -> bool {
        let peer_id = peer.id();

        let size = {
            let mut rooms = self.rooms();
            let members = rooms.entry(room.clone()).or_default();

            if members.iter().any(|member| member.id() == peer_id) {
                drop(rooms);
                warn!("Peer {} is already in room {}, ignoring join", peer_id, room);
                return false;
            }

            members.push(peer);
            members.len()
        };

        info!("Peer {} joined room {} ({} connected)", peer_id, room, size);
        true
    }

    /// Remove `peer_id` from `room`. Returns whether it was a member.
    ///
    /// Safe to call for a peer that never joined or already left. The room
    /// entry is dropped once its last member leaves.
    pub fn leave(&self, room: &RoomId, peer_id: &PeerId) -> bool {
        let remaining = {
            let mut rooms = self.rooms();
            let Some(members) = rooms.get_mut(room) else {
                return false;
            };
            let Some(pos) = members.iter().position(|member| member.id() == *peer_id) else {
                return false;
            };

            members.remove(pos);
            let remaining = members.len();
            if remaining == 0 {
                rooms.remove(room);
            }
            remaining
        };

        info!("Peer {} left room {} ({} remaining)", peer_id, room, remaining);
        if remaining == 0 {
            debug!("Room {} is empty, dropped", room);
        }
        true
    }

    /// Hand `payload` to every member of `room` except `sender`.
    ///
    /// Best effort: a recipient that cannot take the frame is logged and
    /// skipped, and the caller is not told.
    pub fn broadcast(&self, room: &RoomId, sender: &PeerId, payload: SignalPayload) {
        let recipients: Members = self
            .rooms()
            .get(room)
            .map(|members| {
                members
                    .iter()
                    .filter(|member| member.id() != *sender)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if recipients.is_empty() {
            debug!("No recipients for frame from {} in room {}", sender, room);
            return;
        }

        let mut delivered = 0;
        for recipient in &recipients {
            match recipient.send(payload.clone()) {
                Ok(()) => delivered += 1,
                Err(e) => warn!(
                    "Dropped frame from {} to {} in room {}: {}",
                    sender,
                    recipient.id(),
                    room,
                    e
                ),
            }
        }

        debug!(
            "Relayed {} bytes from {} in room {} to {}/{} peers",
            payload.len(),
            sender,
            room,
            delivered,
            recipients.len()
        );
    }

    /// Join and return a guard that leaves again when dropped.
    ///
    /// If the join was ignored as a duplicate, the guard is inert: dropping it
    /// leaves the existing seat alone.
    pub fn attach(&self, room: RoomId, peer: Arc<dyn PeerHandle>) -> Membership {
        let peer_id = peer.id();
        let joined = self.join(&room, peer);
        Membership::new(self.clone(), room, peer_id, joined)
    }

    pub fn members(&self, room: &RoomId) -> Vec<PeerId> {
        self.rooms()
            .get(room)
            .map(|members| members.iter().map(|member| member.id()).collect())
            .unwrap_or_default()
    }

    pub fn contains(&self, room: &RoomId, peer_id: &PeerId) -> bool {
        self.rooms()
            .get(room)
            .is_some_and(|members| members.iter().any(|member| member.id() == *peer_id))
    }

    pub fn room_count(&self) -> usize {
        self.rooms().len()
    }

    pub fn peer_count(&self) -> usize {
        self.rooms().values().map(Vec::len).sum()
    }
}
