use relay_core::{PeerId, RoomId};
use relay_server::RoomRegistry;

use crate::integration::init_tracing;
use crate::utils::MockPeer;

#[test]
fn test_leave_twice_is_noop() {
    init_tracing();

    let registry = RoomRegistry::new();
    let room = RoomId::from("twice");
    let a = MockPeer::new();
    let b = MockPeer::new();

    registry.join(&room, a.clone());
    registry.join(&room, b.clone());

    assert!(registry.leave(&room, &a.peer_id()));
    assert!(!registry.leave(&room, &a.peer_id()));

    assert_eq!(registry.members(&room), vec![b.peer_id()]);
}

#[test]
fn test_leave_for_unknown_peer_or_room() {
    let registry = RoomRegistry::new();
    let room = RoomId::from("known");
    let a = MockPeer::new();
    registry.join(&room, a.clone());

    assert!(!registry.leave(&room, &PeerId::new()));
    assert!(!registry.leave(&RoomId::from("unknown"), &a.peer_id()));

    assert_eq!(registry.members(&room), vec![a.peer_id()]);
}

#[test]
fn test_membership_guard_leaves_once() {
    let registry = RoomRegistry::new();
    let room = RoomId::from("guard");
    let a = MockPeer::new();

    let membership = registry.attach(room.clone(), a.clone());
    assert!(registry.contains(&room, &a.peer_id()));

    // An explicit leave already happened; the guard's own leave is a no-op.
    registry.leave(&room, &a.peer_id());
    membership.leave();
    assert!(!registry.contains(&room, &a.peer_id()));

    let membership = registry.attach(room.clone(), a.clone());
    drop(membership);
    assert!(registry.members(&room).is_empty());
}
