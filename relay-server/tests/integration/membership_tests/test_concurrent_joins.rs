use relay_core::RoomId;
use relay_server::RoomRegistry;
use std::collections::HashSet;

use crate::integration::init_tracing;
use crate::utils::{MockPeer, member_set};

const PEERS: usize = 64;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_joins() {
    init_tracing();

    let registry = RoomRegistry::new();
    let room = RoomId::from("stress");
    let peers: Vec<_> = (0..PEERS).map(|_| MockPeer::new()).collect();

    let handles: Vec<_> = peers
        .iter()
        .map(|peer| {
            let registry = registry.clone();
            let room = room.clone();
            let peer = peer.clone();
            tokio::spawn(async move { registry.join(&room, peer) })
        })
        .collect();

    for handle in handles {
        handle.await.expect("join task panicked");
    }

    let members = registry.members(&room);
    let unique: HashSet<_> = members.iter().copied().collect();
    assert_eq!(members.len(), PEERS, "no omissions");
    assert_eq!(unique.len(), PEERS, "no duplicates");

    let expected: HashSet<_> = peers.iter().map(|peer| peer.peer_id()).collect();
    assert_eq!(member_set(&registry, &room), expected);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_join_and_leave() {
    init_tracing();

    let registry = RoomRegistry::new();
    let room = RoomId::from("churn");
    let stayers: Vec<_> = (0..PEERS).map(|_| MockPeer::new()).collect();
    let leavers: Vec<_> = (0..PEERS).map(|_| MockPeer::new()).collect();

    let handles: Vec<_> = stayers
        .iter()
        .map(|peer| (peer.clone(), false))
        .chain(leavers.iter().map(|peer| (peer.clone(), true)))
        .map(|(peer, leaves)| {
            let registry = registry.clone();
            let room = room.clone();
            tokio::spawn(async move {
                let peer_id = peer.peer_id();
                registry.join(&room, peer);
                tokio::task::yield_now().await;
                if leaves {
                    registry.leave(&room, &peer_id);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.expect("task panicked");
    }

    let expected: HashSet<_> = stayers.iter().map(|peer| peer.peer_id()).collect();
    assert_eq!(member_set(&registry, &room), expected);
    assert_eq!(registry.peer_count(), PEERS);
}
