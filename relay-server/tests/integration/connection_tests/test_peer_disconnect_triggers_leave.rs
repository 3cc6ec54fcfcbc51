use relay_core::RoomId;

use crate::integration::init_tracing;
use crate::utils::{TestClient, spawn_relay, wait_for_members};

#[tokio::test]
async fn test_close_frame_triggers_leave() {
    init_tracing();

    let (addr, state) = spawn_relay().await;
    let room = RoomId::from("closing");

    let a = TestClient::connect(addr, room.as_str()).await.unwrap();
    let mut b = TestClient::connect(addr, room.as_str()).await.unwrap();
    assert!(wait_for_members(&state.registry, &room, 2, 5000).await);

    a.close().await.unwrap();
    assert!(
        wait_for_members(&state.registry, &room, 1, 5000).await,
        "A should be removed after a clean close"
    );

    b.send_text("after close").await.unwrap();
    assert!(b.recv(200).await.is_none());
}

#[tokio::test]
async fn test_dropped_connection_triggers_leave() {
    init_tracing();

    let (addr, state) = spawn_relay().await;
    let room = RoomId::from("dropping");

    let a = TestClient::connect(addr, room.as_str()).await.unwrap();
    let _b = TestClient::connect(addr, room.as_str()).await.unwrap();
    assert!(wait_for_members(&state.registry, &room, 2, 5000).await);

    // No close handshake: the socket just goes away.
    drop(a);

    assert!(
        wait_for_members(&state.registry, &room, 1, 5000).await,
        "A should be removed after its connection died"
    );
}

#[tokio::test]
async fn test_last_peer_leaving_prunes_room() {
    init_tracing();

    let (addr, state) = spawn_relay().await;
    let room = RoomId::from("lonely");

    let a = TestClient::connect(addr, room.as_str()).await.unwrap();
    assert!(wait_for_members(&state.registry, &room, 1, 5000).await);
    assert_eq!(state.registry.room_count(), 1);

    a.close().await.unwrap();
    assert!(wait_for_members(&state.registry, &room, 0, 5000).await);
    assert_eq!(state.registry.room_count(), 0);
}
