use crate::server::AppState;
use crate::transport::WsPeer;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Path, State, WebSocketUpgrade};
use axum::response::IntoResponse;
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use relay_core::{PeerId, RoomId, SignalPayload};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Path(room_id): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let room_id = RoomId::from(room_id);

    ws.on_upgrade(move |socket| handle_socket(socket, room_id, state))
}

async fn handle_socket(socket: WebSocket, room_id: RoomId, state: AppState) {
    let peer_id = PeerId::new();
    info!("New WebSocket connection {} for room {}", peer_id, room_id);

    let (mut sender, mut receiver) = socket.split();
    let (peer, mut rx) = WsPeer::channel(peer_id, state.config.outbound_capacity);

    let membership = state.registry.attach(room_id.clone(), Arc::new(peer));

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if let Err(e) = sender.send(msg).await {
                debug!("Write to {} failed: {}", peer_id, e);
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let registry = state.registry.clone();
        let room_id = room_id.clone();

        async move {
            while let Some(frame) = receiver.next().await {
                let payload = match frame {
                    Ok(Message::Text(text)) => match SignalPayload::text_from_utf8(Bytes::from(text)) {
                        Ok(payload) => payload,
                        Err(e) => {
                            warn!("Dropped malformed text frame from {}: {}", peer_id, e);
                            continue;
                        }
                    },
                    Ok(Message::Binary(data)) => SignalPayload::binary(data),
                    Ok(Message::Close(_)) => break,
                    Ok(Message::Ping(_) | Message::Pong(_)) => continue,
                    Err(e) => {
                        warn!("Read from {} failed: {}", peer_id, e);
                        break;
                    }
                };

                registry.broadcast(&room_id, &peer_id, payload);
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    info!(
        "WebSocket disconnected: {} from room {}",
        membership.peer_id(),
        membership.room()
    );
    membership.leave();
}
