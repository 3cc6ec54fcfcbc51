use axum::Json;
use relay_core::RoomId;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRoomResponse {
    #[serde(rename = "roomID")]
    pub room_id: RoomId,
}

/// Issue a fresh room token. The room itself comes into being on first join.
pub async fn create_room() -> Json<CreateRoomResponse> {
    let room_id = RoomId::generate();
    info!("Issued room id {}", room_id);

    Json(CreateRoomResponse { room_id })
}

pub async fn health() -> &'static str {
    "OK"
}
