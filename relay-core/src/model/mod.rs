mod payload;
mod peer;
mod room;

pub use payload::{FrameKind, SignalPayload};
pub use peer::PeerId;
pub use room::{ROOM_ID_LENGTH, RoomId};
