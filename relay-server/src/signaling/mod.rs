mod room_routes;
mod ws_handler;

pub use room_routes::*;
pub use ws_handler::*;
