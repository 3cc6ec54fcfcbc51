pub mod error;
pub mod model;

pub use error::SendError;
pub use model::*;
