pub mod error;
pub mod player;

pub use error::{AppError, ErrorBody};
pub use player::*;
