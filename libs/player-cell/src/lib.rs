// =====================================================================================
// PLAYER CELL - SEARCH, STATS, KLOUT, LEADERBOARD AND COMPARE ENDPOINTS
// =====================================================================================

pub mod models;
pub mod handlers;
pub mod router;
pub mod services;

pub use models::*;
pub use router::create_player_router;
pub use services::PlayerService;
