use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::PlayerService;

pub fn create_player_router(service: Arc<PlayerService>) -> Router {
    Router::new()
        .route("/", get(handlers::search_players))
        .route("/{player_id}/stats", get(handlers::get_player_stats))
        .route("/{player_id}/klout", get(handlers::get_player_klout))
        .route("/leaderboard/top", get(handlers::get_leaderboard))
        .route("/compare", post(handlers::compare_players))
        .with_state(service)
}
