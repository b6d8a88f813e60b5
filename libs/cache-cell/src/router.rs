use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handlers::get_cache_stats;
use crate::services::CacheService;

pub fn create_cache_router(cache: Arc<CacheService>) -> Router {
    Router::new()
        .route("/stats", get(get_cache_stats))
        .with_state(cache)
}
