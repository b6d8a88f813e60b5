use axum::{extract::State, Json};
use std::sync::Arc;

use crate::models::CacheStats;
use crate::services::CacheService;

pub async fn get_cache_stats(
    State(cache): State<Arc<CacheService>>,
) -> Json<CacheStats> {
    Json(cache.stats().await)
}
