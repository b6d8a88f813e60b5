use std::sync::Arc;

use axum::{routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::Level;

use cache_cell::{create_cache_router, CacheService};
use player_cell::{create_player_router, PlayerService};
use shared_config::AppConfig;
use shared_utils::{handle_panic, not_found};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Routes only, without middleware.
pub fn create_router(config: &AppConfig, cache: Arc<CacheService>) -> Router {
    let players = Arc::new(PlayerService::from_config(config, cache.clone()));

    Router::new()
        .route("/api/health", get(health_check))
        .nest("/api/players", create_player_router(players))
        .nest("/api/cache", create_cache_router(cache))
        .fallback(not_found)
}

/// Request tracing, permissive CORS and panic recovery.
pub fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
}

pub fn create_app(config: &AppConfig, cache: Arc<CacheService>) -> Router {
    with_middleware(create_router(config, cache))
}
