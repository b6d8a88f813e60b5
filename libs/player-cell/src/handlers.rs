use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use influence_cell::InfluenceScore;
use shared_models::{AppError, PlayerWithStats, SearchResponse};
use shared_utils::{ApiJson, ApiQuery};

use crate::models::{
    CompareRequest, KloutQuery, LeaderboardEntry, LeaderboardQuery, PlayerComparison, SearchQuery,
};
use crate::services::PlayerService;

pub async fn search_players(
    State(service): State<Arc<PlayerService>>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let response = service.search(query.name.as_deref()).await?;
    Ok(Json(response))
}

pub async fn get_player_stats(
    State(service): State<Arc<PlayerService>>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerWithStats>, AppError> {
    let player = service.player_stats(&player_id).await?;
    Ok(Json(player))
}

pub async fn get_player_klout(
    State(service): State<Arc<PlayerService>>,
    Path(player_id): Path<String>,
    ApiQuery(query): ApiQuery<KloutQuery>,
) -> Result<Json<InfluenceScore>, AppError> {
    let score = service
        .klout(&player_id, query.position.as_deref(), query.league.as_deref())
        .await?;
    Ok(Json(score))
}

pub async fn get_leaderboard(
    State(service): State<Arc<PlayerService>>,
    ApiQuery(query): ApiQuery<LeaderboardQuery>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let entries = service
        .leaderboard(
            query.limit.as_deref(),
            query.position.as_deref(),
            query.league.as_deref(),
        )
        .await?;
    Ok(Json(entries))
}

pub async fn compare_players(
    State(service): State<Arc<PlayerService>>,
    ApiJson(request): ApiJson<CompareRequest>,
) -> Result<Json<PlayerComparison>, AppError> {
    let comparison = service.compare(request.player_ids.as_ref()).await?;
    Ok(Json(comparison))
}
