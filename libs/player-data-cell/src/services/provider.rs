use std::sync::Arc;

use tracing::{debug, error, info, instrument};

use cache_cell::CacheService;
use shared_config::{AppConfig, CacheConfig};
use shared_models::{PlayerWithStats, SearchResponse, SearchResult};

use crate::models::{ProviderError, MAX_TOP_PLAYERS};
use crate::services::mock::MockDataSource;
use crate::services::remote::RemoteDataSource;
use crate::services::source::PlayerDataSource;

/// Cache-checked access to player records.
pub struct PlayerDataService {
    source: Arc<dyn PlayerDataSource>,
    cache: Arc<CacheService>,
    ttls: CacheConfig,
}

impl PlayerDataService {
    pub fn new(source: Arc<dyn PlayerDataSource>, cache: Arc<CacheService>, ttls: CacheConfig) -> Self {
        Self { source, cache, ttls }
    }

    /// Picks the remote source when an API key is configured, the built-in dataset otherwise.
    pub fn from_config(config: &AppConfig, cache: Arc<CacheService>) -> Self {
        let source: Arc<dyn PlayerDataSource> = if config.is_remote_configured() {
            info!("Using remote player data at {}", config.football_data_api_url);
            Arc::new(RemoteDataSource::new(config))
        } else {
            info!("Using built-in player dataset");
            Arc::new(MockDataSource::new())
        };

        Self::new(source, cache, config.cache.clone())
    }

    #[instrument(skip(self))]
    pub async fn search_players(&self, name: &str) -> Result<SearchResponse, ProviderError> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return Err(ProviderError::InvalidRequest("Player name is required".to_string()));
        }

        let cache_key = format!("search:{}", query);
        if let Some(cached) = self.cache.get::<SearchResponse>(&cache_key).await {
            return Ok(cached);
        }

        let candidates = self.source.search(&query).await.map_err(|e| {
            error!("Player search failed: {}", e);
            e
        })?;

        let mut results: Vec<SearchResult> = candidates
            .into_iter()
            .map(|p| SearchResult {
                match_score: calculate_match_score(&p.profile.name, &query),
                profile: p.profile,
            })
            .collect();
        // Stable, so equal scores keep source order
        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        let response = SearchResponse {
            total_count: results.len(),
            results,
        };

        self.cache
            .set(&cache_key, &response, Some(self.ttls.search_ttl_secs))
            .await;
        debug!("Search '{}' returned {} players", query, response.total_count);

        Ok(response)
    }

    #[instrument(skip(self))]
    pub async fn get_player_stats(&self, player_id: &str) -> Result<PlayerWithStats, ProviderError> {
        let cache_key = format!("player:{}", player_id);
        if let Some(cached) = self.cache.get::<PlayerWithStats>(&cache_key).await {
            return Ok(cached);
        }

        let player = self
            .source
            .get_by_id(player_id)
            .await
            .map_err(|e| {
                error!("Failed to fetch player stats: {}", e);
                e
            })?
            .ok_or_else(|| ProviderError::PlayerNotFound(player_id.to_string()))?;

        self.cache
            .set(&cache_key, &player, Some(self.ttls.player_ttl_secs))
            .await;

        Ok(player)
    }

    /// At most `limit` players, never more than `MAX_TOP_PLAYERS`.
    #[instrument(skip(self))]
    pub async fn get_top_players(&self, limit: usize) -> Result<Vec<PlayerWithStats>, ProviderError> {
        let limit = limit.min(MAX_TOP_PLAYERS);
        let cache_key = format!("top-players:{}", limit);
        if let Some(cached) = self.cache.get::<Vec<PlayerWithStats>>(&cache_key).await {
            return Ok(cached);
        }

        let mut players = self.source.get_top(limit).await.map_err(|e| {
            error!("Failed to fetch top players: {}", e);
            e
        })?;
        players.truncate(limit);

        self.cache
            .set(&cache_key, &players, Some(self.ttls.top_players_ttl_secs))
            .await;

        Ok(players)
    }
}

/// Fuzzy match ladder, first rule wins: exact 100, prefix 90, word prefix 80,
/// substring 70, anything else 50. `query` must already be lower-cased.
pub fn calculate_match_score(player_name: &str, query: &str) -> u8 {
    let name = player_name.to_lowercase();

    if name == query {
        100
    } else if name.starts_with(query) {
        90
    } else if name.split_whitespace().any(|part| part.starts_with(query)) {
        80
    } else if name.contains(query) {
        70
    } else {
        50
    }
}
