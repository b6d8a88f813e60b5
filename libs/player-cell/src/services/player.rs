use std::collections::HashMap;
use std::sync::Arc;

use futures::future::try_join_all;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use cache_cell::CacheService;
use influence_cell::{InfluenceScore, InfluenceScoringService, InfluenceWeights};
use player_data_cell::PlayerDataService;
use shared_config::AppConfig;
use shared_models::{AppError, PlayerProfile, PlayerWithStats, SearchResponse};

use crate::models::{
    ComparedPlayer, LeaderboardEntry, PlayerComparison, DEFAULT_LEADERBOARD_LIMIT,
    KLOUT_REFERENCE_SIZE, MAX_COMPARE_PLAYERS, MAX_LEADERBOARD_LIMIT, MIN_COMPARE_PLAYERS,
};

const INVALID_PLAYER_ID: &str = "Player ID is required and must be a number";
const INVALID_COMPARE_IDS: &str = "Please provide 2-5 player IDs for comparison";

/// Endpoint logic shared by the player handlers: input validation, provider
/// access and influence scoring.
pub struct PlayerService {
    data: PlayerDataService,
    scoring: InfluenceScoringService,
}

impl PlayerService {
    pub fn new(data: PlayerDataService, scoring: InfluenceScoringService) -> Self {
        Self { data, scoring }
    }

    pub fn from_config(config: &AppConfig, cache: Arc<CacheService>) -> Self {
        Self::new(
            PlayerDataService::from_config(config, cache),
            InfluenceScoringService::new(),
        )
    }

    #[instrument(skip(self))]
    pub async fn search(&self, name: Option<&str>) -> Result<SearchResponse, AppError> {
        let name = name.map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(AppError::InvalidRequest("Player name is required".to_string()));
        }

        Ok(self.data.search_players(name).await?)
    }

    #[instrument(skip(self))]
    pub async fn player_stats(&self, player_id: &str) -> Result<PlayerWithStats, AppError> {
        validate_player_id(player_id)?;
        Ok(self.data.get_player_stats(player_id).await?)
    }

    /// Influence of one player, normalized against the strongest of the
    /// reference top players under the same weights.
    #[instrument(skip(self))]
    pub async fn klout(
        &self,
        player_id: &str,
        position: Option<&str>,
        league: Option<&str>,
    ) -> Result<InfluenceScore, AppError> {
        validate_player_id(player_id)?;

        let player = self.data.get_player_stats(player_id).await?;
        let weights = self.scoring.weights_for_filters(position, league);

        let reference = self.data.get_top_players(KLOUT_REFERENCE_SIZE).await?;
        let max_influence = self.max_raw_influence(&reference, Some(&weights));
        if max_influence.is_none() {
            warn!("No reference players available, using log-scale normalization");
        }

        Ok(self.scoring.compute_influence(
            &player.profile.id,
            &player.profile.name,
            &player.stats,
            Some(&weights),
            max_influence,
        ))
    }

    #[instrument(skip(self))]
    pub async fn leaderboard(
        &self,
        limit: Option<&str>,
        position: Option<&str>,
        league: Option<&str>,
    ) -> Result<Vec<LeaderboardEntry>, AppError> {
        let limit = parse_leaderboard_limit(limit);
        let weights = self.scoring.weights_for_filters(position, league);

        let players = self.data.get_top_players(limit).await?;
        let max_influence = self.max_raw_influence(&players, Some(&weights));

        let scores: Vec<InfluenceScore> = players
            .iter()
            .map(|p| {
                self.scoring.compute_influence(
                    &p.profile.id,
                    &p.profile.name,
                    &p.stats,
                    Some(&weights),
                    max_influence,
                )
            })
            .collect();

        let profiles: HashMap<&str, &PlayerProfile> = players
            .iter()
            .map(|p| (p.profile.id.as_str(), &p.profile))
            .collect();

        let entries: Vec<LeaderboardEntry> = self
            .scoring
            .rank_players(scores)
            .into_iter()
            .filter_map(|influence| {
                let player = (*profiles.get(influence.player_id.as_str())?).clone();
                Some(LeaderboardEntry {
                    rank: influence.rank?,
                    player,
                    influence,
                })
            })
            .collect();

        debug!("Leaderboard built with {} entries", entries.len());
        Ok(entries)
    }

    /// Side-by-side scores with default weights, normalized against the
    /// strongest of the compared players.
    #[instrument(skip(self, player_ids))]
    pub async fn compare(&self, player_ids: Option<&Value>) -> Result<PlayerComparison, AppError> {
        let ids = validate_compare_ids(player_ids)?;
        info!("Comparing players {:?}", ids);

        let players = try_join_all(ids.iter().map(|id| self.data.get_player_stats(id))).await?;

        let max_influence = self.max_raw_influence(&players, None).unwrap_or(0.0);

        let scores: Vec<InfluenceScore> = players
            .iter()
            .map(|p| {
                self.scoring.compute_influence(
                    &p.profile.id,
                    &p.profile.name,
                    &p.stats,
                    None,
                    Some(max_influence),
                )
            })
            .collect();

        let metrics = self.scoring.comparison_metrics(&scores);

        Ok(PlayerComparison {
            players: players
                .into_iter()
                .zip(scores)
                .map(|(player, influence_score)| ComparedPlayer {
                    player,
                    influence_score,
                })
                .collect(),
            max_influence,
            metrics,
        })
    }

    fn max_raw_influence(
        &self,
        players: &[PlayerWithStats],
        weights: Option<&InfluenceWeights>,
    ) -> Option<f64> {
        players
            .iter()
            .map(|p| self.scoring.compute_raw_influence(&p.stats, weights))
            .reduce(f64::max)
    }
}

pub fn validate_player_id(player_id: &str) -> Result<(), AppError> {
    if player_id.is_empty() || !player_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidRequest(INVALID_PLAYER_ID.to_string()));
    }
    Ok(())
}

/// Absent, unparsable or zero limits fall back to the default; the result is
/// always within 1..=100.
pub fn parse_leaderboard_limit(limit: Option<&str>) -> usize {
    limit
        .and_then(|l| l.trim().parse::<usize>().ok())
        .filter(|l| *l > 0)
        .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
        .min(MAX_LEADERBOARD_LIMIT)
}

fn validate_compare_ids(player_ids: Option<&Value>) -> Result<Vec<String>, AppError> {
    let invalid = || AppError::InvalidRequest(INVALID_COMPARE_IDS.to_string());

    let ids = player_ids.and_then(Value::as_array).ok_or_else(invalid)?;
    if !(MIN_COMPARE_PLAYERS..=MAX_COMPARE_PLAYERS).contains(&ids.len()) {
        return Err(invalid());
    }

    ids.iter()
        .map(|id| match id.as_str() {
            Some(id) if !id.trim().is_empty() => Ok(id.trim().to_string()),
            _ => Err(invalid()),
        })
        .collect()
}
