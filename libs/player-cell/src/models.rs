use serde::{Deserialize, Serialize};
use serde_json::Value;

use influence_cell::{ComparisonMetrics, InfluenceScore};
use shared_models::{PlayerProfile, PlayerWithStats};

pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;
pub const MAX_LEADERBOARD_LIMIT: usize = 100;
/// Size of the reference set a single player's klout is normalized against.
pub const KLOUT_REFERENCE_SIZE: usize = 10;
pub const MIN_COMPARE_PLAYERS: usize = 2;
pub const MAX_COMPARE_PLAYERS: usize = 5;

// Query parameters for different endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct KloutQuery {
    pub position: Option<String>,
    pub league: Option<String>,
}

/// `limit` stays a string so that garbage falls back to the default instead
/// of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<String>,
    pub league: Option<String>,
    pub position: Option<String>,
}

/// Kept loose so that a missing or mistyped `playerIds` gets the same
/// validation message as a wrong count.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[serde(default)]
    pub player_ids: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub player: PlayerProfile,
    pub influence: InfluenceScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparedPlayer {
    #[serde(flatten)]
    pub player: PlayerWithStats,
    pub influence_score: InfluenceScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerComparison {
    pub players: Vec<ComparedPlayer>,
    pub max_influence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ComparisonMetrics>,
}
