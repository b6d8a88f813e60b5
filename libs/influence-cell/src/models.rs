use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-statistic multipliers used by the influence formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluenceWeights {
    pub goals: f64,
    pub assists: f64,
    pub appearances: f64,
    pub social_mentions: f64,
}

pub const DEFAULT_WEIGHTS: InfluenceWeights = InfluenceWeights {
    goals: 3.0,
    assists: 2.0,
    appearances: 1.0,
    social_mentions: 0.5,
};

impl InfluenceWeights {
    pub const fn new(goals: f64, assists: f64, appearances: f64, social_mentions: f64) -> Self {
        Self {
            goals,
            assists,
            appearances,
            social_mentions,
        }
    }

    /// Field-wise arithmetic mean of two weight sets.
    pub fn average(&self, other: &InfluenceWeights) -> InfluenceWeights {
        InfluenceWeights {
            goals: (self.goals + other.goals) / 2.0,
            assists: (self.assists + other.assists) / 2.0,
            appearances: (self.appearances + other.appearances) / 2.0,
            social_mentions: (self.social_mentions + other.social_mentions) / 2.0,
        }
    }
}

impl Default for InfluenceWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl Position {
    pub fn weights(&self) -> InfluenceWeights {
        match self {
            Position::Forward => InfluenceWeights::new(4.0, 2.5, 1.0, 0.6),
            Position::Midfielder => InfluenceWeights::new(2.5, 3.0, 1.2, 0.5),
            Position::Defender => InfluenceWeights::new(1.5, 1.5, 2.0, 0.3),
            Position::Goalkeeper => InfluenceWeights::new(0.0, 0.0, 3.0, 0.2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Forward => "Forward",
            Position::Midfielder => "Midfielder",
            Position::Defender => "Defender",
            Position::Goalkeeper => "Goalkeeper",
        }
    }
}

impl FromStr for Position {
    type Err = InfluenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Forward" => Ok(Position::Forward),
            "Midfielder" => Ok(Position::Midfielder),
            "Defender" => Ok(Position::Defender),
            "Goalkeeper" => Ok(Position::Goalkeeper),
            other => Err(InfluenceError::UnknownPosition(other.to_string())),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum League {
    #[serde(rename = "Premier_League")]
    PremierLeague,
    #[serde(rename = "La_Liga")]
    LaLiga,
    #[serde(rename = "Serie_A")]
    SerieA,
    Bundesliga,
    #[serde(rename = "Ligue_1")]
    Ligue1,
}

impl League {
    pub fn weights(&self) -> InfluenceWeights {
        match self {
            League::PremierLeague => InfluenceWeights::new(3.5, 2.2, 1.0, 0.4),
            League::LaLiga => InfluenceWeights::new(3.0, 2.0, 1.0, 0.6),
            League::SerieA => InfluenceWeights::new(2.8, 1.8, 1.2, 0.3),
            League::Bundesliga => InfluenceWeights::new(3.2, 2.0, 0.9, 0.5),
            League::Ligue1 => InfluenceWeights::new(3.0, 2.1, 1.0, 0.7),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            League::PremierLeague => "Premier_League",
            League::LaLiga => "La_Liga",
            League::SerieA => "Serie_A",
            League::Bundesliga => "Bundesliga",
            League::Ligue1 => "Ligue_1",
        }
    }
}

impl FromStr for League {
    type Err = InfluenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Premier_League" => Ok(League::PremierLeague),
            "La_Liga" => Ok(League::LaLiga),
            "Serie_A" => Ok(League::SerieA),
            "Bundesliga" => Ok(League::Bundesliga),
            "Ligue_1" => Ok(League::Ligue1),
            other => Err(InfluenceError::UnknownLeague(other.to_string())),
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluenceBreakdown {
    pub goals_score: f64,
    pub assists_score: f64,
    pub appearances_score: f64,
    pub social_score: f64,
}

impl InfluenceBreakdown {
    pub fn total(&self) -> f64 {
        self.goals_score + self.assists_score + self.appearances_score + self.social_score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluenceScore {
    pub player_id: String,
    pub player_name: String,
    pub influence: f64,
    /// Always within 0-100.
    pub normalized_influence: f64,
    pub breakdown: InfluenceBreakdown,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestBreakdown {
    pub by_goals: InfluenceScore,
    pub by_assists: InfluenceScore,
    pub by_appearances: InfluenceScore,
    pub by_social: InfluenceScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonMetrics {
    pub max_influence: f64,
    pub min_influence: f64,
    pub avg_influence: f64,
    pub best_breakdown: BestBreakdown,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InfluenceError {
    #[error("Unknown position: {0}")]
    UnknownPosition(String),

    #[error("Unknown league: {0}")]
    UnknownLeague(String),
}
