// =====================================================================================
// INFLUENCE CELL - WEIGHTED PLAYER SCORING
// =====================================================================================
//
// Pure scoring over player statistics:
// - Raw influence as a weighted sum of goals, assists, appearances and mentions
// - Normalization to 0-100 against a reference maximum or a log scale
// - Position, league and combined weight tables
// - Ranking and comparison metrics
//
// =====================================================================================

pub mod models;
pub mod services;

pub use models::{
    BestBreakdown, ComparisonMetrics, InfluenceBreakdown, InfluenceError, InfluenceScore,
    InfluenceWeights, League, Position, DEFAULT_WEIGHTS,
};
pub use services::{InfluenceScoringService, LOG_REFERENCE_INFLUENCE};
