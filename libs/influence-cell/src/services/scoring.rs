use tracing::debug;

use shared_models::PlayerStats;

use crate::models::{
    BestBreakdown, ComparisonMetrics, InfluenceBreakdown, InfluenceScore, InfluenceWeights,
    League, Position, DEFAULT_WEIGHTS,
};

/// Raw influence that maps to 100 on the log scale when no reference maximum is given.
pub const LOG_REFERENCE_INFLUENCE: f64 = 4500.0;

#[derive(Debug, Clone)]
pub struct InfluenceScoringService {
    default_weights: InfluenceWeights,
    log_reference: f64,
}

impl InfluenceScoringService {
    pub fn new() -> Self {
        Self {
            default_weights: DEFAULT_WEIGHTS,
            log_reference: LOG_REFERENCE_INFLUENCE,
        }
    }

    /// Weighted sum of the four statistics. Not clamped.
    pub fn compute_raw_influence(
        &self,
        stats: &PlayerStats,
        weights: Option<&InfluenceWeights>,
    ) -> f64 {
        self.breakdown(stats, weights).total()
    }

    pub fn breakdown(
        &self,
        stats: &PlayerStats,
        weights: Option<&InfluenceWeights>,
    ) -> InfluenceBreakdown {
        let w = weights.unwrap_or(&self.default_weights);

        InfluenceBreakdown {
            goals_score: stats.goals as f64 * w.goals,
            assists_score: stats.assists as f64 * w.assists,
            appearances_score: stats.appearances as f64 * w.appearances,
            social_score: stats.social_mentions as f64 * w.social_mentions,
        }
    }

    pub fn compute_influence(
        &self,
        player_id: &str,
        player_name: &str,
        stats: &PlayerStats,
        weights: Option<&InfluenceWeights>,
        max_influence: Option<f64>,
    ) -> InfluenceScore {
        let breakdown = self.breakdown(stats, weights);
        let influence = breakdown.total();

        InfluenceScore {
            player_id: player_id.to_string(),
            player_name: player_name.to_string(),
            influence,
            normalized_influence: self.normalize(influence, max_influence),
            breakdown,
            rank: None,
        }
    }

    /// Scales `influence` to 0-100, relative to `max_influence` when it is positive,
    /// otherwise on a log scale where `LOG_REFERENCE_INFLUENCE` maps to 100.
    pub fn normalize(&self, influence: f64, max_influence: Option<f64>) -> f64 {
        let normalized = match max_influence {
            Some(max) if max > 0.0 && max.is_finite() => (influence / max) * 100.0,
            _ => {
                let log_score = influence.max(1.0).log10();
                (log_score / self.log_reference.log10()) * 100.0
            }
        };

        if normalized.is_nan() {
            return 0.0;
        }
        normalized.clamp(0.0, 100.0)
    }

    pub fn weights_by_position(&self, position: &str) -> InfluenceWeights {
        position
            .parse::<Position>()
            .map(|p| p.weights())
            .unwrap_or_else(|e| {
                debug!("{}, using default weights", e);
                self.default_weights
            })
    }

    pub fn weights_by_league(&self, league: &str) -> InfluenceWeights {
        league
            .parse::<League>()
            .map(|l| l.weights())
            .unwrap_or_else(|e| {
                debug!("{}, using default weights", e);
                self.default_weights
            })
    }

    /// Mean of the position weights and the league weights (default weights when
    /// no league is given).
    pub fn combined_weights(&self, position: &str, league: Option<&str>) -> InfluenceWeights {
        let position_weights = self.weights_by_position(position);
        let league_weights = match league {
            Some(league) => self.weights_by_league(league),
            None => self.default_weights,
        };

        position_weights.average(&league_weights)
    }

    /// Weight selection used by the klout and leaderboard endpoints: both filters
    /// give combined weights, a position alone gives position weights, anything
    /// else the defaults. Empty strings count as absent.
    pub fn weights_for_filters(
        &self,
        position: Option<&str>,
        league: Option<&str>,
    ) -> InfluenceWeights {
        let position = position.filter(|p| !p.is_empty());
        let league = league.filter(|l| !l.is_empty());

        match (position, league) {
            (Some(position), Some(league)) => self.combined_weights(position, Some(league)),
            (Some(position), None) => self.weights_by_position(position),
            _ => self.default_weights,
        }
    }

    /// Sorts by normalized influence, highest first, and assigns 1-based ranks.
    /// Equal scores keep their input order.
    pub fn rank_players(&self, mut scores: Vec<InfluenceScore>) -> Vec<InfluenceScore> {
        scores.sort_by(|a, b| b.normalized_influence.total_cmp(&a.normalized_influence));

        for (index, score) in scores.iter_mut().enumerate() {
            score.rank = Some(index + 1);
        }

        scores
    }

    pub fn comparison_metrics(&self, scores: &[InfluenceScore]) -> Option<ComparisonMetrics> {
        let first = scores.first()?;

        let (max_influence, min_influence, total) = scores.iter().fold(
            (first.normalized_influence, first.normalized_influence, 0.0),
            |(max, min, total), s| {
                (
                    max.max(s.normalized_influence),
                    min.min(s.normalized_influence),
                    total + s.normalized_influence,
                )
            },
        );

        let best_breakdown = BestBreakdown {
            by_goals: best_by(scores, |b| b.goals_score)?.clone(),
            by_assists: best_by(scores, |b| b.assists_score)?.clone(),
            by_appearances: best_by(scores, |b| b.appearances_score)?.clone(),
            by_social: best_by(scores, |b| b.social_score)?.clone(),
        };

        Some(ComparisonMetrics {
            max_influence,
            min_influence,
            avg_influence: total / scores.len() as f64,
            best_breakdown,
        })
    }
}

impl Default for InfluenceScoringService {
    fn default() -> Self {
        Self::new()
    }
}

// Earliest record wins ties
fn best_by<F>(scores: &[InfluenceScore], key: F) -> Option<&InfluenceScore>
where
    F: Fn(&InfluenceBreakdown) -> f64,
{
    scores
        .iter()
        .reduce(|best, s| if key(&s.breakdown) > key(&best.breakdown) { s } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::models::InfluenceError;

    fn stats(goals: u64, assists: u64, appearances: u64, social_mentions: u64) -> PlayerStats {
        PlayerStats {
            goals,
            assists,
            appearances,
            social_mentions,
        }
    }

    fn score(id: &str, normalized: f64, breakdown: InfluenceBreakdown) -> InfluenceScore {
        InfluenceScore {
            player_id: id.to_string(),
            player_name: format!("Player {}", id),
            influence: breakdown.total(),
            normalized_influence: normalized,
            breakdown,
            rank: None,
        }
    }

    fn breakdown(goals: f64, assists: f64, appearances: f64, social: f64) -> InfluenceBreakdown {
        InfluenceBreakdown {
            goals_score: goals,
            assists_score: assists,
            appearances_score: appearances,
            social_score: social,
        }
    }

    #[test]
    fn raw_influence_is_weighted_dot_product() {
        let service = InfluenceScoringService::new();
        let raw = service.compute_raw_influence(&stats(10, 5, 20, 1000), None);
        assert_eq!(raw, 560.0);

        let custom = InfluenceWeights::new(1.0, 1.0, 1.0, 0.0);
        assert_eq!(service.compute_raw_influence(&stats(10, 5, 20, 1000), Some(&custom)), 35.0);
    }

    #[test]
    fn influence_equal_to_max_normalizes_to_100() {
        let service = InfluenceScoringService::new();
        let s = stats(807, 318, 1000, 5_000_000);
        let raw = service.compute_raw_influence(&s, None);

        let result = service.compute_influence("1", "Lionel Messi", &s, None, Some(raw));
        assert_eq!(result.normalized_influence, 100.0);
        assert_eq!(result.influence, raw);
        assert_eq!(result.breakdown.goals_score, 2421.0);
        assert_eq!(result.rank, None);
    }

    #[test]
    fn relative_normalization_is_clamped() {
        let service = InfluenceScoringService::new();
        let result = service.compute_influence("1", "A", &stats(10, 5, 20, 1000), None, Some(280.0));
        assert_eq!(result.normalized_influence, 100.0);

        let half = service.compute_influence("1", "A", &stats(10, 5, 20, 1000), None, Some(1120.0));
        assert_eq!(half.normalized_influence, 50.0);
    }

    #[test]
    fn log_fallback_when_max_missing_or_not_positive() {
        let service = InfluenceScoringService::new();

        assert_eq!(service.normalize(4500.0, None), 100.0);
        assert_eq!(service.normalize(0.0, None), 0.0);
        assert_eq!(service.normalize(1.0, Some(0.0)), 0.0);
        assert_eq!(service.normalize(1_000_000.0, Some(-5.0)), 100.0);

        let expected = 560f64.log10() / 4500f64.log10() * 100.0;
        assert!((service.normalize(560.0, None) - expected).abs() < 1e-9);
    }

    #[test]
    fn normalized_is_always_within_bounds() {
        let service = InfluenceScoringService::new();
        let samples = [
            stats(0, 0, 0, 0),
            stats(1, 0, 0, 0),
            stats(890, 270, 1150, 6_000_000),
            stats(u32::MAX as u64, 0, 0, u32::MAX as u64),
        ];
        let maxes = [None, Some(1.0), Some(10.0), Some(1e12)];

        for s in &samples {
            for max in maxes {
                let n = service.compute_influence("x", "x", s, None, max).normalized_influence;
                assert!((0.0..=100.0).contains(&n), "{} out of range", n);
            }
        }
    }

    #[test]
    fn position_and_league_lookups() {
        let service = InfluenceScoringService::new();

        assert_eq!(service.weights_by_position("Goalkeeper"), InfluenceWeights::new(0.0, 0.0, 3.0, 0.2));
        assert_eq!(service.weights_by_position("Striker"), DEFAULT_WEIGHTS);
        assert_eq!(service.weights_by_league("Serie_A"), InfluenceWeights::new(2.8, 1.8, 1.2, 0.3));
        assert_eq!(service.weights_by_league("MLS"), DEFAULT_WEIGHTS);

        assert_matches!("forward".parse::<Position>(), Err(InfluenceError::UnknownPosition(p)) if p == "forward");
        assert_eq!("Ligue_1".parse::<League>(), Ok(League::Ligue1));
    }

    #[test]
    fn combined_weights_average_field_by_field() {
        let service = InfluenceScoringService::new();

        let combined = service.combined_weights("Forward", Some("Premier_League"));
        assert_eq!(combined, InfluenceWeights::new(3.75, 2.35, 1.0, 0.5));

        let without_league = service.combined_weights("Defender", None);
        assert_eq!(without_league.goals, 2.25);
        assert_eq!(without_league.assists, 1.75);
        assert_eq!(without_league.appearances, 1.5);
        assert!((without_league.social_mentions - 0.4).abs() < 1e-12);
    }

    #[test]
    fn filters_select_expected_weights() {
        let service = InfluenceScoringService::new();

        assert_eq!(
            service.weights_for_filters(Some("Forward"), Some("Premier_League")),
            service.combined_weights("Forward", Some("Premier_League"))
        );
        assert_eq!(service.weights_for_filters(Some("Midfielder"), None), Position::Midfielder.weights());
        assert_eq!(service.weights_for_filters(None, Some("La_Liga")), DEFAULT_WEIGHTS);
        assert_eq!(service.weights_for_filters(Some(""), Some("")), DEFAULT_WEIGHTS);
    }

    #[test]
    fn rank_sorts_descending_and_keeps_tie_order() {
        let service = InfluenceScoringService::new();
        let b = breakdown(1.0, 1.0, 1.0, 1.0);
        let ranked = service.rank_players(vec![
            score("a", 40.0, b),
            score("b", 90.0, b),
            score("c", 40.0, b),
            score("d", 100.0, b),
        ]);

        let order: Vec<_> = ranked.iter().map(|s| (s.player_id.as_str(), s.rank)).collect();
        assert_eq!(
            order,
            vec![("d", Some(1)), ("b", Some(2)), ("a", Some(3)), ("c", Some(4))]
        );
    }

    #[test]
    fn comparison_metrics_empty_is_none() {
        assert!(InfluenceScoringService::new().comparison_metrics(&[]).is_none());
    }

    #[test]
    fn comparison_metrics_picks_best_per_category_without_reordering() {
        let service = InfluenceScoringService::new();
        let scores = vec![
            score("1", 100.0, breakdown(50.0, 10.0, 5.0, 200.0)),
            score("2", 40.0, breakdown(90.0, 10.0, 1.0, 100.0)),
            score("3", 70.0, breakdown(10.0, 30.0, 5.0, 300.0)),
        ];

        let metrics = service.comparison_metrics(&scores).unwrap();

        assert_eq!(metrics.max_influence, 100.0);
        assert_eq!(metrics.min_influence, 40.0);
        assert_eq!(metrics.avg_influence, 70.0);
        assert_eq!(metrics.best_breakdown.by_goals.player_id, "2");
        assert_eq!(metrics.best_breakdown.by_assists.player_id, "3");
        // Tie on appearances goes to the earliest record
        assert_eq!(metrics.best_breakdown.by_appearances.player_id, "1");
        assert_eq!(metrics.best_breakdown.by_social.player_id, "3");

        let ids: Vec<_> = scores.iter().map(|s| s.player_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}
