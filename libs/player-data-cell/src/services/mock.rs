use async_trait::async_trait;
use tracing::debug;

use shared_models::{PlayerProfile, PlayerStats, PlayerWithStats};

use crate::models::ProviderError;
use crate::services::source::PlayerDataSource;

/// Serves a fixed in-memory dataset.
pub struct MockDataSource {
    players: Vec<PlayerWithStats>,
}

impl MockDataSource {
    pub fn new() -> Self {
        Self::with_players(mock_players())
    }

    pub fn with_players(players: Vec<PlayerWithStats>) -> Self {
        Self { players }
    }
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlayerDataSource for MockDataSource {
    async fn search(&self, query: &str) -> Result<Vec<PlayerWithStats>, ProviderError> {
        let query = query.to_lowercase();
        let matches: Vec<PlayerWithStats> = self
            .players
            .iter()
            .filter(|p| p.profile.name.to_lowercase().contains(&query))
            .cloned()
            .collect();

        debug!("Mock search for '{}' matched {} players", query, matches.len());
        Ok(matches)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<PlayerWithStats>, ProviderError> {
        Ok(self.players.iter().find(|p| p.profile.id == id).cloned())
    }

    async fn get_top(&self, limit: usize) -> Result<Vec<PlayerWithStats>, ProviderError> {
        Ok(self.players.iter().take(limit).cloned().collect())
    }
}

pub fn mock_players() -> Vec<PlayerWithStats> {
    vec![
        player(
            "1", "Lionel Messi", "Inter Miami CF", "Argentina", 37, 10,
            PlayerStats { goals: 807, assists: 318, appearances: 1000, social_mentions: 5_000_000 },
        ),
        player(
            "2", "Cristiano Ronaldo", "Al-Nassr", "Portugal", 39, 7,
            PlayerStats { goals: 890, assists: 270, appearances: 1150, social_mentions: 6_000_000 },
        ),
        player(
            "3", "Erling Haaland", "Manchester City", "Norway", 24, 9,
            PlayerStats { goals: 186, assists: 45, appearances: 278, social_mentions: 2_500_000 },
        ),
        player(
            "4", "Kylian Mbappé", "Paris Saint-Germain", "France", 25, 7,
            PlayerStats { goals: 312, assists: 95, appearances: 456, social_mentions: 3_500_000 },
        ),
        player(
            "5", "Neymar Jr", "Al-Hilal", "Brazil", 32, 11,
            PlayerStats { goals: 140, assists: 102, appearances: 312, social_mentions: 4_000_000 },
        ),
    ]
}

// Every player in the built-in dataset is a forward
fn player(
    id: &str,
    name: &str,
    club: &str,
    nationality: &str,
    age: u32,
    shirt_number: u32,
    stats: PlayerStats,
) -> PlayerWithStats {
    PlayerWithStats {
        profile: PlayerProfile {
            id: id.to_string(),
            name: name.to_string(),
            club: club.to_string(),
            position: "Forward".to_string(),
            nationality: nationality.to_string(),
            age,
            photo: Some(format!("https://crests.football-data.org/{}.svg", id)),
            shirt_number: Some(shirt_number),
        },
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_is_case_insensitive_contains() {
        let source = MockDataSource::new();

        let hits = source.search("RONALDO").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].profile.name, "Cristiano Ronaldo");

        // "an" appears in Erling Haaland, Kylian Mbappé and Cristiano Ronaldo
        let hits = source.search("an").await.unwrap();
        let ids: Vec<_> = hits.iter().map(|p| p.profile.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "4"]);
    }

    #[tokio::test]
    async fn lookup_and_top_follow_dataset_order() {
        let source = MockDataSource::new();

        assert_eq!(source.get_by_id("3").await.unwrap().unwrap().profile.name, "Erling Haaland");
        assert!(source.get_by_id("99").await.unwrap().is_none());

        let top = source.get_top(2).await.unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].profile.id, "1");
        assert_eq!(source.get_top(50).await.unwrap().len(), 5);
    }

    #[test]
    fn dataset_ids_are_unique() {
        let players = mock_players();
        let mut ids: Vec<_> = players.iter().map(|p| p.profile.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), players.len());
    }
}
