use axum::response::Response;
use serde_json::{json, Value};

use shared_config::{AppConfig, CacheConfig};
use shared_models::{PlayerProfile, PlayerStats, PlayerWithStats};

pub struct TestConfig {
    pub api_url: String,
    pub api_key: String,
    pub cache: CacheConfig,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:9999/v4".to_string(),
            api_key: "demo".to_string(),
            cache: CacheConfig::default(),
        }
    }
}

impl TestConfig {
    /// Config pointing at a remote upstream, e.g. a wiremock server.
    pub fn remote(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            api_key: "test-api-key".to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            port: 0,
            football_data_api_url: self.api_url.clone(),
            football_data_api_key: self.api_key.clone(),
            cache: self.cache.clone(),
        }
    }
}

pub struct TestPlayer {
    pub id: String,
    pub name: String,
    pub position: String,
    pub stats: PlayerStats,
}

impl Default for TestPlayer {
    fn default() -> Self {
        Self {
            id: "100".to_string(),
            name: "Test Player".to_string(),
            position: "Midfielder".to_string(),
            stats: PlayerStats {
                goals: 10,
                assists: 5,
                appearances: 20,
                social_mentions: 1000,
            },
        }
    }
}

impl TestPlayer {
    pub fn new(id: &str, name: &str, position: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            position: position.to_string(),
            ..Self::default()
        }
    }

    pub fn forward(id: &str, name: &str) -> Self {
        Self::new(id, name, "Forward")
    }

    pub fn goalkeeper(id: &str, name: &str) -> Self {
        Self::new(id, name, "Goalkeeper")
    }

    pub fn with_stats(mut self, goals: u64, assists: u64, appearances: u64, social_mentions: u64) -> Self {
        self.stats = PlayerStats {
            goals,
            assists,
            appearances,
            social_mentions,
        };
        self
    }

    pub fn to_player(&self) -> PlayerWithStats {
        PlayerWithStats {
            profile: PlayerProfile {
                id: self.id.clone(),
                name: self.name.clone(),
                club: "Test FC".to_string(),
                position: self.position.clone(),
                nationality: "Ireland".to_string(),
                age: 27,
                photo: None,
                shirt_number: None,
            },
            stats: self.stats,
        }
    }
}

pub struct MockUpstreamResponses;

impl MockUpstreamResponses {
    pub fn player_response(player: &PlayerWithStats) -> Value {
        json!(player)
    }

    pub fn player_list_response(players: &[PlayerWithStats]) -> Value {
        json!({ "players": players })
    }

    pub fn error_response(message: &str) -> Value {
        json!({ "message": message })
    }
}

/// Reads a whole response body as JSON.
pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
