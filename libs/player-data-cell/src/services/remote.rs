use async_trait::async_trait;
use tracing::{debug, instrument};

use shared_config::AppConfig;
use shared_database::FootballDataClient;
use shared_models::PlayerWithStats;

use crate::models::{ProviderError, RemotePlayerList};
use crate::services::source::PlayerDataSource;

/// Player data served by an upstream HTTP API.
pub struct RemoteDataSource {
    client: FootballDataClient,
}

impl RemoteDataSource {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: FootballDataClient::new(config),
        }
    }

    pub fn with_client(client: FootballDataClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlayerDataSource for RemoteDataSource {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<PlayerWithStats>, ProviderError> {
        let list: RemotePlayerList = self
            .client
            .get("/players", &[("name", query.to_string())])
            .await?;

        debug!("Upstream search returned {} players", list.players.len());
        Ok(list.players)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> Result<Option<PlayerWithStats>, ProviderError> {
        match self.client.get::<PlayerWithStats>(&format!("/players/{}", id), &[]).await {
            Ok(player) => Ok(Some(player)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    async fn get_top(&self, limit: usize) -> Result<Vec<PlayerWithStats>, ProviderError> {
        let list: RemotePlayerList = self
            .client
            .get("/players/top", &[("limit", limit.to_string())])
            .await?;

        Ok(list.players.into_iter().take(limit).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::services::mock::mock_players;

    fn source(server: &MockServer) -> RemoteDataSource {
        RemoteDataSource::with_client(FootballDataClient::with_base_url(&server.uri(), "test-key"))
    }

    #[tokio::test]
    async fn search_decodes_player_list() {
        let server = MockServer::start().await;
        let players = vec![mock_players().remove(1)];
        Mock::given(method("GET"))
            .and(path("/players"))
            .and(query_param("name", "ronaldo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "players": players })))
            .mount(&server)
            .await;

        let results = source(&server).search("ronaldo").await.unwrap();
        assert_eq!(results, players);
    }

    #[tokio::test]
    async fn missing_player_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players/404"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "No such player" })))
            .mount(&server)
            .await;

        assert_eq!(source(&server).get_by_id("404").await.unwrap(), None);
    }

    #[tokio::test]
    async fn upstream_failure_keeps_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players/top"))
            .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "message": "Maintenance" })))
            .mount(&server)
            .await;

        let err = source(&server).get_top(10).await.unwrap_err();
        assert_matches!(err, ProviderError::Api { status: 503, ref message } if message == "Maintenance");
    }

    #[tokio::test]
    async fn top_players_are_truncated_to_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players/top"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "players": mock_players() })))
            .mount(&server)
            .await;

        let top = source(&server).get_top(2).await.unwrap();
        assert_eq!(top.len(), 2);
    }
}
