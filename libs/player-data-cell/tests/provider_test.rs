// =====================================================================================
// PLAYER DATA CELL - PROVIDER INTEGRATION TESTS
// =====================================================================================

use std::sync::Arc;

use assert_matches::assert_matches;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cache_cell::CacheService;
use player_data_cell::{MockDataSource, PlayerDataService, ProviderError};
use shared_config::CacheConfig;
use shared_models::AppError;
use shared_utils::test_utils::{MockUpstreamResponses, TestConfig, TestPlayer};

fn mock_service() -> (PlayerDataService, Arc<CacheService>) {
    let cache = Arc::new(CacheService::default());
    let service = PlayerDataService::from_config(&TestConfig::default().to_app_config(), cache.clone());
    (service, cache)
}

#[tokio::test]
async fn test_search_ronaldo_returns_single_player() {
    let (service, _) = mock_service();

    let response = assert_ok!(service.search_players("ronaldo").await);

    assert_eq!(response.total_count, 1);
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].profile.name, "Cristiano Ronaldo");
    // "ronaldo" is a word prefix of the full name
    assert_eq!(response.results[0].match_score, 80);
}

#[tokio::test]
async fn test_search_full_name_is_exact_match() {
    let (service, _) = mock_service();

    let response = assert_ok!(service.search_players("CRISTIANO RONALDO").await);
    assert_eq!(response.results[0].match_score, 100);
}

#[tokio::test]
async fn test_search_without_matches_is_empty() {
    let (service, cache) = mock_service();

    let response = assert_ok!(service.search_players("zidane").await);
    assert_eq!(response.total_count, 0);
    assert!(response.results.is_empty());
    assert!(cache.has("search:zidane").await);
}

#[tokio::test]
async fn test_player_stats_lookup() {
    let (service, _) = mock_service();

    let haaland = assert_ok!(service.get_player_stats("3").await);
    assert_eq!(haaland.profile.name, "Erling Haaland");
    assert_eq!(haaland.stats.goals, 186);

    let err = assert_err!(service.get_player_stats("999").await);
    assert_eq!(err, ProviderError::PlayerNotFound("999".to_string()));

    let app_error: AppError = err.into();
    assert_eq!(app_error.code(), "PLAYER_NOT_FOUND");
    assert_eq!(app_error.message(), "Player with ID 999 not found");
}

#[tokio::test]
async fn test_top_players_keep_dataset_order() {
    let (service, _) = mock_service();

    let top = assert_ok!(service.get_top_players(3).await);
    let names: Vec<_> = top.iter().map(|p| p.profile.name.as_str()).collect();
    assert_eq!(names, vec!["Lionel Messi", "Cristiano Ronaldo", "Erling Haaland"]);
}

#[tokio::test]
async fn test_explicit_mock_source_with_custom_players() {
    let players = vec![
        TestPlayer::forward("10", "Alan Shearer").to_player(),
        TestPlayer::forward("11", "Al Alan").to_player(),
    ];
    let service = PlayerDataService::new(
        Arc::new(MockDataSource::with_players(players)),
        Arc::new(CacheService::default()),
        CacheConfig::default(),
    );

    let response = assert_ok!(service.search_players("al").await);
    let scored: Vec<_> = response
        .results
        .iter()
        .map(|r| (r.profile.id.as_str(), r.match_score))
        .collect();
    // Both start with "al"; equal scores keep source order
    assert_eq!(scored, vec![("10", 90), ("11", 90)]);
}

#[tokio::test]
async fn test_remote_source_is_used_and_cached() {
    let server = MockServer::start().await;
    let player = TestPlayer::forward("77", "Remote Striker").to_player();

    Mock::given(method("GET"))
        .and(path("/players/77"))
        .and(header("X-Auth-Token", "test-api-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(MockUpstreamResponses::player_response(&player)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = TestConfig::remote(&server.uri()).to_app_config();
    let service = PlayerDataService::from_config(&config, Arc::new(CacheService::default()));

    assert_eq!(assert_ok!(service.get_player_stats("77").await), player);
    // Second read must come from the cache; wiremock verifies expect(1) on drop
    assert_eq!(assert_ok!(service.get_player_stats("77").await), player);
}

#[tokio::test]
async fn test_remote_errors_surface_as_api_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players"))
        .and(query_param("name", "messi"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(MockUpstreamResponses::error_response("Rate limit exceeded")),
        )
        .mount(&server)
        .await;

    let config = TestConfig::remote(&server.uri()).to_app_config();
    let service = PlayerDataService::from_config(&config, Arc::new(CacheService::default()));

    let err = assert_err!(service.search_players("Messi").await);
    assert_matches!(&err, ProviderError::Api { status: 429, message } if message == "Rate limit exceeded");

    let app_error: AppError = err.into();
    assert_eq!(app_error.code(), "API_ERROR");
    assert_eq!(app_error.status().as_u16(), 429);
}
