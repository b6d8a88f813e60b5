use std::env;
use std::str::FromStr;
use tracing::warn;

pub const DEMO_API_KEY: &str = "demo";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub football_data_api_url: String,
    pub football_data_api_key: String,
    pub cache: CacheConfig,
}

/// TTLs and sweep interval for the response cache, all in seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub default_ttl_secs: u64,
    pub check_period_secs: u64,
    pub search_ttl_secs: u64,
    pub player_ttl_secs: u64,
    pub top_players_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_secs: 600,
            check_period_secs: 120,
            search_ttl_secs: 3600,
            player_ttl_secs: 600,
            top_players_ttl_secs: 1800,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            football_data_api_url: "https://api.football-data.org/v4".to_string(),
            football_data_api_key: DEMO_API_KEY.to_string(),
            cache: CacheConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let cache_defaults = defaults.cache.clone();

        let config = Self {
            port: parse_var("PORT", defaults.port),
            football_data_api_url: env::var("FOOTBALL_DATA_API_URL")
                .unwrap_or_else(|_| {
                    warn!("FOOTBALL_DATA_API_URL not set, using default");
                    defaults.football_data_api_url
                }),
            football_data_api_key: env::var("FOOTBALL_DATA_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("FOOTBALL_DATA_API_KEY not set, serving mock player data");
                    defaults.football_data_api_key
                }),
            cache: CacheConfig {
                default_ttl_secs: parse_var("CACHE_DEFAULT_TTL_SECS", cache_defaults.default_ttl_secs),
                check_period_secs: parse_var("CACHE_CHECK_PERIOD_SECS", cache_defaults.check_period_secs),
                search_ttl_secs: parse_var("CACHE_SEARCH_TTL_SECS", cache_defaults.search_ttl_secs),
                player_ttl_secs: parse_var("CACHE_PLAYER_TTL_SECS", cache_defaults.player_ttl_secs),
                top_players_ttl_secs: parse_var("CACHE_TOP_PLAYERS_TTL_SECS", cache_defaults.top_players_ttl_secs),
            },
        };

        if !config.is_remote_configured() {
            warn!("Upstream football data API not configured - using built-in dataset");
        }

        config
    }

    /// True when a real API key is present and the remote data source should be used.
    pub fn is_remote_configured(&self) -> bool {
        !self.football_data_api_key.is_empty()
            && self.football_data_api_key != DEMO_API_KEY
            && !self.football_data_api_url.is_empty()
    }
}

fn parse_var<T>(name: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value '{}', using default {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}
