use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use shared_config::AppConfig;

const AUTH_HEADER: &str = "X-Auth-Token";

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Upstream returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid upstream configuration: {0}")]
    Config(String),
}

impl UpstreamError {
    /// HTTP status to surface to our own callers.
    pub fn status_code(&self) -> u16 {
        match self {
            UpstreamError::Status { status, .. } => *status,
            UpstreamError::Transport(e) if e.is_connect() || e.is_timeout() => 502,
            UpstreamError::Transport(e) => e.status().map(|s| s.as_u16()).unwrap_or(500),
            UpstreamError::Config(_) => 500,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, UpstreamError::Status { status: 404, .. })
    }
}

pub struct FootballDataClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FootballDataClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(&config.football_data_api_url, &config.football_data_api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn get_headers(&self) -> Result<HeaderMap, UpstreamError> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTH_HEADER,
            HeaderValue::from_str(&self.api_key)
                .map_err(|_| UpstreamError::Config("API key is not a valid header value".to_string()))?,
        );

        Ok(headers)
    }

    pub async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, UpstreamError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.get_headers()?)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Upstream API error ({}): {}", status, error_text);

            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: extract_message(status, &error_text),
            });
        }

        Ok(response.json::<T>().await?)
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }
}

/// Prefers the upstream's own `message` field, then the raw body, then the status reason.
fn extract_message(status: StatusCode, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(message)) = map.get("message") {
            return message.clone();
        }
    }

    if !body.trim().is_empty() {
        return body.trim().to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("API request failed")
        .to_string()
}
