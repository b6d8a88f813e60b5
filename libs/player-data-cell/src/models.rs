use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::UpstreamError;
use shared_models::{AppError, PlayerWithStats};

/// Upper bound on `get_top_players`, whatever the caller asks for.
pub const MAX_TOP_PLAYERS: usize = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Player with ID {0} not found")]
    PlayerNotFound(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Unknown(String),
}

impl From<UpstreamError> for ProviderError {
    fn from(error: UpstreamError) -> Self {
        match error {
            UpstreamError::Status { status, message } => ProviderError::Api { status, message },
            UpstreamError::Transport(_) => ProviderError::Api {
                status: error.status_code(),
                message: error.to_string(),
            },
            UpstreamError::Config(message) => ProviderError::Unknown(message),
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::InvalidRequest(message) => AppError::InvalidRequest(message),
            ProviderError::PlayerNotFound(_) => AppError::PlayerNotFound(error.to_string()),
            ProviderError::Api { status, message } => AppError::Api { status, message },
            ProviderError::Unknown(message) => AppError::Unknown(message),
        }
    }
}

/// Envelope used by the remote source for list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemotePlayerList {
    pub players: Vec<PlayerWithStats>,
}
