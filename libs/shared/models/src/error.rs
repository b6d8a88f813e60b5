use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Uniform error envelope returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Upstream API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
            AppError::PlayerNotFound(_) => "PLAYER_NOT_FOUND",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Api { .. } => "API_ERROR",
            AppError::Unknown(_) => "UNKNOWN_ERROR",
            AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PlayerNotFound(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // Upstream status is passed through when it is a valid HTTP code
            AppError::Api { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::Unknown(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the caller, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::InvalidRequest(msg)
            | AppError::PlayerNotFound(msg)
            | AppError::NotFound(msg)
            | AppError::Unknown(msg)
            | AppError::Internal(msg) => msg,
            AppError::Api { message, .. } => message,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.message().to_string(),
            code: self.code().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Error: {}: {}", status, self);
        } else {
            tracing::warn!("Request failed: {}: {}", status, self);
        }

        (status, Json(self.body())).into_response()
    }
}
