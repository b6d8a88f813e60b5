use std::any::Any;

use axum::{
    http::Uri,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error};

use shared_models::AppError;

/// Router fallback for unmatched paths. Renders the `NotFound` envelope plus
/// the requested `path`.
pub async fn not_found(uri: Uri) -> Response {
    let error = AppError::NotFound("Not found".to_string());
    debug!("No route for {}", uri.path());

    (
        error.status(),
        Json(json!({
            "error": error.message(),
            "code": error.code(),
            "path": uri.path(),
        })),
    )
        .into_response()
}

/// Turns a handler panic into a 500 envelope. Used with `CatchPanicLayer::custom`.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "An unexpected error occurred".to_string()
    };

    error!("Handler panicked: {}", message);
    AppError::Internal(message).into_response()
}
