use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    Json,
};
use http::request::Parts;
use serde::de::DeserializeOwned;

use shared_models::AppError;

/// `Json` whose rejections render as `INVALID_REQUEST` envelopes.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::InvalidRequest(rejection.body_text())),
        }
    }
}

/// `Query` whose rejections render as `INVALID_REQUEST` envelopes.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::InvalidRequest(rejection.body_text())),
        }
    }
}
