//! Error mapping
//!
//! Translates application errors into HTTP responses. Validation detail
//! goes back to the client; internal detail goes to the log only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use formworks_core::ports::inbound::UseCaseError;

#[derive(Debug)]
pub enum ApiError {
    UseCase(UseCaseError),
    Internal(String),
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        Self::UseCase(err)
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::Internal(format!("token signing failed: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::UseCase(UseCaseError::Validation(errors)) => (
                StatusCode::BAD_REQUEST,
                json!({ "errors": errors.as_slice() }),
            ),
            Self::UseCase(UseCaseError::Malformed(message)) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            Self::UseCase(UseCaseError::NotFound(message)) => {
                (StatusCode::NOT_FOUND, json!({ "error": message }))
            }
            Self::UseCase(UseCaseError::Unauthorized) => {
                (StatusCode::UNAUTHORIZED, json!({ "error": "unauthorized" }))
            }
            Self::UseCase(UseCaseError::RepositoryError(detail)) => {
                tracing::error!("Request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error" }),
                )
            }
            Self::Internal(detail) => {
                tracing::error!("Request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
