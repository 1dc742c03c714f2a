//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` and the port error enums to HTTP status codes and JSON
//! response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use micdrop_core::ports::{AiError, CoreError, NewsError, RepositoryError, SpeechError};

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Service unavailable (e.g., collaborator unconfigured or down).
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Ai(ai_err) => ai_err.into(),
            CoreError::Speech(speech_err) => speech_err.into(),
            CoreError::News(news_err) => news_err.into(),
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::Configuration(msg) => Self::Internal(format!("Config: {msg}")),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            RepositoryError::Constraint(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<AiError> for HttpError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::NotConfigured => Self::ServiceUnavailable(err.to_string()),
            AiError::Provider(_) | AiError::EmptyCompletion => {
                Self::ServiceUnavailable(err.to_string())
            }
        }
    }
}

impl From<SpeechError> for HttpError {
    fn from(err: SpeechError) -> Self {
        Self::ServiceUnavailable(err.to_string())
    }
}

impl From<NewsError> for HttpError {
    fn from(err: NewsError) -> Self {
        Self::ServiceUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err: HttpError = CoreError::Validation("nope".into()).into();
        assert!(matches!(err, HttpError::BadRequest(_)));
    }

    #[test]
    fn unconfigured_ai_maps_to_service_unavailable() {
        let err: HttpError = CoreError::Ai(AiError::NotConfigured).into();
        assert!(matches!(err, HttpError::ServiceUnavailable(_)));
    }

    #[test]
    fn missing_repository_row_maps_to_not_found() {
        let err: HttpError = RepositoryError::NotFound("Alpha".into()).into();
        assert!(matches!(err, HttpError::NotFound(_)));
    }
}
