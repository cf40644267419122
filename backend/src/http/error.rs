//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::repository::RepositoryError;
use crate::services::{ChartError, StatsError};

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(RepositoryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Repository(e) => match e {
                RepositoryError::NotFound { ref message, .. } => (
                    StatusCode::NOT_FOUND,
                    ApiError::new("NOT_FOUND", message.clone()).with_details(e.context().to_string()),
                ),
                RepositoryError::ValidationError { ref message, .. } => (
                    StatusCode::BAD_REQUEST,
                    ApiError::new("BAD_REQUEST", message.clone()).with_details(e.context().to_string()),
                ),
                RepositoryError::ConnectionError { .. } => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ApiError::new("REPOSITORY_UNAVAILABLE", e.to_string()),
                ),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("REPOSITORY_ERROR", e.to_string()),
                ),
            },
        };

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<StatsError> for AppError {
    fn from(err: StatsError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        match err {
            ChartError::Stats(e) => e.into(),
            ChartError::Repository(e) => e.into(),
            ChartError::Task(e) => AppError::Internal(format!("Task join error: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::ErrorContext;

    #[test]
    fn test_status_codes() {
        let cases = vec![
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                RepositoryError::not_found_with_context("gone", ErrorContext::new("op")).into(),
                StatusCode::NOT_FOUND,
            ),
            (
                RepositoryError::validation_with_context("bad", ErrorContext::new("op")).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                RepositoryError::connection_with_context("down", ErrorContext::new("op")).into(),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                RepositoryError::configuration("broken").into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                StatsError::ReservedCategory("name".into()).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                StatsError::RangeTooLarge {
                    months: 2000,
                    limit: 1200,
                }
                .into(),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[tokio::test]
    async fn test_task_failure_is_internal_error() {
        let join_err = tokio::task::spawn_blocking(|| panic!("chart computation panicked"))
            .await
            .unwrap_err();

        let response = AppError::from(ChartError::from(join_err)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
