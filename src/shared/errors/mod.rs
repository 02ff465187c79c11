//! Error Types
//!
//! Layered error types with proper HTTP status code mapping. The JSON
//! bodies emitted by `ApiError` are part of the public contract:
//! `{"error": "Country not found"}`, `{"error": "External data source
//! unavailable", "details": ...}` and so on.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Gateway-level errors for upstream feed failures.
///
/// A non-success HTTP status, a transport error and a timeout are all the
/// same condition from the caller's point of view: the feed is unavailable.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("External data source unavailable: {details}")]
    Unavailable { details: String },
}

impl GatewayError {
    /// Build an `Unavailable` error naming the feed that failed
    #[must_use]
    pub fn unavailable(feed: &str, details: impl std::fmt::Display) -> Self {
        Self::Unavailable {
            details: format!("Could not fetch data from {feed}: {details}"),
        }
    }
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Errors raised while producing or persisting the summary image.
///
/// These never propagate to clients as a 5xx: the refresh path logs them
/// and the image read path reports the artifact as missing.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Artifact I/O failed: {0}")]
    Artifact(#[from] std::io::Error),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error(transparent)]
    Upstream(#[from] GatewayError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Render failures surface as an absent artifact, never a 5xx
            Self::Render(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            ApiError::UseCase(uc_error) => match uc_error {
                UseCaseError::NotFound { resource } => {
                    (uc_error.status_code(), format!("{resource} not found"), None)
                }
                UseCaseError::Upstream(GatewayError::Unavailable { details }) => (
                    uc_error.status_code(),
                    "External data source unavailable".to_string(),
                    Some(details.clone()),
                ),
                UseCaseError::Repository(_) => (
                    uc_error.status_code(),
                    "Internal server error".to_string(),
                    None,
                ),
                UseCaseError::Render(_) => (
                    uc_error.status_code(),
                    "Summary image not found".to_string(),
                    None,
                ),
            },
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                None,
            ),
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}
