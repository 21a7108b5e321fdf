use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::proxy::upstream::UpstreamError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid amount")]
    InvalidAmount,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Upstream answered with a non-success status that is not relayed to the caller
    #[error("API Error: {}", .0.as_u16())]
    UpstreamUnavailable(StatusCode),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// HTTP status reported to the browser for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidAmount => StatusCode::BAD_REQUEST,
            AppError::Upstream(e) => e.status_code(),
            AppError::UpstreamUnavailable(_)
            | AppError::Config(_)
            | AppError::HttpClient(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Collapse an upstream HTTP status into a 500 instead of relaying it
    pub fn masking_upstream_status(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status(status) => AppError::UpstreamUnavailable(status),
            other => AppError::Upstream(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed ({}): {}", status.as_u16(), self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// Implement alias for Result to simplify usage
pub type AppResult<T> = Result<T, AppError>;
