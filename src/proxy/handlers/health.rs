// Health Handler
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::models::{HealthFailure, HealthReport, HealthStatus};
use crate::proxy::server::AppState;

/// Check the upstream API with the configured key
///
/// A failing upstream status still answers 200 with `status: "error"`;
/// only a missing key or a transport failure answers 500.
///
/// Any status below 400 counts as healthy, so a bare 304 or other 3xx that
/// is not followed as a redirect reports `healthy` too.
pub async fn handle_health(State(state): State<AppState>) -> Response {
    let upstream = &state.upstream;
    let api_key = match upstream.api_key() {
        Ok(key) => key,
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthFailure::new(e.to_string())),
            )
                .into_response();
        }
    };

    match upstream.check_health(api_key).await {
        Ok(upstream_status) => {
            let status = if !upstream_status.is_client_error()
                && !upstream_status.is_server_error()
            {
                HealthStatus::Healthy
            } else {
                tracing::warn!("Health check: upstream answered {}", upstream_status);
                HealthStatus::Error
            };

            Json(HealthReport {
                status,
                api_key_set: true,
                api_key_length: api_key.len(),
                api_response: upstream_status.as_u16(),
            })
            .into_response()
        }
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthFailure::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Process liveness, no upstream call
pub async fn handle_liveness() -> Response {
    Json(json!({
        "status": "ok"
    }))
    .into_response()
}
