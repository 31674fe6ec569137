use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::domains::directory::Stats;
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    dataset: Stats,
}

/// Health check endpoint
///
/// The dataset is loaded at startup and immutable, so a running process
/// with a non-empty dataset is healthy by construction.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let stats = state.dataset.stats();

    let (status_code, status) = if stats.orgs > 0 {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        status_code,
        Json(HealthResponse {
            status: status.to_string(),
            dataset: stats,
        }),
    )
}
