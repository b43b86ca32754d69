use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub upstream: String,
}

/// Root endpoint: service identification.
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "draft-pulse",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        upstream: state.client.base_url().to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub upstream_connected: bool,
    pub manager_count: usize,
}

/// Verify upstream connectivity by fetching the standings resource.
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    let standings = state.client.standings().await?;

    Ok(Json(HealthResponse {
        status: "healthy",
        upstream_connected: true,
        manager_count: standings.len(),
    }))
}
