//! REST API endpoints.
//!
//! Axum-based HTTP API serving chart-ready derived series computed from
//! the latest upstream snapshot.

pub mod routes;
pub mod state;

use axum::http::header::HeaderValue;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::fetch::FetchError;
use state::AppState;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] FetchError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    let cors_origin = state.config.server.cors_origin.clone();
    let cors = match cors_origin.as_str() {
        "*" => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        origin => match origin.parse::<HeaderValue>() {
            Ok(value) => CorsLayer::new()
                .allow_origin(AllowOrigin::exact(value))
                .allow_methods(Any)
                .allow_headers(Any),
            Err(_) => CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        },
    };

    Router::new()
        .route("/", get(routes::health::service_info))
        .route("/health", get(routes::health::health_check))
        .route("/api/charts/standings", get(routes::league::standings))
        .route("/api/charts/margins", get(routes::league::margins))
        .route("/api/charts/momentum", get(routes::league::momentum))
        .route("/api/charts/bench-points", get(routes::league::bench_points))
        .route(
            "/api/charts/delta-from-last",
            get(routes::charts::delta_from_last),
        )
        .route("/api/charts/contributions", get(routes::charts::contributions))
        .route("/api/charts/draft-buckets", get(routes::charts::draft_buckets))
        .route("/api/charts/top-transfers", get(routes::charts::top_transfers))
        .route("/api/refresh", post(routes::refresh::refresh))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
