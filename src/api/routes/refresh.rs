use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::api::state::AppState;
use crate::api::ApiError;

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub status: &'static str,
    pub records: usize,
    pub managers: usize,
    pub fetched_at: DateTime<Utc>,
}

/// Re-fetch the upstream snapshot and swap it in.
///
/// All seven resources are fetched together; any failure leaves the
/// previous snapshot untouched.
pub async fn refresh(State(state): State<AppState>) -> Result<Json<RefreshResponse>, ApiError> {
    let snapshot = state.client.fetch_all().await?;

    let response = RefreshResponse {
        status: "ok",
        records: snapshot.record_count(),
        managers: snapshot.standings.len(),
        fetched_at: snapshot.fetched_at,
    };

    info!(records = response.records, "Snapshot refreshed");
    state.store_snapshot(snapshot).await;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::config::AppConfig;
    use crate::models::{LeagueSnapshot, Standing};
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_snapshot() {
        let mut config = AppConfig::default();
        config.upstream.base_url = "http://127.0.0.1:1/".to_string();

        let state = AppState::new(config).unwrap();
        let mut snapshot = LeagueSnapshot::empty();
        snapshot.standings = vec![Standing::new(1, "A", 100, 1)];
        state.store_snapshot(snapshot).await;

        let app = build_router(state.clone());
        let resp = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/refresh")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        // The stale snapshot survives a failed refresh.
        let held = state.snapshot.read().await;
        assert_eq!(held.as_ref().unwrap().standings.len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_requires_post() {
        let state = AppState::new(AppConfig::default()).unwrap();
        let app = build_router(state);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/refresh")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
