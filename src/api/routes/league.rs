use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::routes::current_snapshot;
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{compute_margins, rank_by_descending};
use crate::palette::Rgb;

// ── Standings ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct StandingRow {
    pub entry_id: u32,
    pub manager_name: String,
    pub total_points: u32,
    pub rank: u32,
    pub color: Rgb,
}

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub entries: Vec<StandingRow>,
}

/// League standings ordered by total points descending.
pub async fn standings(
    State(state): State<AppState>,
) -> Result<Json<StandingsResponse>, ApiError> {
    let snapshot = current_snapshot(&state).await?;

    let entries = rank_by_descending(&snapshot.standings, |s| s.total_points)
        .into_iter()
        .map(|s| StandingRow {
            color: state.palette.color_for(&s.manager_name),
            entry_id: s.entry_id,
            manager_name: s.manager_name,
            total_points: s.total_points,
            rank: s.rank,
        })
        .collect();

    Ok(Json(StandingsResponse { entries }))
}

// ── Margins ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MarginRow {
    pub entry_id: u32,
    pub manager_name: String,
    pub total_points: u32,
    pub rank: u32,
    pub margin: u32,
    pub color: Rgb,
}

#[derive(Debug, Serialize)]
pub struct MarginsResponse {
    pub entries: Vec<MarginRow>,
}

/// Point margin over the next place down, rank order.
pub async fn margins(State(state): State<AppState>) -> Result<Json<MarginsResponse>, ApiError> {
    let snapshot = current_snapshot(&state).await?;

    let entries = compute_margins(&snapshot.standings)
        .into_iter()
        .map(|m| MarginRow {
            color: state.palette.color_for(&m.manager_name),
            entry_id: m.entry_id,
            manager_name: m.manager_name,
            total_points: m.total_points,
            rank: m.rank,
            margin: m.margin,
        })
        .collect();

    Ok(Json(MarginsResponse { entries }))
}

// ── Momentum and bench points ───────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RankedRow {
    pub entry_id: u32,
    pub manager_name: String,
    pub points: u32,
    pub color: Rgb,
}

#[derive(Debug, Serialize)]
pub struct RankedResponse {
    pub entries: Vec<RankedRow>,
}

/// Form guide: points over the trailing four gameweeks, descending.
pub async fn momentum(State(state): State<AppState>) -> Result<Json<RankedResponse>, ApiError> {
    let snapshot = current_snapshot(&state).await?;

    let entries = rank_by_descending(&snapshot.momentum, |m| m.total_points_last_4_gw)
        .into_iter()
        .map(|m| RankedRow {
            color: state.palette.color_for(&m.manager_name),
            entry_id: m.entry_id,
            manager_name: m.manager_name,
            points: m.total_points_last_4_gw,
        })
        .collect();

    Ok(Json(RankedResponse { entries }))
}

/// Points left on the bench, descending.
pub async fn bench_points(
    State(state): State<AppState>,
) -> Result<Json<RankedResponse>, ApiError> {
    let snapshot = current_snapshot(&state).await?;

    let entries = rank_by_descending(&snapshot.bench_points, |b| b.bench_points)
        .into_iter()
        .map(|b| RankedRow {
            color: state.palette.color_for(&b.manager_name),
            entry_id: b.entry_id,
            manager_name: b.manager_name,
            points: b.bench_points,
        })
        .collect();

    Ok(Json(RankedResponse { entries }))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::config::AppConfig;
    use crate::models::{BenchPointsEntry, LeagueSnapshot, MomentumEntry, Standing};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::util::ServiceExt;

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    async fn seeded_state(snapshot: LeagueSnapshot) -> AppState {
        let state = AppState::new(AppConfig::default()).unwrap();
        state.store_snapshot(snapshot).await;
        state
    }

    #[tokio::test]
    async fn test_standings_sorted_and_colored() {
        let mut snapshot = LeagueSnapshot::empty();
        snapshot.standings = vec![
            Standing::new(2, "Diego FC", 640, 2),
            Standing::new(1, "Wirtzuose", 700, 1),
        ];

        let app = build_router(seeded_state(snapshot).await);
        let (status, json) = get_json(app, "/api/charts/standings").await;

        assert_eq!(status, StatusCode::OK);
        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries[0]["manager_name"], "Wirtzuose");
        assert_eq!(entries[0]["color"], "#F1C40F");
        assert_eq!(entries[1]["manager_name"], "Diego FC");
    }

    #[tokio::test]
    async fn test_standings_unknown_team_gets_fallback_color() {
        let mut snapshot = LeagueSnapshot::empty();
        snapshot.standings = vec![Standing::new(9, "Newcomers FC", 100, 1)];

        let app = build_router(seeded_state(snapshot).await);
        let (_, json) = get_json(app, "/api/charts/standings").await;

        assert_eq!(json["entries"][0]["color"], "#3B82F6");
    }

    #[tokio::test]
    async fn test_margins() {
        let mut snapshot = LeagueSnapshot::empty();
        snapshot.standings = vec![
            Standing::new(1, "Wirtzuose", 700, 1),
            Standing::new(2, "Diego FC", 640, 2),
            Standing::new(3, "Guinness FC", 610, 3),
        ];

        let app = build_router(seeded_state(snapshot).await);
        let (status, json) = get_json(app, "/api/charts/margins").await;

        assert_eq!(status, StatusCode::OK);
        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries[0]["margin"], 60);
        assert_eq!(entries[1]["margin"], 30);
        assert_eq!(entries[2]["margin"], 0);
    }

    #[tokio::test]
    async fn test_momentum_descending() {
        let mut snapshot = LeagueSnapshot::empty();
        snapshot.momentum = vec![
            MomentumEntry::new(1, "A", 120),
            MomentumEntry::new(2, "B", 180),
        ];

        let app = build_router(seeded_state(snapshot).await);
        let (status, json) = get_json(app, "/api/charts/momentum").await;

        assert_eq!(status, StatusCode::OK);
        let entries = json["entries"].as_array().unwrap();
        assert_eq!(entries[0]["manager_name"], "B");
        assert_eq!(entries[0]["points"], 180);
    }

    #[tokio::test]
    async fn test_bench_points_descending() {
        let mut snapshot = LeagueSnapshot::empty();
        snapshot.bench_points = vec![
            BenchPointsEntry::new(1, "A", 40),
            BenchPointsEntry::new(2, "B", 90),
        ];

        let app = build_router(seeded_state(snapshot).await);
        let (status, json) = get_json(app, "/api/charts/bench-points").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["entries"][0]["manager_name"], "B");
    }

    #[tokio::test]
    async fn test_empty_snapshot_returns_empty_entries() {
        let app = build_router(seeded_state(LeagueSnapshot::empty()).await);
        let (status, json) = get_json(app, "/api/charts/standings").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["entries"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unseeded_state_with_unreachable_upstream_is_bad_gateway() {
        let mut config = AppConfig::default();
        config.upstream.base_url = "http://127.0.0.1:1/".to_string();

        let app = build_router(AppState::new(config).unwrap());
        let (status, _) = get_json(app, "/api/charts/standings").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
