use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::routes::current_snapshot;
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{
    compute_cumulative_delta_from_last, compute_draft_bucket_shares,
    compute_player_share_breakdown, manager_order, rank_top_transfers, DEFAULT_TOP_PLAYERS,
    DEFAULT_TOP_TRANSFERS_LIMIT,
};
use crate::models::{DraftBreakdown, GameweekDeltas, TopTransfersEntry};
use crate::palette::Rgb;

// ── Delta from last place ───────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SeriesInfo {
    pub manager_name: String,
    pub color: Rgb,
}

#[derive(Debug, Serialize)]
pub struct DeltaResponse {
    pub gameweeks: Vec<GameweekDeltas>,
    pub managers: Vec<SeriesInfo>,
}

/// Cumulative points above last place, per gameweek per manager.
pub async fn delta_from_last(
    State(state): State<AppState>,
) -> Result<Json<DeltaResponse>, ApiError> {
    let snapshot = current_snapshot(&state).await?;

    let gameweeks = compute_cumulative_delta_from_last(&snapshot.consistency);
    let managers = manager_order(&snapshot.consistency, |e| e.manager_name.as_str())
        .into_iter()
        .map(|manager_name| SeriesInfo {
            color: state.palette.color_for(&manager_name),
            manager_name,
        })
        .collect();

    Ok(Json(DeltaResponse {
        gameweeks,
        managers,
    }))
}

// ── Player contributions ────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ContributionsParams {
    /// Restrict to a single manager
    pub manager: Option<String>,

    /// Players kept before the "Others" collapse (default 5)
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ShareBucketRow {
    pub label: String,
    pub points: u32,
    pub percentage: f64,
    pub color: Rgb,
}

#[derive(Debug, Serialize)]
pub struct TeamBreakdownRow {
    pub manager_name: String,
    pub team_total: u32,
    pub buckets: Vec<ShareBucketRow>,
}

#[derive(Debug, Serialize)]
pub struct ContributionsResponse {
    pub teams: Vec<TeamBreakdownRow>,
}

/// Top players plus "Others" as shares of each team's total, with a
/// same-hue shade ramp per team.
pub async fn contributions(
    State(state): State<AppState>,
    Query(params): Query<ContributionsParams>,
) -> Result<Json<ContributionsResponse>, ApiError> {
    let snapshot = current_snapshot(&state).await?;
    let top_n = params.top_n.unwrap_or(DEFAULT_TOP_PLAYERS);

    let contributions: Vec<_> = match params.manager.as_deref() {
        Some(manager) => snapshot
            .contributions
            .iter()
            .filter(|c| c.manager_name == manager)
            .cloned()
            .collect(),
        None => snapshot.contributions,
    };

    let teams = compute_player_share_breakdown(&contributions, top_n)
        .into_iter()
        .map(|team| {
            let shades = state.palette.shades_for(&team.manager_name, team.buckets.len());
            let buckets = team
                .buckets
                .into_iter()
                .zip(shades)
                .map(|(bucket, color)| ShareBucketRow {
                    label: bucket.label,
                    points: bucket.points,
                    percentage: bucket.percentage,
                    color,
                })
                .collect();

            TeamBreakdownRow {
                manager_name: team.manager_name,
                team_total: team.team_total,
                buckets,
            }
        })
        .collect();

    Ok(Json(ContributionsResponse { teams }))
}

// ── Draft buckets ───────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub managers: Vec<DraftBreakdown>,
}

/// Points from early picks, later picks and transfers per manager.
pub async fn draft_buckets(
    State(state): State<AppState>,
) -> Result<Json<DraftResponse>, ApiError> {
    let snapshot = current_snapshot(&state).await?;

    Ok(Json(DraftResponse {
        managers: compute_draft_bucket_shares(&snapshot.draft_analysis),
    }))
}

// ── Top transfers ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TransfersParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct TransfersResponse {
    pub entries: Vec<TopTransfersEntry>,
}

/// Best-performing transfer signings, descending.
pub async fn top_transfers(
    State(state): State<AppState>,
    Query(params): Query<TransfersParams>,
) -> Result<Json<TransfersResponse>, ApiError> {
    let snapshot = current_snapshot(&state).await?;
    let limit = params.limit.unwrap_or(DEFAULT_TOP_TRANSFERS_LIMIT);

    Ok(Json(TransfersResponse {
        entries: rank_top_transfers(&snapshot.top_transfers, limit),
    }))
}
