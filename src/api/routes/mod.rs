pub mod charts;
pub mod health;
pub mod league;
pub mod refresh;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::LeagueSnapshot;

/// Current snapshot, fetching from upstream on first use.
pub(crate) async fn current_snapshot(state: &AppState) -> Result<LeagueSnapshot, ApiError> {
    if let Some(snapshot) = state.snapshot.read().await.as_ref() {
        return Ok(snapshot.clone());
    }

    let snapshot = state.client.fetch_all().await?;
    state.store_snapshot(snapshot.clone()).await;
    Ok(snapshot)
}
