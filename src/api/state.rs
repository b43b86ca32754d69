use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::{AppConfig, ConfigError};
use crate::fetch::LeagueClient;
use crate::models::LeagueSnapshot;
use crate::palette::Palette;

/// Shared application state.
///
/// The snapshot starts empty and is filled lazily on first use (or via
/// the refresh endpoint); nothing is persisted across restarts.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub client: Arc<LeagueClient>,
    pub palette: Arc<Palette>,
    pub snapshot: Arc<RwLock<Option<LeagueSnapshot>>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let client = LeagueClient::new(config.upstream.client_config()?)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        let palette = config.palette.build()?;

        Ok(Self {
            config: Arc::new(config),
            client: Arc::new(client),
            palette: Arc::new(palette),
            snapshot: Arc::new(RwLock::new(None)),
        })
    }

    /// Replace the held snapshot.
    pub async fn store_snapshot(&self, snapshot: LeagueSnapshot) {
        *self.snapshot.write().await = Some(snapshot);
    }
}
