//! Typed client for the upstream aggregation API.
//!
//! The upstream backend serves seven read-only JSON resources, each a
//! full current snapshot with no pagination. One getter per resource,
//! plus a fan-out that fetches all seven concurrently and fails on the
//! first error. Non-success responses are hard failures; there is no
//! retry policy.

use std::time::Duration;

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::models::{
    BenchPointsEntry, ConsistencyEntry, DraftPickAnalysis, LeagueSnapshot, MomentumEntry,
    PlayerContribution, Standing, TopTransfersEntry,
};

/// Where the aggregation backend listens by default.
pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8000";

/// Errors that can occur while talking to the upstream.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP {status} fetching {resource}: {message}")]
    HttpStatus {
        resource: String,
        status: u16,
        message: String,
    },
}

/// Configuration for the upstream client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the aggregation backend
    pub base_url: Url,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
            user_agent: format!("draft-pulse/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// HTTP client for the seven league resources.
pub struct LeagueClient {
    client: Client,
    config: ClientConfig,
}

impl LeagueClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("draft-pulse")),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Resolve a resource path against the base URL.
    fn endpoint(&self, resource: &str) -> Result<Url, FetchError> {
        self.config
            .base_url
            .join(resource)
            .map_err(|e| FetchError::InvalidUrl(format!("{resource}: {e}")))
    }

    /// GET a resource and decode its JSON array body.
    async fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>, FetchError> {
        let url = self.endpoint(resource)?;
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                resource: resource.to_string(),
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        Ok(response.json().await?)
    }

    pub async fn standings(&self) -> Result<Vec<Standing>, FetchError> {
        self.get_json("standings").await
    }

    pub async fn momentum(&self) -> Result<Vec<MomentumEntry>, FetchError> {
        self.get_json("momentum").await
    }

    pub async fn bench_points(&self) -> Result<Vec<BenchPointsEntry>, FetchError> {
        self.get_json("bench-points").await
    }

    pub async fn consistency(&self) -> Result<Vec<ConsistencyEntry>, FetchError> {
        self.get_json("consistency").await
    }

    pub async fn contributions(&self) -> Result<Vec<PlayerContribution>, FetchError> {
        self.get_json("contributions").await
    }

    pub async fn draft_analysis(&self) -> Result<Vec<DraftPickAnalysis>, FetchError> {
        self.get_json("draft-analysis").await
    }

    pub async fn top_transfers(&self) -> Result<Vec<TopTransfersEntry>, FetchError> {
        self.get_json("top-transfers").await
    }

    /// Fetch all seven resources concurrently.
    ///
    /// Waits for every request to complete or any to fail, surfacing the
    /// first failure. No partial snapshots are produced.
    pub async fn fetch_all(&self) -> Result<LeagueSnapshot, FetchError> {
        let (standings, momentum, bench_points, consistency, contributions, draft_analysis, top_transfers) =
            tokio::try_join!(
                self.standings(),
                self.momentum(),
                self.bench_points(),
                self.consistency(),
                self.contributions(),
                self.draft_analysis(),
                self.top_transfers(),
            )?;

        let snapshot = LeagueSnapshot {
            standings,
            momentum,
            bench_points,
            consistency,
            contributions,
            draft_analysis,
            top_transfers,
            fetched_at: Utc::now(),
        };

        info!(
            records = snapshot.record_count(),
            managers = snapshot.standings.len(),
            "Fetched league snapshot"
        );

        Ok(snapshot)
    }
}
