//! A full point-in-time copy of the upstream aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    BenchPointsEntry, ConsistencyEntry, DraftPickAnalysis, MomentumEntry, PlayerContribution,
    Standing, TopTransfersEntry,
};

/// Everything the dashboard needs, fetched in one fan-out.
///
/// The upstream serves full current snapshots with no pagination or delta
/// semantics, so this is simply all seven resources side by side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub standings: Vec<Standing>,
    pub momentum: Vec<MomentumEntry>,
    pub bench_points: Vec<BenchPointsEntry>,
    pub consistency: Vec<ConsistencyEntry>,
    pub contributions: Vec<PlayerContribution>,
    pub draft_analysis: Vec<DraftPickAnalysis>,
    pub top_transfers: Vec<TopTransfersEntry>,

    /// When this snapshot was taken
    pub fetched_at: DateTime<Utc>,
}

impl LeagueSnapshot {
    /// An empty snapshot stamped now. Mostly useful in tests and as a
    /// placeholder before the first fetch succeeds.
    pub fn empty() -> Self {
        Self {
            standings: Vec::new(),
            momentum: Vec::new(),
            bench_points: Vec::new(),
            consistency: Vec::new(),
            contributions: Vec::new(),
            draft_analysis: Vec::new(),
            top_transfers: Vec::new(),
            fetched_at: Utc::now(),
        }
    }

    /// Total record count across all seven resources.
    pub fn record_count(&self) -> usize {
        self.standings.len()
            + self.momentum.len()
            + self.bench_points.len()
            + self.consistency.len()
            + self.contributions.len()
            + self.draft_analysis.len()
            + self.top_transfers.len()
    }
}
