//! Derived series models: the chart-ready shapes the transforms produce.

use serde::{Deserialize, Serialize};

use super::Standing;

/// A standing annotated with its point margin over the next place down.
///
/// The last-placed entry carries a margin of 0 (there is nobody below it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingMargin {
    pub entry_id: u32,
    pub manager_name: String,
    pub total_points: u32,
    pub rank: u32,

    /// Points ahead of the next-lower-ranked manager
    pub margin: u32,
}

impl StandingMargin {
    /// Annotate a standing with its margin.
    pub fn from_standing(standing: &Standing, margin: u32) -> Self {
        Self {
            entry_id: standing.entry_id,
            manager_name: standing.manager_name.clone(),
            total_points: standing.total_points,
            rank: standing.rank,
            margin,
        }
    }
}

/// One manager's position within a single gameweek of the delta series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerDelta {
    pub manager_name: String,

    /// Cumulative points above the week's last-placed manager
    pub delta: u32,

    /// Raw points scored in this gameweek (carried for tooltips)
    pub weekly_points: u32,
}

/// All managers' deltas for one gameweek.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameweekDeltas {
    pub gameweek: u32,
    pub entries: Vec<ManagerDelta>,
}

impl GameweekDeltas {
    /// Look up a manager's delta in this gameweek.
    pub fn delta_for(&self, manager_name: &str) -> Option<&ManagerDelta> {
        self.entries.iter().find(|e| e.manager_name == manager_name)
    }
}

/// A share-of-total slice within a team breakdown: a named player or the
/// collapsed "Others" remainder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareBucket {
    /// Player display name, or "Others"
    pub label: String,

    pub points: u32,

    /// Share of the full team total, 0..=100
    pub percentage: f64,
}

/// Per-manager player contribution breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamBreakdown {
    pub manager_name: String,

    /// Sum of every player's points, not just the kept buckets
    pub team_total: u32,

    /// Top players descending, then "Others" last if present
    pub buckets: Vec<ShareBucket>,
}

/// A draft bucket's raw sum and share of the manager total.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BucketShare {
    pub points: u32,
    pub percentage: f64,
}

/// Per-manager draft pick value split across acquisition buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftBreakdown {
    pub manager_name: String,

    /// Total points across all three buckets
    pub total_points: u32,

    pub first_three: BucketShare,
    pub other_picks: BucketShare,
    pub transfers: BucketShare,
}

impl DraftBreakdown {
    /// Sum of the three bucket percentages (100 or 0, within tolerance).
    pub fn percentage_sum(&self) -> f64 {
        self.first_three.percentage + self.other_picks.percentage + self.transfers.percentage
    }
}
