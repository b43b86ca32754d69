//! Draft pick performance records.

use serde::{Deserialize, Serialize};

/// Pick bucket label the upstream uses for in-season acquisitions.
pub const TRANSFER_BUCKET: &str = "Transfer";

/// How a single draft pick (or transfer) performed for a manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftPickAnalysis {
    pub manager_name: String,

    /// Pick number within the round (1-based)
    pub pick: u32,

    /// Draft round number
    pub round: u32,

    /// Upstream player element id
    pub element_id: u32,

    pub player_name: String,

    /// Points the player has contributed since being acquired
    pub total_points_contributed: u32,

    /// Acquisition label assigned upstream ("Transfer" or a draft bucket)
    pub pick_bucket: String,
}

impl DraftPickAnalysis {
    pub fn new(
        manager_name: &str,
        pick: u32,
        round: u32,
        element_id: u32,
        player_name: &str,
        total_points_contributed: u32,
        pick_bucket: &str,
    ) -> Self {
        Self {
            manager_name: manager_name.to_string(),
            pick,
            round,
            element_id,
            player_name: player_name.to_string(),
            total_points_contributed,
            pick_bucket: pick_bucket.to_string(),
        }
    }

    /// Whether this row was acquired via an in-season transfer.
    pub fn is_transfer(&self) -> bool {
        self.pick_bucket == TRANSFER_BUCKET
    }
}
