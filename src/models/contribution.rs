//! Per-player contribution records, one row per (manager, player).

use serde::{Deserialize, Serialize};

/// Total points a single player has contributed to a manager's team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerContribution {
    pub entry_id: u32,

    pub manager_name: String,

    /// Player display name (e.g. "Haaland")
    pub web_name: String,

    /// Points contributed while in this manager's squad
    pub total_points: u32,
}

impl PlayerContribution {
    pub fn new(entry_id: u32, manager_name: &str, web_name: &str, total_points: u32) -> Self {
        Self {
            entry_id,
            manager_name: manager_name.to_string(),
            web_name: web_name.to_string(),
            total_points,
        }
    }
}
