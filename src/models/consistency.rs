//! Weekly scoring records, one row per (manager, gameweek).

use serde::{Deserialize, Serialize};

/// Points a manager scored in a single gameweek.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyEntry {
    /// Gameweek number (1-based)
    pub gameweek: u32,

    pub entry_id: u32,

    pub manager_name: String,

    /// Points scored in this gameweek only
    pub weekly_points: u32,
}

impl ConsistencyEntry {
    pub fn new(gameweek: u32, entry_id: u32, manager_name: &str, weekly_points: u32) -> Self {
        Self {
            gameweek,
            entry_id,
            manager_name: manager_name.to_string(),
            weekly_points,
        }
    }
}
