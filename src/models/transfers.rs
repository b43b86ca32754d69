//! Top-performing transfer records.

use serde::{Deserialize, Serialize};

/// A transferred-in player and the points they have returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTransfersEntry {
    pub player_name: String,
    pub manager_name: String,
    pub total_points: u32,
}

impl TopTransfersEntry {
    pub fn new(player_name: &str, manager_name: &str, total_points: u32) -> Self {
        Self {
            player_name: player_name.to_string(),
            manager_name: manager_name.to_string(),
            total_points,
        }
    }
}
