//! League table records: standings, momentum, bench points.

use serde::{Deserialize, Serialize};

/// A manager's row in the league standings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standing {
    /// Upstream entry (team) identifier
    pub entry_id: u32,

    /// Manager display name
    pub manager_name: String,

    /// Season total points
    pub total_points: u32,

    /// League rank (1 = leader, assigned upstream)
    pub rank: u32,
}

impl Standing {
    /// Create a new standing row.
    pub fn new(entry_id: u32, manager_name: &str, total_points: u32, rank: u32) -> Self {
        Self {
            entry_id,
            manager_name: manager_name.to_string(),
            total_points,
            rank,
        }
    }
}

/// Points scored over the trailing four gameweeks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumEntry {
    pub entry_id: u32,
    pub manager_name: String,
    pub total_points_last_4_gw: u32,
}

impl MomentumEntry {
    pub fn new(entry_id: u32, manager_name: &str, total_points_last_4_gw: u32) -> Self {
        Self {
            entry_id,
            manager_name: manager_name.to_string(),
            total_points_last_4_gw,
        }
    }
}

/// Points left on a manager's bench across the season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchPointsEntry {
    pub entry_id: u32,
    pub manager_name: String,
    pub bench_points: u32,
}

impl BenchPointsEntry {
    pub fn new(entry_id: u32, manager_name: &str, bench_points: u32) -> Self {
        Self {
            entry_id,
            manager_name: manager_name.to_string(),
            bench_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_serialization() {
        let s = Standing::new(7, "Guinness FC", 812, 1);
        let json = serde_json::to_string(&s).unwrap();
        let parsed: Standing = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.entry_id, 7);
        assert_eq!(parsed.manager_name, "Guinness FC");
        assert_eq!(parsed.total_points, 812);
        assert_eq!(parsed.rank, 1);
    }

    #[test]
    fn test_standing_deserializes_upstream_shape() {
        // Field names as served by the aggregation backend
        let json = r#"{"entry_id":3,"manager_name":"Diego FC","total_points":640,"rank":4}"#;
        let s: Standing = serde_json::from_str(json).unwrap();
        assert_eq!(s.rank, 4);
    }

    #[test]
    fn test_momentum_roundtrip() {
        let m = MomentumEntry::new(2, "Wirtzuose", 187);
        let json = serde_json::to_string(&m).unwrap();
        let parsed: MomentumEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.total_points_last_4_gw, 187);
    }

    #[test]
    fn test_bench_points_roundtrip() {
        let b = BenchPointsEntry::new(5, "The Habibi Army", 96);
        let json = serde_json::to_string(&b).unwrap();
        let parsed: BenchPointsEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.bench_points, 96);
    }
}
