//! Generic descending rankings.

use crate::models::TopTransfersEntry;

/// How many transfer rows the dashboard shows by default.
pub const DEFAULT_TOP_TRANSFERS_LIMIT: usize = 20;

/// Order records by `key` descending.
///
/// The sort is stable: records with equal keys keep their original
/// relative order. Standings, momentum, bench-points and top-transfers
/// views all rank through this.
pub fn rank_by_descending<T, K, F>(records: &[T], key: F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| key(b).cmp(&key(a)));
    ranked
}

/// Top transfer performers, descending by points, truncated to `limit`.
pub fn rank_top_transfers(entries: &[TopTransfersEntry], limit: usize) -> Vec<TopTransfersEntry> {
    let mut ranked = rank_by_descending(entries, |e| e.total_points);
    ranked.truncate(limit);
    ranked
}
