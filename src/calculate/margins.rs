//! Margin-to-next-place computation.

use crate::models::{Standing, StandingMargin};

/// Annotate standings with the point gap to the next place down.
///
/// Entries are ordered by rank ascending before differencing; tied ranks
/// keep their input order (stable sort). Every entry is retained: the
/// last-placed manager carries a margin of 0, and tied entries produce a
/// 0 margin mid-table.
pub fn compute_margins(standings: &[Standing]) -> Vec<StandingMargin> {
    let mut by_rank: Vec<&Standing> = standings.iter().collect();
    by_rank.sort_by_key(|s| s.rank);

    by_rank
        .iter()
        .enumerate()
        .map(|(i, standing)| {
            let margin = match by_rank.get(i + 1) {
                Some(next) => standing.total_points.saturating_sub(next.total_points),
                None => 0,
            };
            StandingMargin::from_standing(standing, margin)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_margins_basic() {
        let standings = vec![
            Standing::new(2, "Second", 90, 2),
            Standing::new(1, "First", 100, 1),
            Standing::new(3, "Third", 75, 3),
        ];

        let margins = compute_margins(&standings);
        let rows: Vec<(&str, u32)> = margins
            .iter()
            .map(|m| (m.manager_name.as_str(), m.margin))
            .collect();

        assert_eq!(rows, vec![("First", 10), ("Second", 15), ("Third", 0)]);
    }

    #[test]
    fn test_margins_reconstruct_points() {
        let standings = vec![
            Standing::new(1, "A", 120, 1),
            Standing::new(2, "B", 95, 2),
            Standing::new(3, "C", 60, 3),
        ];

        let margins = compute_margins(&standings);
        for (i, row) in margins.iter().enumerate() {
            // margin[i] + points[i+1] (or own points for last place) == points[i]
            let successor = margins.get(i + 1).map(|m| m.total_points);
            let reconstructed = row.margin + successor.unwrap_or(row.total_points);
            assert_eq!(reconstructed, row.total_points);
        }
    }

    #[test]
    fn test_margins_tied_ranks_keep_input_order() {
        let standings = vec![
            Standing::new(1, "Alice", 100, 1),
            Standing::new(2, "Bob", 90, 2),
            Standing::new(3, "Cara", 90, 2),
        ];

        let margins = compute_margins(&standings);
        let rows: Vec<(&str, u32)> = margins
            .iter()
            .map(|m| (m.manager_name.as_str(), m.margin))
            .collect();

        assert_eq!(rows, vec![("Alice", 10), ("Bob", 0), ("Cara", 0)]);
    }

    #[test]
    fn test_margins_single_entry() {
        let standings = vec![Standing::new(1, "Solo", 42, 1)];
        let margins = compute_margins(&standings);
        assert_eq!(margins.len(), 1);
        assert_eq!(margins[0].margin, 0);
    }

    #[test]
    fn test_margins_empty() {
        assert!(compute_margins(&[]).is_empty());
    }

    #[test]
    fn test_margins_all_non_negative() {
        let standings = vec![
            Standing::new(1, "A", 500, 1),
            Standing::new(2, "B", 500, 2),
            Standing::new(3, "C", 410, 3),
            Standing::new(4, "D", 0, 4),
        ];

        for row in compute_margins(&standings) {
            // u32 already, but the reconstruction property is the real check
            assert!(row.margin <= row.total_points);
        }
    }
}
