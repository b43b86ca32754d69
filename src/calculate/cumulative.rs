//! Cumulative delta-from-last-place series.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::{ConsistencyEntry, GameweekDeltas, ManagerDelta};

use super::manager_order;

/// Build the "points ahead of last place" line series.
///
/// For each manager a running cumulative total is kept per gameweek; the
/// previous-week lookup treats a miss as 0, so a manager's first observed
/// week (or a week following a gap) starts the total fresh. For every
/// gameweek in the sorted union across managers, each manager's delta is
/// their cumulative total minus the week's minimum, with managers missing
/// that week counted as 0. At least one manager per week therefore sits
/// at delta 0.
///
/// Raw weekly points are carried through untouched for display.
pub fn compute_cumulative_delta_from_last(entries: &[ConsistencyEntry]) -> Vec<GameweekDeltas> {
    if entries.is_empty() {
        return Vec::new();
    }

    let managers = manager_order(entries, |e| e.manager_name.as_str());

    // (manager, gameweek) pairs are unique upstream, so plain inserts.
    let mut weekly: HashMap<&str, BTreeMap<u32, u32>> = HashMap::new();
    for entry in entries {
        weekly
            .entry(entry.manager_name.as_str())
            .or_default()
            .insert(entry.gameweek, entry.weekly_points);
    }

    let mut cumulative: HashMap<&str, BTreeMap<u32, u32>> = HashMap::new();
    for (manager, weeks) in &weekly {
        let mut totals = BTreeMap::new();
        for (&gameweek, &points) in weeks {
            let previous = gameweek
                .checked_sub(1)
                .and_then(|prev| totals.get(&prev))
                .copied()
                .unwrap_or(0);
            totals.insert(gameweek, previous + points);
        }
        cumulative.insert(*manager, totals);
    }

    let gameweeks: BTreeSet<u32> = entries.iter().map(|e| e.gameweek).collect();

    gameweeks
        .into_iter()
        .map(|gameweek| {
            let totals_at = |manager: &str| -> u32 {
                cumulative
                    .get(manager)
                    .and_then(|totals| totals.get(&gameweek))
                    .copied()
                    .unwrap_or(0)
            };

            let minimum = managers
                .iter()
                .map(|m| totals_at(m))
                .min()
                .unwrap_or(0);

            let deltas = managers
                .iter()
                .map(|manager| ManagerDelta {
                    manager_name: manager.clone(),
                    delta: totals_at(manager) - minimum,
                    weekly_points: weekly
                        .get(manager.as_str())
                        .and_then(|weeks| weeks.get(&gameweek))
                        .copied()
                        .unwrap_or(0),
                })
                .collect();

            GameweekDeltas {
                gameweek,
                entries: deltas,
            }
        })
        .collect()
}
