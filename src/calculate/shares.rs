//! Player contribution share breakdowns.

use crate::models::{PlayerContribution, ShareBucket, TeamBreakdown};

use super::{manager_order, share_percentage};

/// Default number of players shown individually before collapsing the
/// rest into "Others".
pub const DEFAULT_TOP_PLAYERS: usize = 5;

/// Label for the collapsed remainder bucket.
pub const OTHERS_LABEL: &str = "Others";

/// Break each manager's squad into top-`top_n` players plus an "Others"
/// remainder, with each bucket's share of the full team total.
///
/// Percentages are always computed against the sum of every player's
/// points, never just the kept buckets, so a manager's buckets sum to
/// 100% (or all sit at 0% when the team total is 0). Buckets are ordered
/// by points descending with "Others" last; managers are ordered by team
/// total descending.
pub fn compute_player_share_breakdown(
    contributions: &[PlayerContribution],
    top_n: usize,
) -> Vec<TeamBreakdown> {
    let managers = manager_order(contributions, |c| c.manager_name.as_str());

    let mut breakdowns: Vec<TeamBreakdown> = managers
        .into_iter()
        .map(|manager| {
            let mut players: Vec<&PlayerContribution> = contributions
                .iter()
                .filter(|c| c.manager_name == manager)
                .collect();
            players.sort_by(|a, b| b.total_points.cmp(&a.total_points));

            let team_total: u32 = players.iter().map(|p| p.total_points).sum();

            let cutoff = players.len().min(top_n);
            let (top, rest) = players.split_at(cutoff);

            let mut buckets: Vec<ShareBucket> = top
                .iter()
                .map(|player| ShareBucket {
                    label: player.web_name.clone(),
                    points: player.total_points,
                    percentage: share_percentage(player.total_points, team_total),
                })
                .collect();

            if !rest.is_empty() {
                let others: u32 = rest.iter().map(|p| p.total_points).sum();
                buckets.push(ShareBucket {
                    label: OTHERS_LABEL.to_string(),
                    points: others,
                    percentage: share_percentage(others, team_total),
                });
            }

            TeamBreakdown {
                manager_name: manager,
                team_total,
                buckets,
            }
        })
        .collect();

    breakdowns.sort_by(|a, b| b.team_total.cmp(&a.team_total));
    breakdowns
}
