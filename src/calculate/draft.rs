//! Draft pick bucket shares.

use crate::models::{BucketShare, DraftBreakdown, DraftPickAnalysis};

use super::{manager_order, share_percentage};

/// Pick numbers at or below this count as an early pick.
pub const FIRST_PICKS_CUTOFF: u32 = 3;

/// Which acquisition bucket a pick row lands in.
///
/// The upstream "Transfer" label takes precedence over pick-number
/// classification, so every row lands in exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickClass {
    FirstThree,
    OtherPick,
    Transfer,
}

impl PickClass {
    pub fn classify(pick: &DraftPickAnalysis) -> Self {
        if pick.is_transfer() {
            PickClass::Transfer
        } else if pick.pick <= FIRST_PICKS_CUTOFF {
            PickClass::FirstThree
        } else {
            PickClass::OtherPick
        }
    }
}

/// Sum each manager's pick value into the three acquisition buckets and
/// express each as a share of the manager's total.
///
/// Raw sums ride along with the percentages; managers are ordered by
/// total points descending.
pub fn compute_draft_bucket_shares(picks: &[DraftPickAnalysis]) -> Vec<DraftBreakdown> {
    let managers = manager_order(picks, |p| p.manager_name.as_str());

    let mut breakdowns: Vec<DraftBreakdown> = managers
        .into_iter()
        .map(|manager| {
            let mut first_three = 0u32;
            let mut other_picks = 0u32;
            let mut transfers = 0u32;

            for pick in picks.iter().filter(|p| p.manager_name == manager) {
                match PickClass::classify(pick) {
                    PickClass::FirstThree => first_three += pick.total_points_contributed,
                    PickClass::OtherPick => other_picks += pick.total_points_contributed,
                    PickClass::Transfer => transfers += pick.total_points_contributed,
                }
            }

            let total = first_three + other_picks + transfers;

            DraftBreakdown {
                manager_name: manager,
                total_points: total,
                first_three: BucketShare {
                    points: first_three,
                    percentage: share_percentage(first_three, total),
                },
                other_picks: BucketShare {
                    points: other_picks,
                    percentage: share_percentage(other_picks, total),
                },
                transfers: BucketShare {
                    points: transfers,
                    percentage: share_percentage(transfers, total),
                },
            }
        })
        .collect();

    breakdowns.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    breakdowns
}
