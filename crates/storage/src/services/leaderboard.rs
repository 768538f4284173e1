use crate::dto::leaderboard::{LeaderboardEntry, RankBadge};
use crate::models::Group;

/// Orders groups by total points, highest first.
///
/// The sort is stable: groups with equal totals keep their input order.
pub fn rank_groups(groups: &[Group]) -> Vec<LeaderboardEntry> {
    let mut sorted: Vec<&Group> = groups.iter().collect();
    sorted.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, group)| LeaderboardEntry {
            rank: index + 1,
            badge: RankBadge::for_rank(index + 1),
            group: group.clone(),
        })
        .collect()
}
