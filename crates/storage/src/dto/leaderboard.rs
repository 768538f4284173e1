use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{EventCategory, Group};

/// Presentational badge for the top three places of the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
}

impl RankBadge {
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub badge: Option<RankBadge>,
    pub group: Group,
}

/// One row of the marking criteria reference page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CriteriaRow {
    pub category: EventCategory,
    pub first: i32,
    pub second: i32,
    pub third: i32,
}
