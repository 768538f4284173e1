use sqlx::PgPool;
use storage::{
    dto::leaderboard::LeaderboardEntry, error::Result, repository::group::GroupRepository,
    services::leaderboard::rank_groups,
};

/// Groups ranked by total points
pub async fn get_leaderboard(pool: &PgPool) -> Result<Vec<LeaderboardEntry>> {
    let groups = GroupRepository::new(pool).list().await?;
    Ok(rank_groups(&groups))
}
