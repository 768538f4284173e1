use sqlx::PgPool;
use storage::{
    dto::group::NewGroup, error::Result, models::Group, repository::group::GroupRepository,
};

/// List all groups
pub async fn list_groups(pool: &PgPool) -> Result<Vec<Group>> {
    let repo = GroupRepository::new(pool);
    repo.list().await
}

/// Register a new group
pub async fn create_group(pool: &PgPool, request: &NewGroup) -> Result<Group> {
    let repo = GroupRepository::new(pool);
    let group = repo.create(request).await?;
    tracing::info!("Registered group {} ({})", group.name, group.team_code);
    Ok(group)
}
