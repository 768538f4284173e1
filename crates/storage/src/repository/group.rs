use sqlx::PgPool;

use crate::dto::group::NewGroup;
use crate::error::{Result, StorageError};
use crate::models::Group;

/// Repository for Group database operations
pub struct GroupRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GroupRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all groups, unordered
    pub async fn list(&self) -> Result<Vec<Group>> {
        let groups = sqlx::query_as::<_, Group>(
            r#"
            SELECT group_id, name, team_code, total_points, created_at
            FROM groups
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(groups)
    }

    /// Register a new group; its total starts at zero
    pub async fn create(&self, req: &NewGroup) -> Result<Group> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            INSERT INTO groups (name, team_code)
            VALUES ($1, $2)
            RETURNING group_id, name, team_code, total_points, created_at
            "#,
        )
        .bind(req.name.trim())
        .bind(req.team_code.trim())
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).with_constraint_message("Team code already exists"))?;

        Ok(group)
    }
}
