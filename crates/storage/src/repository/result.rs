use sqlx::PgPool;

use crate::dto::result::ScoredResult;
use crate::error::{Result, StorageError};
use crate::models::EventResult;

/// Repository for Result database operations
pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all results, unordered
    pub async fn list(&self) -> Result<Vec<EventResult>> {
        let results = sqlx::query_as::<_, EventResult>(
            r#"
            SELECT result_id, event_id, group_id, position, points, participant_name, created_at
            FROM results
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    /// Record a placement. The group's total is bumped by the database trigger.
    pub async fn create(&self, req: &ScoredResult) -> Result<EventResult> {
        let result = sqlx::query_as::<_, EventResult>(
            r#"
            INSERT INTO results (event_id, group_id, position, points, participant_name)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING result_id, event_id, group_id, position, points, participant_name, created_at
            "#,
        )
        .bind(req.event_id)
        .bind(req.group_id)
        .bind(req.position)
        .bind(req.points)
        .bind(req.participant_name.as_deref())
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).with_constraint_message("Unknown event or group"))?;

        Ok(result)
    }
}
