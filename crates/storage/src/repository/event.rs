use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::event::NewEvent;
use crate::error::{Result, StorageError};
use crate::models::Event;

/// Repository for Event database operations
pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all events in schedule order
    pub async fn list(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, name, category, max_winners, stage, start_time, created_at
            FROM events
            ORDER BY start_time ASC NULLS LAST, created_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT event_id, name, category, max_winners, stage, start_time, created_at
            FROM events
            WHERE event_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(event)
    }

    /// Schedule a new event
    pub async fn create(&self, req: &NewEvent) -> Result<Event> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, category, max_winners, stage, start_time)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING event_id, name, category, max_winners, stage, start_time, created_at
            "#,
        )
        .bind(req.name.trim())
        .bind(req.category)
        .bind(req.max_winners)
        .bind(req.stage.trim())
        .bind(req.start_time)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).with_constraint_message("Invalid event"))?;

        Ok(event)
    }
}
