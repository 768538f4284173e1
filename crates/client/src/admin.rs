use std::sync::Arc;

use storage::{
    dto::{event::NewEvent, group::NewGroup, result::NewResult},
    models::{Event, EventResult, Group},
};
use validator::Validate;

use crate::{ClientError, Result, backend::Backend, store::Store};

/// Write side of the admin view. Every insert goes straight to the backend;
/// the store only sees the new rows once it refetches.
#[derive(Clone)]
pub struct AdminWriter {
    backend: Arc<dyn Backend>,
    store: Store,
}

impl AdminWriter {
    pub fn new(backend: Arc<dyn Backend>, store: Store) -> Self {
        Self { backend, store }
    }

    /// Inserts the event and refreshes the events collection.
    pub async fn add_event(&self, event: NewEvent) -> Result<Event> {
        event
            .validate()
            .inspect_err(|e| tracing::error!("Error adding event: {}", e))?;

        let created = self
            .backend
            .insert_event(&event)
            .await
            .inspect_err(|e| tracing::error!("Error adding event: {}", e))?;

        tracing::info!("Event '{}' added", created.name);
        self.store.fetch_events().await;
        Ok(created)
    }

    /// Inserts the group and refreshes the groups collection.
    pub async fn add_group(&self, group: NewGroup) -> Result<Group> {
        group
            .validate()
            .inspect_err(|e| tracing::error!("Error adding group: {}", e))?;

        let created = self
            .backend
            .insert_group(&group)
            .await
            .inspect_err(|e| tracing::error!("Error adding group: {}", e))?;

        tracing::info!("Group '{}' added", created.name);
        self.store.fetch_groups().await;
        Ok(created)
    }

    /// Scores the placement against the event's category and inserts it.
    ///
    /// Returns `Ok(None)` without contacting the backend when the event is not
    /// in the store. The group total is maintained by the backend, so nothing
    /// is refetched here.
    pub async fn add_result(&self, result: NewResult) -> Result<Option<EventResult>> {
        result
            .validate()
            .inspect_err(|e| tracing::error!("Error adding result: {}", e))?;

        let Some(event) = self.store.find_event(result.event_id) else {
            tracing::warn!("Ignoring result for unknown event {}", result.event_id);
            return Ok(None);
        };

        let scored = result
            .score(&event)
            .map_err(|msg| ClientError::ValidationError(msg.to_string()))
            .inspect_err(|e| tracing::error!("Error adding result: {}", e))?;

        let created = self
            .backend
            .insert_result(&scored)
            .await
            .inspect_err(|e| tracing::error!("Error adding result: {}", e))?;

        tracing::info!(
            "Recorded position {} in '{}' for {} points",
            created.position,
            event.name,
            created.points
        );
        Ok(Some(created))
    }
}
