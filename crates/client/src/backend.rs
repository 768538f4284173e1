use storage::{
    dto::{event::NewEvent, group::NewGroup, result::ScoredResult},
    models::{Event, EventResult, Group},
};

use crate::Result;

/// Row-level access to the hosted festival tables
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn list_groups(&self) -> Result<Vec<Group>>;

    /// All events, ascending by start time
    async fn list_events(&self) -> Result<Vec<Event>>;

    async fn list_results(&self) -> Result<Vec<EventResult>>;

    async fn insert_event(&self, event: &NewEvent) -> Result<Event>;

    async fn insert_group(&self, group: &NewGroup) -> Result<Group>;

    async fn insert_result(&self, result: &ScoredResult) -> Result<EventResult>;
}
