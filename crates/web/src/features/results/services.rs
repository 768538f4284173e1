use sqlx::PgPool;
use storage::{
    dto::{
        filter::{EventResults, ResultsFilter},
        result::ScoredResult,
    },
    error::Result,
    models::EventResult,
    repository::{event::EventRepository, group::GroupRepository, result::ResultRepository},
    services::event_filter,
};

use crate::error::{WebError, WebResult};

/// List all results
pub async fn list_results(pool: &PgPool) -> Result<Vec<EventResult>> {
    let repo = ResultRepository::new(pool);
    repo.list().await
}

/// Published events with their placements joined to groups
pub async fn list_published_results(
    pool: &PgPool,
    filter: &ResultsFilter,
) -> Result<Vec<EventResults>> {
    let events = EventRepository::new(pool).list().await?;
    let results = ResultRepository::new(pool).list().await?;
    let groups = GroupRepository::new(pool).list().await?;

    Ok(event_filter::published_results(&events, &results, &groups, filter))
}

/// Record a placement after checking its points against the points table
pub async fn create_result(pool: &PgPool, request: &ScoredResult) -> WebResult<EventResult> {
    let event = EventRepository::new(pool).find_by_id(request.event_id).await?;

    request
        .check_against(&event)
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let result = ResultRepository::new(pool).create(request).await?;
    tracing::info!(
        "Recorded position {} in {} for group {} ({} points)",
        result.position,
        event.name,
        result.group_id,
        result.points
    );

    Ok(result)
}
