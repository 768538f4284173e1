use sqlx::PgPool;
use storage::{
    dto::{event::NewEvent, filter::EventFilter},
    error::Result,
    models::Event,
    repository::{event::EventRepository, result::ResultRepository},
    services::event_filter,
};

/// List all events in schedule order
pub async fn list_events(pool: &PgPool) -> Result<Vec<Event>> {
    let repo = EventRepository::new(pool);
    repo.list().await
}

/// Events without any result yet, narrowed by `filter`
pub async fn list_upcoming_events(pool: &PgPool, filter: &EventFilter) -> Result<Vec<Event>> {
    let events = EventRepository::new(pool).list().await?;
    let results = ResultRepository::new(pool).list().await?;

    Ok(event_filter::upcoming_events(&events, &results, filter))
}

/// Schedule a new event
pub async fn create_event(pool: &PgPool, request: &NewEvent) -> Result<Event> {
    let repo = EventRepository::new(pool);
    let event = repo.create(request).await?;
    tracing::info!("Scheduled {} event {}", event.category, event.name);
    Ok(event)
}
