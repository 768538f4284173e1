use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{event::NewEvent, filter::EventFilter},
    models::Event,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all events ordered by start time", body = Vec<Event>)
    ),
    tag = "events"
)]
pub async fn list_events(State(db): State<Database>) -> Result<Json<Vec<Event>>, WebError> {
    let events = services::list_events(db.pool()).await?;

    Ok(Json(events))
}

#[utoipa::path(
    get,
    path = "/api/events/upcoming",
    params(EventFilter),
    responses(
        (status = 200, description = "Events that have no published results", body = Vec<Event>)
    ),
    tag = "events"
)]
pub async fn list_upcoming_events(
    State(db): State<Database>,
    Query(filter): Query<EventFilter>,
) -> Result<Json<Vec<Event>>, WebError> {
    let events = services::list_upcoming_events(db.pool(), &filter).await?;

    Ok(Json(events))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = NewEvent,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event created successfully", body = Event),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Json(req): Json<NewEvent>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}
