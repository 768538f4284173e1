use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        filter::{EventResults, ResultsFilter},
        result::ScoredResult,
    },
    models::EventResult,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/results",
    responses(
        (status = 200, description = "List all results", body = Vec<EventResult>)
    ),
    tag = "results"
)]
pub async fn list_results(State(db): State<Database>) -> Result<Json<Vec<EventResult>>, WebError> {
    let results = services::list_results(db.pool()).await?;

    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/api/results/published",
    params(ResultsFilter),
    responses(
        (status = 200, description = "Published events with placements sorted by position", body = Vec<EventResults>)
    ),
    tag = "results"
)]
pub async fn list_published_results(
    State(db): State<Database>,
    Query(filter): Query<ResultsFilter>,
) -> Result<Json<Vec<EventResults>>, WebError> {
    let published = services::list_published_results(db.pool(), &filter).await?;

    Ok(Json(published))
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = ScoredResult,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Result recorded", body = EventResult),
        (status = 400, description = "Validation error or points disagree with the points table"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Unknown group")
    ),
    tag = "results"
)]
pub async fn create_result(
    State(db): State<Database>,
    Json(req): Json<ScoredResult>,
) -> Result<Response, WebError> {
    req.validate()?;

    let result = services::create_result(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(result)).into_response())
}
