use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::group::NewGroup, models::Group};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/groups",
    responses(
        (status = 200, description = "List all groups", body = Vec<Group>)
    ),
    tag = "groups"
)]
pub async fn list_groups(State(db): State<Database>) -> Result<Json<Vec<Group>>, WebError> {
    let groups = services::list_groups(db.pool()).await?;

    Ok(Json(groups))
}

#[utoipa::path(
    post,
    path = "/api/groups",
    request_body = NewGroup,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Group created successfully", body = Group),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Team code already exists")
    ),
    tag = "groups"
)]
pub async fn create_group(
    State(db): State<Database>,
    Json(req): Json<NewGroup>,
) -> Result<Response, WebError> {
    req.validate()?;

    let group = services::create_group(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(group)).into_response())
}
