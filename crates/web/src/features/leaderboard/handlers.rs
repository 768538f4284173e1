use axum::{Json, extract::State};
use storage::{
    Database,
    dto::leaderboard::{CriteriaRow, LeaderboardEntry},
    services::points,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Groups ranked by total points, highest first", body = Vec<LeaderboardEntry>)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(db): State<Database>,
) -> Result<Json<Vec<LeaderboardEntry>>, WebError> {
    let entries = services::get_leaderboard(db.pool()).await?;

    Ok(Json(entries))
}

#[utoipa::path(
    get,
    path = "/api/criteria",
    responses(
        (status = 200, description = "Points awarded per category and placement", body = Vec<CriteriaRow>)
    ),
    tag = "leaderboard"
)]
pub async fn get_criteria() -> Json<Vec<CriteriaRow>> {
    Json(points::criteria())
}
