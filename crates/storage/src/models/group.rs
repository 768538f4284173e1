use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A competing team/house. `total_points` is maintained by the database
/// whenever a result referencing the group is inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Group {
    pub group_id: Uuid,
    pub name: String,
    pub team_code: String,
    pub total_points: i32,
    pub created_at: chrono::NaiveDateTime,
}
