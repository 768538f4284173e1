use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A recorded placement of a group in an event.
///
/// `points` is fixed when the row is inserted and is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventResult {
    pub result_id: Uuid,
    pub event_id: Uuid,
    pub group_id: Uuid,
    pub position: i32,
    pub points: i32,
    pub participant_name: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
