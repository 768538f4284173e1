use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::EventCategory;

/// Request payload for scheduling a new event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewEvent {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub category: EventCategory,

    #[validate(range(min = 1, max = 100, message = "max_winners must be between 1 and 100"))]
    #[serde(default = "default_max_winners")]
    pub max_winners: i32,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Stage must be between 1 and 255 characters"
    ))]
    pub stage: String,

    pub start_time: DateTime<Utc>,
}

pub fn default_max_winners() -> i32 {
    3
}

impl NewEvent {
    pub fn new(
        name: impl Into<String>,
        category: EventCategory,
        stage: impl Into<String>,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            max_winners: default_max_winners(),
            stage: stage.into(),
            start_time,
        }
    }
}
