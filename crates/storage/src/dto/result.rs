use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Event;
use crate::services::points::calculate_points;

/// Request payload for recording a placement, before points are assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewResult {
    pub event_id: Uuid,
    pub group_id: Uuid,

    #[validate(range(min = 1, message = "Position must be at least 1"))]
    pub position: i32,

    #[validate(length(max = 255))]
    pub participant_name: Option<String>,
}

/// A placement with its points resolved, ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ScoredResult {
    pub event_id: Uuid,
    pub group_id: Uuid,

    #[validate(range(min = 1, message = "Position must be at least 1"))]
    pub position: i32,

    #[validate(range(min = 0, message = "Points cannot be negative"))]
    pub points: i32,

    #[validate(length(max = 255))]
    pub participant_name: Option<String>,
}

impl NewResult {
    /// Resolves points for this placement from the points table, using the
    /// category of the event being scored.
    pub fn score(&self, event: &Event) -> Result<ScoredResult, &'static str> {
        if self.event_id != event.event_id {
            return Err("Result does not belong to this event");
        }
        if self.position > event.max_winners {
            return Err("Position exceeds the number of winners for this event");
        }

        Ok(ScoredResult {
            event_id: self.event_id,
            group_id: self.group_id,
            position: self.position,
            points: calculate_points(self.position, event.category),
            participant_name: self
                .participant_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from),
        })
    }
}

impl ScoredResult {
    /// Checks that the carried points agree with the points table for `event`
    pub fn check_against(&self, event: &Event) -> Result<(), &'static str> {
        if self.position > event.max_winners {
            return Err("Position exceeds the number of winners for this event");
        }
        if self.points != calculate_points(self.position, event.category) {
            return Err("Points do not match the points table for this event");
        }
        Ok(())
    }
}
