use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

/// Kind of event, used as the key into the points table
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "event_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Individual,
    Dual,
    Group,
}

impl EventCategory {
    pub const ALL: [EventCategory; 3] = [Self::Individual, Self::Dual, Self::Group];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Dual => "dual",
            Self::Group => "group",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "individual" => Ok(Self::Individual),
            "dual" => Ok(Self::Dual),
            "group" => Ok(Self::Group),
            other => Err(format!(
                "unknown event category '{}', expected individual, dual or group",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub name: String,
    pub category: EventCategory,
    pub max_winners: i32,
    pub stage: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub created_at: chrono::NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("dual".parse::<EventCategory>(), Ok(EventCategory::Dual));
        assert_eq!(
            " Individual ".parse::<EventCategory>(),
            Ok(EventCategory::Individual)
        );
        assert_eq!("GROUP".parse::<EventCategory>(), Ok(EventCategory::Group));
        assert!("solo".parse::<EventCategory>().is_err());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&EventCategory::Group).unwrap();
        assert_eq!(json, "\"group\"");

        let parsed: EventCategory = serde_json::from_str("\"individual\"").unwrap();
        assert_eq!(parsed, EventCategory::Individual);
        assert_eq!(parsed.to_string(), "individual");
    }
}
