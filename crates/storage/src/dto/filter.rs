use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{Event, EventCategory, EventResult, Group};

/// Filters for the upcoming events listing. Absent or blank values match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventFilter {
    /// Case-insensitive substring of the event name
    pub search: Option<String>,
    /// Exact stage name
    pub stage: Option<String>,
    /// Calendar date label such as `5-March`
    pub date: Option<String>,
}

/// Filters for the published results listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResultsFilter {
    pub search: Option<String>,
    pub stage: Option<String>,
    pub date: Option<String>,
    /// Blank means every category
    #[serde(default, deserialize_with = "blank_as_none")]
    pub category: Option<EventCategory>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<EventCategory>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl ResultsFilter {
    pub fn event_filter(&self) -> EventFilter {
        EventFilter {
            search: self.search.clone(),
            stage: self.stage.clone(),
            date: self.date.clone(),
        }
    }
}

/// A result joined to its group. A dangling group reference yields `group: None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResultWithGroup {
    #[serde(flatten)]
    pub result: EventResult,
    pub group: Option<Group>,
}

/// A published event with its placements in ascending position order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EventResults {
    pub event: Event,
    pub results: Vec<ResultWithGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_category_means_all() {
        let filter: ResultsFilter = serde_json::from_str(r#"{"category":""}"#).unwrap();
        assert_eq!(filter.category, None);

        let filter: ResultsFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter.category, None);
    }

    #[test]
    fn test_category_is_parsed_case_insensitively() {
        let filter: ResultsFilter = serde_json::from_str(r#"{"category":"Dual"}"#).unwrap();
        assert_eq!(filter.category, Some(EventCategory::Dual));

        assert!(serde_json::from_str::<ResultsFilter>(r#"{"category":"trio"}"#).is_err());
    }
}
