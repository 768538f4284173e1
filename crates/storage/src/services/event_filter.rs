use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::dto::filter::{EventFilter, EventResults, ResultWithGroup, ResultsFilter};
use crate::models::{Event, EventResult, Group};

/// Calendar label used by the date filters, e.g. `5-March`.
pub fn date_label(start_time: &DateTime<Utc>) -> String {
    start_time.format("%-d-%B").to_string()
}

/// Exact-match selectors ignore surrounding whitespace; blank means inactive.
fn selector(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        // The search text is matched verbatim, whitespace included.
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty())
            && !event.name.to_lowercase().contains(&search.to_lowercase())
        {
            return false;
        }

        if let Some(stage) = selector(&self.stage)
            && event.stage.as_deref() != Some(stage)
        {
            return false;
        }

        if let Some(date) = selector(&self.date) {
            match &event.start_time {
                Some(start) if date_label(start) == date => {}
                _ => return false,
            }
        }

        true
    }
}

impl ResultsFilter {
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(category) = self.category
            && event.category != category
        {
            return false;
        }

        self.event_filter().matches(event)
    }
}

fn published_ids(results: &[EventResult]) -> HashSet<Uuid> {
    results.iter().map(|r| r.event_id).collect()
}

/// Events that have no recorded result yet and satisfy every active filter,
/// in their original order.
pub fn upcoming_events(
    events: &[Event],
    results: &[EventResult],
    filter: &EventFilter,
) -> Vec<Event> {
    let published = published_ids(results);

    events
        .iter()
        .filter(|event| !published.contains(&event.event_id))
        .filter(|event| filter.matches(event))
        .cloned()
        .collect()
}

/// Results of one event sorted by position, each joined to its group.
pub fn event_results(
    event_id: Uuid,
    results: &[EventResult],
    groups: &[Group],
) -> Vec<ResultWithGroup> {
    let groups_by_id: HashMap<Uuid, &Group> = groups.iter().map(|g| (g.group_id, g)).collect();

    let mut placements: Vec<&EventResult> =
        results.iter().filter(|r| r.event_id == event_id).collect();
    placements.sort_by_key(|r| r.position);

    placements
        .into_iter()
        .map(|result| ResultWithGroup {
            result: result.clone(),
            group: groups_by_id.get(&result.group_id).map(|g| (*g).clone()),
        })
        .collect()
}

/// Events with at least one result that satisfy every active filter, each
/// carrying its joined placements.
pub fn published_results(
    events: &[Event],
    results: &[EventResult],
    groups: &[Group],
    filter: &ResultsFilter,
) -> Vec<EventResults> {
    let published = published_ids(results);

    events
        .iter()
        .filter(|event| published.contains(&event.event_id))
        .filter(|event| filter.matches(event))
        .map(|event| EventResults {
            event: event.clone(),
            results: event_results(event.event_id, results, groups),
        })
        .collect()
}

/// Distinct date labels, first-seen order
pub fn available_dates(events: &[Event]) -> Vec<String> {
    let mut seen = HashSet::new();
    events
        .iter()
        .filter_map(|e| e.start_time.as_ref().map(date_label))
        .filter(|label| seen.insert(label.clone()))
        .collect()
}

/// Distinct stages, first-seen order
pub fn available_stages(events: &[Event]) -> Vec<String> {
    let mut seen = HashSet::new();
    events
        .iter()
        .filter_map(|e| e.stage.clone())
        .filter(|stage| !stage.is_empty() && seen.insert(stage.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventCategory;
    use chrono::{NaiveDate, NaiveDateTime, TimeZone};

    fn created() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn event(
        name: &str,
        category: EventCategory,
        stage: Option<&str>,
        day: Option<u32>,
    ) -> Event {
        Event {
            event_id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            max_winners: 3,
            stage: stage.map(String::from),
            start_time: day.map(|d| Utc.with_ymd_and_hms(2025, 3, d, 9, 30, 0).unwrap()),
            created_at: created(),
        }
    }

    fn group(name: &str) -> Group {
        Group {
            group_id: Uuid::new_v4(),
            name: name.to_string(),
            team_code: name.to_uppercase(),
            total_points: 0,
            created_at: created(),
        }
    }

    fn result(event: &Event, group_id: Uuid, position: i32) -> EventResult {
        EventResult {
            result_id: Uuid::new_v4(),
            event_id: event.event_id,
            group_id,
            position,
            points: crate::services::points::calculate_points(position, event.category),
            participant_name: None,
            created_at: created(),
        }
    }

    #[test]
    fn test_date_label_format() {
        let start = Utc.with_ymd_and_hms(2025, 3, 5, 18, 0, 0).unwrap();
        assert_eq!(date_label(&start), "5-March");

        let start = Utc.with_ymd_and_hms(2025, 12, 25, 0, 0, 0).unwrap();
        assert_eq!(date_label(&start), "25-December");
    }

    #[test]
    fn test_empty_filter_returns_unpublished_in_order() {
        let events = vec![
            event("Solo Song", EventCategory::Individual, Some("Main Stage"), Some(5)),
            event("Duet", EventCategory::Dual, Some("Hall B"), Some(5)),
            event("Group Dance", EventCategory::Group, None, None),
            event("Mime", EventCategory::Group, Some("Main Stage"), Some(6)),
        ];
        let results = vec![result(&events[1], Uuid::new_v4(), 1)];

        let upcoming = upcoming_events(&events, &results, &EventFilter::default());
        let names: Vec<_> = upcoming.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Solo Song", "Group Dance", "Mime"]);
    }

    #[test]
    fn test_empty_selectors_match_everything() {
        let events = vec![event("Essay", EventCategory::Individual, None, None)];
        let filter = EventFilter {
            search: Some(String::new()),
            stage: Some(" ".into()),
            date: Some(String::new()),
        };
        assert_eq!(upcoming_events(&events, &[], &filter).len(), 1);
    }

    #[test]
    fn test_search_whitespace_is_part_of_substring() {
        let events = vec![
            event("Songbird", EventCategory::Individual, None, None),
            event("Solo Song", EventCategory::Individual, None, None),
        ];

        let filter = EventFilter {
            search: Some(" song".into()),
            ..Default::default()
        };
        let upcoming = upcoming_events(&events, &[], &filter);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Solo Song");

        let blank = EventFilter {
            search: Some("  ".into()),
            ..Default::default()
        };
        assert!(upcoming_events(&events, &[], &blank).is_empty());
    }

    #[test]
    fn test_event_filters_combine() {
        let events = vec![
            event("Solo Song", EventCategory::Individual, Some("Main Stage"), Some(5)),
            event("Group Song", EventCategory::Group, Some("Main Stage"), Some(6)),
            event("Folk Song", EventCategory::Group, Some("Hall B"), Some(5)),
            event("Poetry", EventCategory::Individual, Some("Main Stage"), Some(5)),
        ];

        let filter = EventFilter {
            search: Some("SONG".into()),
            stage: Some("Main Stage".into()),
            date: Some("5-March".into()),
        };
        let upcoming = upcoming_events(&events, &[], &filter);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Solo Song");
    }

    #[test]
    fn test_date_filter_excludes_unscheduled_events() {
        let events = vec![event("Essay", EventCategory::Individual, None, None)];
        let filter = EventFilter {
            date: Some("5-March".into()),
            ..Default::default()
        };
        assert!(upcoming_events(&events, &[], &filter).is_empty());
    }

    #[test]
    fn test_event_results_sorted_and_joined() {
        let a = group("A");
        let b = group("B");
        let c = group("C");
        let groups = vec![c.clone(), a.clone(), b.clone()];
        let ev = event("Duet", EventCategory::Dual, None, None);

        let results = vec![
            result(&ev, c.group_id, 3),
            result(&ev, a.group_id, 1),
            result(&ev, b.group_id, 2),
        ];

        let joined = event_results(ev.event_id, &results, &groups);
        let positions: Vec<_> = joined.iter().map(|r| r.result.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);

        let names: Vec<_> = joined
            .iter()
            .map(|r| r.group.as_ref().map(|g| g.name.as_str()))
            .collect();
        assert_eq!(names, vec![Some("A"), Some("B"), Some("C")]);
    }

    #[test]
    fn test_missing_group_is_absent_not_error() {
        let ev = event("Duet", EventCategory::Dual, None, None);
        let results = vec![result(&ev, Uuid::new_v4(), 1)];

        let joined = event_results(ev.event_id, &results, &[]);
        assert_eq!(joined.len(), 1);
        assert!(joined[0].group.is_none());
    }

    #[test]
    fn test_published_results_filters() {
        let g = group("Red");
        let events = vec![
            event("Solo Song", EventCategory::Individual, Some("Main Stage"), Some(5)),
            event("Duet", EventCategory::Dual, Some("Main Stage"), Some(5)),
            event("Group Dance", EventCategory::Group, Some("Hall B"), Some(6)),
        ];
        let results = vec![
            result(&events[0], g.group_id, 1),
            result(&events[2], g.group_id, 2),
        ];
        let groups = vec![g];

        let all = published_results(&events, &results, &groups, &ResultsFilter::default());
        let names: Vec<_> = all.iter().map(|e| e.event.name.as_str()).collect();
        assert_eq!(names, vec!["Solo Song", "Group Dance"]);

        let by_category = ResultsFilter {
            category: Some(EventCategory::Group),
            ..Default::default()
        };
        let grouped = published_results(&events, &results, &groups, &by_category);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].event.name, "Group Dance");
        assert_eq!(grouped[0].results[0].result.points, 8);

        let by_stage = ResultsFilter {
            stage: Some("Main Stage".into()),
            ..Default::default()
        };
        let main_stage = published_results(&events, &results, &groups, &by_stage);
        assert_eq!(main_stage.len(), 1);
        assert_eq!(main_stage[0].event.name, "Solo Song");
    }

    #[test]
    fn test_published_results_search_and_date() {
        let g = group("Red");
        let events = vec![
            event("Solo Song", EventCategory::Individual, Some("Main Stage"), Some(5)),
            event("Group Song", EventCategory::Group, Some("Hall B"), Some(6)),
            event("Group Dance", EventCategory::Group, Some("Hall B"), Some(6)),
        ];
        let results: Vec<_> = events.iter().map(|e| result(e, g.group_id, 1)).collect();
        let groups = vec![g];

        let by_search = ResultsFilter {
            search: Some("SONG".into()),
            ..Default::default()
        };
        let found = published_results(&events, &results, &groups, &by_search);
        let names: Vec<_> = found.iter().map(|e| e.event.name.as_str()).collect();
        assert_eq!(names, vec!["Solo Song", "Group Song"]);

        let by_date = ResultsFilter {
            date: Some("6-March".into()),
            ..Default::default()
        };
        let found = published_results(&events, &results, &groups, &by_date);
        let names: Vec<_> = found.iter().map(|e| e.event.name.as_str()).collect();
        assert_eq!(names, vec!["Group Song", "Group Dance"]);

        let combined = ResultsFilter {
            search: Some("song".into()),
            date: Some("6-March".into()),
            ..Default::default()
        };
        let found = published_results(&events, &results, &groups, &combined);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].event.name, "Group Song");
        assert_eq!(found[0].results[0].result.points, 12);
    }

    #[test]
    fn test_filter_options_are_distinct() {
        let events = vec![
            event("A", EventCategory::Individual, Some("Main Stage"), Some(6)),
            event("B", EventCategory::Individual, Some("Hall B"), Some(5)),
            event("C", EventCategory::Individual, Some("Main Stage"), Some(6)),
            event("D", EventCategory::Individual, None, None),
        ];

        assert_eq!(available_dates(&events), vec!["6-March", "5-March"]);
        assert_eq!(available_stages(&events), vec!["Main Stage", "Hall B"]);
    }
}
