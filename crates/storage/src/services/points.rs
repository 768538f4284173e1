use crate::dto::leaderboard::CriteriaRow;
use crate::models::EventCategory;

/// Points awarded for first, second and third place, per category.
const POINTS_TABLE: [(EventCategory, [i32; 3]); 3] = [
    (EventCategory::Individual, [8, 5, 3]),
    (EventCategory::Dual, [10, 6, 4]),
    (EventCategory::Group, [12, 8, 6]),
];

fn podium(category: EventCategory) -> [i32; 3] {
    POINTS_TABLE
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, points)| *points)
        .unwrap_or([0; 3])
}

/// Points for finishing at `position` in an event of `category`.
///
/// Only the podium scores; every other position yields 0.
pub fn calculate_points(position: i32, category: EventCategory) -> i32 {
    match position {
        1..=3 => podium(category)[(position - 1) as usize],
        _ => 0,
    }
}

/// Rows for the marking criteria page, derived from the same table used to
/// score results.
pub fn criteria() -> Vec<CriteriaRow> {
    POINTS_TABLE
        .iter()
        .map(|(category, [first, second, third])| CriteriaRow {
            category: *category,
            first: *first,
            second: *second,
            third: *third,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_podium_points() {
        assert_eq!(calculate_points(1, EventCategory::Group), 12);
        assert_eq!(calculate_points(2, EventCategory::Dual), 6);
        assert_eq!(calculate_points(3, EventCategory::Individual), 3);
        assert_eq!(calculate_points(1, EventCategory::Individual), 8);
        assert_eq!(calculate_points(3, EventCategory::Group), 6);
    }

    #[test]
    fn test_off_podium_scores_zero() {
        for category in EventCategory::ALL {
            for position in [-5, -1, 0, 4, 5, 10, i32::MAX, i32::MIN] {
                assert_eq!(calculate_points(position, category), 0);
            }
        }
    }

    #[test]
    fn test_criteria_matches_scoring() {
        let rows = criteria();
        assert_eq!(rows.len(), 3);

        for row in rows {
            assert_eq!(row.first, calculate_points(1, row.category));
            assert_eq!(row.second, calculate_points(2, row.category));
            assert_eq!(row.third, calculate_points(3, row.category));
        }
    }
}
