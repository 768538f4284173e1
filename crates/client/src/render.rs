//! Plain-text views of the store for the terminal.

use chrono::{DateTime, Utc};
use storage::{
    dto::{
        filter::EventResults,
        leaderboard::{CriteriaRow, LeaderboardEntry, RankBadge},
    },
    models::Event,
};

/// Start time as shown on event cards, e.g. `Wed, Mar 5 at 06:00 PM`
pub fn format_start_time(start_time: &DateTime<Utc>) -> String {
    start_time.format("%a, %b %-d at %I:%M %p").to_string()
}

fn badge(badge: Option<RankBadge>) -> &'static str {
    match badge {
        Some(RankBadge::Gold) => "[gold]",
        Some(RankBadge::Silver) => "[silver]",
        Some(RankBadge::Bronze) => "[bronze]",
        None => "",
    }
}

pub fn leaderboard(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No groups registered yet".to_string();
    }

    let name_width = entries
        .iter()
        .map(|e| e.group.name.chars().count())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|entry| {
            format!(
                "{:>3}. {:<name_width$}  {:<8} {:>5} pts  {}",
                entry.rank,
                entry.group.name,
                entry.group.team_code,
                entry.group.total_points,
                badge(entry.badge),
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn events(events: &[Event]) -> String {
    if events.is_empty() {
        return "No upcoming events match the current filters".to_string();
    }

    events
        .iter()
        .map(|event| {
            let when = event
                .start_time
                .as_ref()
                .map(format_start_time)
                .unwrap_or_else(|| "Time to be announced".to_string());
            format!(
                "{} ({})\n    {} | {}",
                event.name,
                event.category,
                event.stage.as_deref().unwrap_or("Stage to be announced"),
                when
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn results(published: &[EventResults]) -> String {
    if published.is_empty() {
        return "No results match the current filters".to_string();
    }

    let mut blocks = Vec::with_capacity(published.len());
    for entry in published {
        let mut lines = vec![format!("{} ({})", entry.event.name, entry.event.category)];
        for placement in &entry.results {
            let group = placement
                .group
                .as_ref()
                .map(|g| g.name.as_str())
                .unwrap_or("Unknown group");
            let mut line = format!(
                "  #{} {} +{} pts",
                placement.result.position, group, placement.result.points
            );
            if let Some(name) = &placement.result.participant_name {
                line.push_str(&format!(" ({})", name));
            }
            lines.push(line);
        }
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}

pub fn criteria(rows: &[CriteriaRow]) -> String {
    let mut lines = vec![format!("{:<12} {:>5} {:>5} {:>5}", "Category", "1st", "2nd", "3rd")];
    lines.extend(rows.iter().map(|row| {
        format!(
            "{:<12} {:>5} {:>5} {:>5}",
            row.category.to_string(),
            row.first,
            row.second,
            row.third
        )
    }));
    lines.join("\n")
}
