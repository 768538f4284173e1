pub mod event_filter;
pub mod leaderboard;
pub mod points;
