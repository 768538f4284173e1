pub mod auth;
pub mod event;
pub mod filter;
pub mod group;
pub mod leaderboard;
pub mod result;
