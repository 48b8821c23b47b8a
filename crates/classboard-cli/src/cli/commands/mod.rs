//! CLI command handlers.

pub mod config;
pub mod dashboard;
pub mod timetable;
