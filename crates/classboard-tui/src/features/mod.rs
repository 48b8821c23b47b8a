//! Feature slices for the TUI (state/update/render per slice).

pub mod attendance;
pub mod lists;
pub mod timetable;
