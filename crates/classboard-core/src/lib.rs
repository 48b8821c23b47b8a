//! Core Classboard library (dashboard store, timetable, prompt capability, config).

pub mod attendance;
pub mod config;
pub mod prompt;
pub mod store;
pub mod timetable;

pub use attendance::{AttendanceField, AttendanceRecord};
pub use prompt::{LinePrompt, ScriptedPrompt};
pub use store::{ListKind, ModalSession, Store};
pub use timetable::{CellKey, PERIODS_PER_DAY, Timetable, Weekday};
