//! Application state composition.
//!
//! ```text
//! AppState
//! ├── store: Store               (attendance, notes, events, assignments, editor session)
//! ├── timetable: Timetable       (read-only weekly table)
//! ├── focus: Focus               (which pane receives keys)
//! ├── cursor: TimetableCursor    (selected timetable cell)
//! ├── attendance: AttendanceInputs (raw text of each attendance input)
//! └── today: Option<Weekday>     (highlighted row)
//! ```
//!
//! The store holds everything the dashboard records. The remaining fields are
//! view-only state: where the cursor is and what has been typed into inputs.
//! The assignment editor is open exactly when `store.session().is_open()`.

use anyhow::Result;
use classboard_core::config::Config;
use classboard_core::{Store, Timetable, Weekday};

use crate::attendance::AttendanceInputs;
use crate::timetable::TimetableCursor;

/// Pane that receives keyboard input when no overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Timetable,
    Attendance,
    Notes,
    Events,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Timetable,
        Focus::Attendance,
        Focus::Notes,
        Focus::Events,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether printable keys are typed into a field in this pane.
    pub fn captures_text(self) -> bool {
        matches!(self, Focus::Attendance)
    }
}

/// Combined application state for the TUI.
pub struct AppState {
    /// Dashboard records and the assignment editor session.
    pub store: Store,
    /// Weekly timetable.
    pub timetable: Timetable,
    /// Header title.
    pub title: String,
    /// Focused pane.
    pub focus: Focus,
    /// Selected timetable cell.
    pub cursor: TimetableCursor,
    /// Raw attendance input text and selection.
    pub attendance: AttendanceInputs,
    /// Today's school day, if any.
    pub today: Option<Weekday>,
    /// Flag indicating the app should quit.
    pub should_quit: bool,
}

impl AppState {
    /// Creates state around an existing store and timetable.
    pub fn new(store: Store, timetable: Timetable, title: impl Into<String>) -> Self {
        Self {
            store,
            timetable,
            title: title.into(),
            focus: Focus::Timetable,
            cursor: TimetableCursor::default(),
            attendance: AttendanceInputs::default(),
            today: None,
            should_quit: false,
        }
    }

    /// Builds fresh state from configuration, with the cursor on today's row.
    ///
    /// # Errors
    /// Returns an error if the configured timetable is invalid.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = Store::new(config.attendance_subjects.iter().cloned());
        let timetable = config.timetable()?;
        Ok(Self::new(store, timetable, config.title.clone()).with_today(Weekday::today()))
    }

    /// Sets today's day and moves the cursor onto its row.
    #[must_use]
    pub fn with_today(mut self, today: Option<Weekday>) -> Self {
        self.today = today;
        if let Some(day) = today {
            self.cursor = TimetableCursor::new(day, 1);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::Timetable.next(), Focus::Attendance);
        assert_eq!(Focus::Events.next(), Focus::Timetable);
        assert_eq!(Focus::Timetable.prev(), Focus::Events);
        assert_eq!(Focus::Notes.prev(), Focus::Attendance);
    }

    #[test]
    fn test_from_config_uses_configured_subjects() {
        let config = Config {
            attendance_subjects: vec!["Chemistry".to_string()],
            ..Config::default()
        };
        let app = AppState::from_config(&config).unwrap();
        assert_eq!(app.store.tracked_subjects(), ["Chemistry"]);
        assert_eq!(app.title, "Section H - Timetable");
        assert_eq!(app.focus, Focus::Timetable);
    }

    #[test]
    fn test_with_today_moves_cursor() {
        let app = AppState::new(Store::default(), Timetable::default(), "t")
            .with_today(Some(Weekday::Thursday));
        assert_eq!(app.cursor.day(), Weekday::Thursday);
        assert_eq!(app.cursor.period(), 1);
    }
}
