//! Timetable feature slice.
//!
//! Shows the weekly grid, moves a cell cursor over it, and opens the
//! assignment editor for the selected cell.

mod render;
mod update;

use classboard_core::{CellKey, PERIODS_PER_DAY, Weekday};
pub use render::{render_preview, render_timetable};
pub use update::handle_key;

/// Selected timetable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimetableCursor {
    day: Weekday,
    period: u8,
}

impl Default for TimetableCursor {
    fn default() -> Self {
        Self {
            day: Weekday::Monday,
            period: 1,
        }
    }
}

impl TimetableCursor {
    /// Creates a cursor, clamping `period` into the timetable.
    pub fn new(day: Weekday, period: u8) -> Self {
        Self {
            day,
            period: period.clamp(1, PERIODS_PER_DAY as u8),
        }
    }

    pub fn day(self) -> Weekday {
        self.day
    }

    pub fn period(self) -> u8 {
        self.period
    }

    pub fn cell(self) -> Option<CellKey> {
        CellKey::new(self.day, self.period)
    }

    pub fn is_at(self, day: Weekday, period: u8) -> bool {
        self.day == day && self.period == period
    }

    pub fn move_up(&mut self) {
        if let Some(day) = self.day.index().checked_sub(1).and_then(Weekday::from_index) {
            self.day = day;
        }
    }

    pub fn move_down(&mut self) {
        if let Some(day) = Weekday::from_index(self.day.index() + 1) {
            self.day = day;
        }
    }

    pub fn move_left(&mut self) {
        self.period = self.period.saturating_sub(1).max(1);
    }

    pub fn move_right(&mut self) {
        self.period = (self.period + 1).min(PERIODS_PER_DAY as u8);
    }

    pub fn move_home(&mut self) {
        self.period = 1;
    }

    pub fn move_end(&mut self) {
        self.period = PERIODS_PER_DAY as u8;
    }
}
