//! Weekly timetable.
//!
//! The timetable is a fixed table of five school days, each with
//! `PERIODS_PER_DAY` subject labels. An empty label marks a free period.
//! It is read-only once built: the store only looks up labels from it.

use std::fmt;

use anyhow::{Result, bail};

/// Number of periods in one school day.
pub const PERIODS_PER_DAY: usize = 7;

/// Built-in Section H timetable, in `Weekday::ALL` order.
const SECTION_H: [[&str; PERIODS_PER_DAY]; 5] = [
    ["Math", "ETI", "TEM", "PHY", "Math", "PHY", "ENGG PHY LAB"],
    [
        "SS LAB", "Math", "PHY", "TEM LAB", "LIBRARY", "MATH TUT", "PHY TUT",
    ],
    ["Math", "PHY", "TEM LAB", "ETI", "TEM", "PPS LAB", ""],
    ["Math", "TEM", "TEM", "PHY", "ENGG PHY LAB", "D.T LAB", ""],
    ["TEM", "D.T", "TEM", "Math", "ENGG PHY LAB", "PHY", ""],
];

/// School day shown as a timetable row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All school days in display order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Row index of this day in the timetable.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Maps a calendar weekday to a school day. Weekends have no row.
    pub fn from_chrono(day: chrono::Weekday) -> Option<Self> {
        match day {
            chrono::Weekday::Mon => Some(Weekday::Monday),
            chrono::Weekday::Tue => Some(Weekday::Tuesday),
            chrono::Weekday::Wed => Some(Weekday::Wednesday),
            chrono::Weekday::Thu => Some(Weekday::Thursday),
            chrono::Weekday::Fri => Some(Weekday::Friday),
            chrono::Weekday::Sat | chrono::Weekday::Sun => None,
        }
    }

    /// School day for the local date, if today is one.
    pub fn today() -> Option<Self> {
        use chrono::Datelike;

        Self::from_chrono(chrono::Local::now().weekday())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifies one timetable cell: a day and a 1-based period.
///
/// Formats as `"<day>-<period>"`, e.g. `Monday-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey {
    day: Weekday,
    period: u8,
}

impl CellKey {
    /// Builds a key, returning `None` when `period` is outside `1..=PERIODS_PER_DAY`.
    pub fn new(day: Weekday, period: u8) -> Option<Self> {
        (1..=PERIODS_PER_DAY as u8)
            .contains(&period)
            .then_some(Self { day, period })
    }

    pub fn day(self) -> Weekday {
        self.day
    }

    pub fn period(self) -> u8 {
        self.period
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.period)
    }
}

/// Weekly timetable: day -> ordered period labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    rows: [[String; PERIODS_PER_DAY]; 5],
}

impl Default for Timetable {
    fn default() -> Self {
        Self::section_h()
    }
}

impl Timetable {
    /// The built-in Section H timetable.
    pub fn section_h() -> Self {
        Self {
            rows: SECTION_H.map(|row| row.map(str::to_string)),
        }
    }

    /// Returns a copy with one day's row replaced.
    ///
    /// # Errors
    /// Returns an error if `labels` does not hold exactly `PERIODS_PER_DAY` entries.
    pub fn with_day(mut self, day: Weekday, labels: Vec<String>) -> Result<Self> {
        let count = labels.len();
        let Ok(row) = <[String; PERIODS_PER_DAY]>::try_from(labels) else {
            bail!(
                "{day} has {count} periods, expected {PERIODS_PER_DAY} (use \"\" for free periods)"
            );
        };
        self.rows[day.index()] = row;
        Ok(self)
    }

    /// All labels for a day, free periods included as `""`.
    pub fn periods(&self, day: Weekday) -> &[String; PERIODS_PER_DAY] {
        &self.rows[day.index()]
    }

    /// Raw label of a cell (`""` for a free period or an out-of-range period).
    pub fn label(&self, day: Weekday, period: u8) -> &str {
        CellKey::new(day, period).map_or("", |key| {
            self.rows[day.index()][usize::from(key.period()) - 1].as_str()
        })
    }

    /// Subject taught in a cell, `None` for a free period.
    pub fn subject(&self, day: Weekday, period: u8) -> Option<&str> {
        let label = self.label(day, period);
        (!label.is_empty()).then_some(label)
    }
}
