//! Dashboard view-state store.
//!
//! `Store` owns every piece of dashboard state:
//! - attendance counters per tracked subject
//! - the notes and events lists (append-only)
//! - assignment text per timetable cell (upsert-only)
//! - the assignment editor session
//!
//! Its methods are the only way to change that state. Every operation is
//! total: invalid input is silently declined and leaves prior state as is.
//! Mutating methods return `true` when something changed.
//!
//! ## Assignment editor session
//!
//! ```text
//!            open_assignment_editor
//!   Closed ─────────────────────────▶ Open
//!     ▲                                 │
//!     └──── save_assignment ────────────┤
//!     └──── close_assignment_editor ────┘
//! ```
//!
//! Closing keeps the last cell, subject, and buffer around; the next open
//! overwrites them. Saving blank text never clears an existing assignment.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::attendance::{self, AttendanceField, AttendanceRecord};
use crate::prompt::LinePrompt;
use crate::timetable::{CellKey, Weekday};

/// Subjects tracked for attendance when none are configured.
pub const DEFAULT_SUBJECTS: [&str; 4] = ["Math", "Physics", "ETI", "TEM"];

/// One of the two free-text lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Notes,
    Events,
}

impl ListKind {
    pub fn title(self) -> &'static str {
        match self {
            ListKind::Notes => "Notes",
            ListKind::Events => "Events",
        }
    }

    /// Message shown when asking the user for a new entry.
    pub fn prompt_message(self) -> &'static str {
        match self {
            ListKind::Notes => "Enter your note:",
            ListKind::Events => "Enter event description:",
        }
    }
}

/// Assignment editor session.
///
/// Only the store mutates it; the view reads it through the accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalSession {
    open: bool,
    cell: Option<CellKey>,
    subject: String,
    text: String,
}

impl ModalSession {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Cell the editor was last opened for (`None` before the first open).
    pub fn cell(&self) -> Option<CellKey> {
        self.cell
    }

    pub fn day(&self) -> Option<Weekday> {
        self.cell.map(CellKey::day)
    }

    pub fn period(&self) -> Option<u8> {
        self.cell.map(CellKey::period)
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Live edit buffer.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Dashboard state container.
#[derive(Debug, Clone)]
pub struct Store {
    subjects: Vec<String>,
    attendance: HashMap<String, AttendanceRecord>,
    notes: Vec<String>,
    events: Vec<String>,
    assignments: BTreeMap<CellKey, String>,
    session: ModalSession,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_SUBJECTS)
    }
}

impl Store {
    /// Creates an empty store tracking attendance for `subjects`.
    pub fn new<I, S>(subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subjects: subjects.into_iter().map(Into::into).collect(),
            attendance: HashMap::new(),
            notes: Vec::new(),
            events: Vec::new(),
            assignments: BTreeMap::new(),
            session: ModalSession::default(),
        }
    }

    // ========================================================================
    // Attendance
    // ========================================================================

    /// Subjects with attendance tracking, in display order.
    pub fn tracked_subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn is_tracked(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }

    /// Attendance for `subject`, `None` until one of its fields was set.
    pub fn attendance(&self, subject: &str) -> Option<&AttendanceRecord> {
        self.attendance.get(subject)
    }

    /// Sets one attendance counter from raw numeric-input text.
    ///
    /// `raw` is coerced with [`attendance::coerce_number`]. Untracked subjects
    /// are ignored.
    pub fn set_attendance_field(
        &mut self,
        subject: &str,
        field: AttendanceField,
        raw: &str,
    ) -> bool {
        if !self.is_tracked(subject) {
            debug!(subject, "ignoring attendance for untracked subject");
            return false;
        }

        let value = attendance::coerce_number(raw);
        let record = self.attendance.entry(subject.to_string()).or_default();
        *record = record.with_field(field, value);
        debug!(
            subject,
            field = field.label(),
            present = record.present,
            total = record.total,
            "attendance updated"
        );
        true
    }

    // ========================================================================
    // Notes / Events
    // ========================================================================

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn list(&self, kind: ListKind) -> &[String] {
        match kind {
            ListKind::Notes => &self.notes,
            ListKind::Events => &self.events,
        }
    }

    /// Appends `text` to a list when it is present and non-empty.
    pub fn append(&mut self, kind: ListKind, text: Option<String>) -> bool {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            debug!(list = kind.title(), "no entry given");
            return false;
        };

        let list = match kind {
            ListKind::Notes => &mut self.notes,
            ListKind::Events => &mut self.events,
        };
        list.push(text);
        debug!(list = kind.title(), len = list.len(), "entry appended");
        true
    }

    pub fn append_note(&mut self, text: Option<String>) -> bool {
        self.append(ListKind::Notes, text)
    }

    pub fn append_event(&mut self, text: Option<String>) -> bool {
        self.append(ListKind::Events, text)
    }

    /// Asks `prompt` for a new entry and appends the answer.
    pub fn request(&mut self, kind: ListKind, prompt: &mut dyn LinePrompt) -> bool {
        let answer = prompt.request_line(kind.prompt_message());
        self.append(kind, answer)
    }

    pub fn request_note(&mut self, prompt: &mut dyn LinePrompt) -> bool {
        self.request(ListKind::Notes, prompt)
    }

    pub fn request_event(&mut self, prompt: &mut dyn LinePrompt) -> bool {
        self.request(ListKind::Events, prompt)
    }

    // ========================================================================
    // Assignments
    // ========================================================================

    /// Saved assignment text for a cell.
    pub fn assignment(&self, day: Weekday, period: u8) -> Option<&str> {
        CellKey::new(day, period)
            .and_then(|key| self.assignments.get(&key))
            .map(String::as_str)
    }

    /// All saved assignments, ordered by day then period.
    pub fn assignments(&self) -> impl Iterator<Item = (CellKey, &str)> {
        self.assignments
            .iter()
            .map(|(key, text)| (*key, text.as_str()))
    }

    pub fn session(&self) -> &ModalSession {
        &self.session
    }

    /// Opens the editor for a cell, seeding the buffer from any saved text.
    ///
    /// Replaces whatever the previous session held, saved or not. Declines
    /// periods outside the timetable.
    pub fn open_assignment_editor(
        &mut self,
        day: Weekday,
        period: u8,
        subject: impl Into<String>,
    ) -> bool {
        let Some(key) = CellKey::new(day, period) else {
            debug!(%day, period, "ignoring editor open for invalid period");
            return false;
        };

        let text = self.assignments.get(&key).cloned().unwrap_or_default();
        self.session = ModalSession {
            open: true,
            cell: Some(key),
            subject: subject.into(),
            text,
        };
        debug!(cell = %key, "assignment editor opened");
        true
    }

    /// Replaces the editor buffer. The saved assignment is untouched.
    pub fn edit_assignment_text(&mut self, text: impl Into<String>) {
        self.session.text = text.into();
    }

    /// Stores the buffer for the session's cell and closes the editor.
    ///
    /// Blank buffers (whitespace only) are not stored; an existing
    /// assignment is kept. A closed session saves nothing. Returns `true`
    /// when the map was written.
    pub fn save_assignment(&mut self) -> bool {
        if !self.session.open {
            return false;
        }
        self.session.open = false;

        let Some(key) = self.session.cell else {
            return false;
        };
        if self.session.text.trim().is_empty() {
            debug!(cell = %key, "blank assignment not saved");
            return false;
        }

        self.assignments.insert(key, self.session.text.clone());
        debug!(cell = %key, "assignment saved");
        true
    }

    /// Closes the editor without saving.
    pub fn close_assignment_editor(&mut self) {
        self.session.open = false;
    }
}
