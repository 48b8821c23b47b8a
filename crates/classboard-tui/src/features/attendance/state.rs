//! Attendance input state.

use std::collections::HashMap;

use classboard_core::AttendanceField;

/// Raw text of every attendance input plus the selected input.
#[derive(Debug, Clone)]
pub struct AttendanceInputs {
    selected: usize,
    field: AttendanceField,
    buffers: HashMap<(String, AttendanceField), String>,
}

impl Default for AttendanceInputs {
    fn default() -> Self {
        Self {
            selected: 0,
            field: AttendanceField::Present,
            buffers: HashMap::new(),
        }
    }
}

impl AttendanceInputs {
    /// Index of the selected subject.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Selected field of the selected subject.
    pub fn field(&self) -> AttendanceField {
        self.field
    }

    pub fn select_next(&mut self, subject_count: usize) {
        if self.selected + 1 < subject_count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn toggle_field(&mut self) {
        self.field = self.field.toggle();
    }

    /// Current raw text of an input (empty if never typed into).
    pub fn buffer(&self, subject: &str, field: AttendanceField) -> &str {
        self.buffers
            .get(&(subject.to_string(), field))
            .map_or("", String::as_str)
    }

    fn buffer_mut(&mut self, subject: &str, field: AttendanceField) -> &mut String {
        self.buffers
            .entry((subject.to_string(), field))
            .or_default()
    }

    /// Appends a character and returns the new raw text.
    pub fn push(&mut self, subject: &str, field: AttendanceField, ch: char) -> &str {
        let buffer = self.buffer_mut(subject, field);
        buffer.push(ch);
        buffer
    }

    /// Removes the last character and returns the new raw text.
    pub fn pop(&mut self, subject: &str, field: AttendanceField) -> &str {
        let buffer = self.buffer_mut(subject, field);
        buffer.pop();
        buffer
    }

    /// Empties an input and returns the new (empty) raw text.
    pub fn clear(&mut self, subject: &str, field: AttendanceField) -> &str {
        let buffer = self.buffer_mut(subject, field);
        buffer.clear();
        buffer
    }
}
