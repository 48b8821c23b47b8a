//! Timetable key handling.

use classboard_core::{Store, Timetable};
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::TimetableCursor;

/// Handles a key while the timetable has focus. Returns `true` if consumed.
///
/// Enter on a cell with a subject opens the assignment editor for it; free
/// periods cannot hold assignments.
pub fn handle_key(
    cursor: &mut TimetableCursor,
    store: &mut Store,
    timetable: &Timetable,
    key: KeyEvent,
) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => cursor.move_up(),
        KeyCode::Down | KeyCode::Char('j') => cursor.move_down(),
        KeyCode::Left | KeyCode::Char('h') => cursor.move_left(),
        KeyCode::Right | KeyCode::Char('l') => cursor.move_right(),
        KeyCode::Home => cursor.move_home(),
        KeyCode::End => cursor.move_end(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let (day, period) = (cursor.day(), cursor.period());
            match timetable.subject(day, period) {
                Some(subject) => {
                    store.open_assignment_editor(day, period, subject);
                }
                None => debug!(%day, period, "free period selected"),
            }
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use classboard_core::Weekday;
    use crossterm::event::KeyModifiers;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_opens_editor_with_subject() {
        let mut cursor = TimetableCursor::new(Weekday::Tuesday, 5);
        let mut store = Store::default();
        let timetable = Timetable::section_h();

        assert!(handle_key(&mut cursor, &mut store, &timetable, key(KeyCode::Enter)));

        let session = store.session();
        assert!(session.is_open());
        assert_eq!(session.subject(), "LIBRARY");
        assert_eq!(session.cell().unwrap().to_string(), "Tuesday-5");
    }

    #[test]
    fn test_enter_on_free_period_does_nothing() {
        let mut cursor = TimetableCursor::new(Weekday::Wednesday, 7);
        let mut store = Store::default();
        let timetable = Timetable::section_h();

        assert!(handle_key(&mut cursor, &mut store, &timetable, key(KeyCode::Enter)));
        assert!(!store.session().is_open());
    }

    #[test]
    fn test_vim_keys_move_cursor() {
        let mut cursor = TimetableCursor::default();
        let mut store = Store::default();
        let timetable = Timetable::section_h();

        for code in [KeyCode::Char('j'), KeyCode::Char('l'), KeyCode::Char('l')] {
            handle_key(&mut cursor, &mut store, &timetable, key(code));
        }
        assert!(cursor.is_at(Weekday::Tuesday, 3));
    }

    #[test]
    fn test_unrelated_key_not_consumed() {
        let mut cursor = TimetableCursor::default();
        let mut store = Store::default();
        let timetable = Timetable::section_h();
        assert!(!handle_key(&mut cursor, &mut store, &timetable, key(KeyCode::Char('q'))));
    }
}
