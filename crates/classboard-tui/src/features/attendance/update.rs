//! Attendance key handling.

use classboard_core::Store;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::AttendanceInputs;

/// Whether a character can be typed into a numeric input.
fn is_numeric_input_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')
}

/// Handles a key while the attendance pane has focus. Returns `true` if consumed.
pub fn handle_key(inputs: &mut AttendanceInputs, store: &mut Store, key: KeyEvent) -> bool {
    let subject_count = store.tracked_subjects().len();
    let Some(subject) = store.tracked_subjects().get(inputs.selected()).cloned() else {
        return false;
    };
    let field = inputs.field();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let raw = match key.code {
        KeyCode::Up => {
            inputs.select_prev();
            return true;
        }
        KeyCode::Down => {
            inputs.select_next(subject_count);
            return true;
        }
        KeyCode::Left | KeyCode::Right => {
            inputs.toggle_field();
            return true;
        }
        KeyCode::Char(ch) if !ctrl && is_numeric_input_char(ch) => {
            inputs.push(&subject, field, ch)
        }
        KeyCode::Backspace => inputs.pop(&subject, field),
        KeyCode::Delete => inputs.clear(&subject, field),
        _ => return false,
    };

    store.set_attendance_field(&subject, field, raw);
    true
}

#[cfg(test)]
mod tests {
    use classboard_core::AttendanceField;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(inputs: &mut AttendanceInputs, store: &mut Store, text: &str) {
        for ch in text.chars() {
            handle_key(inputs, store, key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_typing_updates_store_each_keystroke() {
        let mut inputs = AttendanceInputs::default();
        let mut store = Store::default();

        type_str(&mut inputs, &mut store, "8");
        handle_key(&mut inputs, &mut store, key(KeyCode::Right));
        type_str(&mut inputs, &mut store, "1");
        assert_eq!(
            store.attendance("Math").unwrap().display_percentage(),
            "800.0%"
        );
        type_str(&mut inputs, &mut store, "0");
        assert_eq!(
            store.attendance("Math").unwrap().display_percentage(),
            "80.0%"
        );
    }

    #[test]
    fn test_backspace_to_empty_sets_zero() {
        let mut inputs = AttendanceInputs::default();
        let mut store = Store::default();
        handle_key(&mut inputs, &mut store, key(KeyCode::Right));
        type_str(&mut inputs, &mut store, "5");
        handle_key(&mut inputs, &mut store, key(KeyCode::Backspace));

        let record = store.attendance("Math").unwrap();
        assert!(record.total.abs() < f64::EPSILON);
        assert_eq!(record.display_percentage(), "—");
    }

    #[test]
    fn test_partial_number_coerces_to_zero() {
        let mut inputs = AttendanceInputs::default();
        let mut store = Store::default();
        type_str(&mut inputs, &mut store, "-");
        assert!(store.attendance("Math").unwrap().present.abs() < f64::EPSILON);
        type_str(&mut inputs, &mut store, "3");
        assert!((store.attendance("Math").unwrap().present + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_down_selects_next_subject() {
        let mut inputs = AttendanceInputs::default();
        let mut store = Store::default();
        handle_key(&mut inputs, &mut store, key(KeyCode::Down));
        type_str(&mut inputs, &mut store, "4");

        assert!(store.attendance("Math").is_none());
        assert_eq!(inputs.buffer("Physics", AttendanceField::Present), "4");
    }

    #[test]
    fn test_letters_not_consumed() {
        let mut inputs = AttendanceInputs::default();
        let mut store = Store::default();
        assert!(!handle_key(&mut inputs, &mut store, key(KeyCode::Char('q'))));
        assert!(store.attendance("Math").is_none());
    }

    #[test]
    fn test_no_subjects_consumes_nothing() {
        let mut inputs = AttendanceInputs::default();
        let mut store = Store::new(Vec::<String>::new());
        assert!(!handle_key(&mut inputs, &mut store, key(KeyCode::Char('1'))));
    }
}
