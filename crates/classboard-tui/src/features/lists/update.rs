//! Notes/events key handling.

use classboard_core::ListKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::effects::UiEffect;

/// Handles a key while a list pane has focus.
///
/// Returns the effects to run, or `None` if the key was not consumed.
pub fn handle_key(kind: ListKind, key: KeyEvent) -> Option<Vec<UiEffect>> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char('a' | '+') => {
            Some(vec![UiEffect::RequestLine { list: kind }])
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keys_request_line() {
        for code in [KeyCode::Enter, KeyCode::Char('a'), KeyCode::Char('+')] {
            let effects = handle_key(ListKind::Events, KeyEvent::new(code, KeyModifiers::NONE));
            assert_eq!(
                effects,
                Some(vec![UiEffect::RequestLine {
                    list: ListKind::Events
                }])
            );
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(handle_key(ListKind::Notes, key), None);

        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ListKind::Notes, ctrl_a), None);
    }
}
