//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use classboard_core::ListKind;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::info;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::assignment;
use crate::state::{AppState, Focus};
use crate::{attendance, lists, timetable};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::DayChanged(today) => {
            info!(?today, "school day changed");
            app.today = today;
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if app.store.session().is_open() {
                assignment::handle_paste(&mut app.store, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        // Unsaved editor text is discarded
        app.store.close_assignment_editor();
        return vec![UiEffect::Quit];
    }

    // The assignment editor takes every other key while open
    if app.store.session().is_open() {
        assignment::handle_key(&mut app.store, key);
        return vec![];
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return vec![];
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return vec![];
        }
        _ => {}
    }

    let consumed = match app.focus {
        Focus::Timetable => {
            timetable::handle_key(&mut app.cursor, &mut app.store, &app.timetable, key)
        }
        Focus::Attendance => attendance::handle_key(&mut app.attendance, &mut app.store, key),
        Focus::Notes => {
            if let Some(effects) = lists::handle_key(ListKind::Notes, key) {
                return effects;
            }
            false
        }
        Focus::Events => {
            if let Some(effects) = lists::handle_key(ListKind::Events, key) {
                return effects;
            }
            false
        }
    };
    if consumed {
        return vec![];
    }

    match key.code {
        // Leave the field first; a second Esc quits from the timetable
        KeyCode::Esc if app.focus.captures_text() => {
            app.focus = Focus::Timetable;
            vec![]
        }
        KeyCode::Char('q') if app.focus.captures_text() => vec![],
        KeyCode::Esc | KeyCode::Char('q') if !ctrl => vec![UiEffect::Quit],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use classboard_core::{Store, Timetable, Weekday};

    use super::*;

    fn app() -> AppState {
        AppState::new(Store::default(), Timetable::section_h(), "Section H - Timetable")
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn ctrl(app: &mut AppState, ch: char) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char(ch),
                KeyModifiers::CONTROL,
            ))),
        )
    }

    fn type_str(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn test_q_quits_from_timetable() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), vec![UiEffect::Quit]);
        assert_eq!(press(&mut app, KeyCode::Esc), vec![UiEffect::Quit]);
        assert_eq!(ctrl(&mut app, 'c'), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Attendance);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Events);
    }

    #[test]
    fn test_attendance_typing_updates_percentage() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);

        type_str(&mut app, "8");
        press(&mut app, KeyCode::Right);
        type_str(&mut app, "10");

        let record = app.store.attendance("Math").copied().unwrap_or_default();
        assert_eq!(record.display_percentage(), "80.0%");
    }

    #[test]
    fn test_q_does_not_quit_while_attendance_focused() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert!(press(&mut app, KeyCode::Char('q')).is_empty());

        assert!(press(&mut app, KeyCode::Esc).is_empty());
        assert_eq!(app.focus, Focus::Timetable);
    }

    #[test]
    fn test_enter_on_notes_requests_line() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(
            press(&mut app, KeyCode::Enter),
            vec![UiEffect::RequestLine {
                list: ListKind::Notes
            }]
        );
    }

    #[test]
    fn test_assignment_flow_through_reducer() {
        let mut app = app().with_today(Some(Weekday::Monday));
        // Monday period 1 is Math in the built-in table
        press(&mut app, KeyCode::Enter);
        assert!(app.store.session().is_open());

        // 'q' is text while the editor is open
        type_str(&mut app, "quiz");
        assert_eq!(app.store.session().text(), "quiz");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Enter);
        assert!(!app.store.session().is_open());
        assert_eq!(app.store.assignment(Weekday::Monday, 1), Some("quiz"));
    }

    #[test]
    fn test_ctrl_c_quits_from_open_editor() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "draft");

        assert_eq!(ctrl(&mut app, 'c'), vec![UiEffect::Quit]);
        assert!(!app.store.session().is_open());
        assert_eq!(app.store.assignment(Weekday::Monday, 1), None);
    }

    #[test]
    fn test_paste_goes_to_open_editor() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        update(&mut app, UiEvent::Terminal(Event::Paste("read ch. 4".into())));
        assert_eq!(app.store.session().text(), "read ch. 4");
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(update(&mut app, UiEvent::Terminal(Event::Key(key))).is_empty());
    }

    #[test]
    fn test_day_changed_sets_today() {
        let mut app = app();
        update(&mut app, UiEvent::DayChanged(Some(Weekday::Friday)));
        assert_eq!(app.today, Some(Weekday::Friday));
    }
}
