//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! Frame, and never mutate state or return effects.

use classboard_core::ListKind;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::overlays::assignment;
use crate::state::{AppState, Focus};
use crate::{attendance, lists, timetable};

const SUBTITLE: &str = "Manage your subjects, notes, attendance, and assignments easily.";

/// Header: title and subtitle.
const HEADER_HEIGHT: u16 = 2;

/// Timetable: borders, header row and one row per school day.
const TIMETABLE_HEIGHT: u16 = 8;

const PREVIEW_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TIMETABLE_HEIGHT),
            Constraint::Length(PREVIEW_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    render_header(app, frame, chunks[0]);
    timetable::render_timetable(app, frame, chunks[1]);
    timetable::render_preview(app, frame, chunks[2]);
    render_panes(app, frame, chunks[3]);
    render_status_line(app, frame, chunks[4]);

    // Overlay last so it draws on top
    assignment::render(&app.store, frame, area);
}

fn render_header(app: &AppState, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            app.title.as_str(),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::DarkGray))).centered(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_panes(app: &AppState, frame: &mut Frame, area: Rect) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    attendance::render_attendance(app, frame, panes[0]);
    lists::render_list(app, ListKind::Notes, frame, panes[1]);
    lists::render_list(app, ListKind::Events, frame, panes[2]);
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let hints: &[(&str, &str)] = if app.store.session().is_open() {
        &[("Enter", "save"), ("Alt+Enter", "newline"), ("Esc", "cancel")]
    } else {
        match app.focus {
            Focus::Timetable => &[
                ("←↑↓→", "move"),
                ("Enter", "assignment"),
                ("Tab", "next pane"),
                ("q", "quit"),
            ],
            Focus::Attendance => &[
                ("↑↓", "subject"),
                ("←→", "present/total"),
                ("0-9", "type"),
                ("Tab", "next pane"),
                ("Esc", "back"),
            ],
            Focus::Notes | Focus::Events => &[
                ("a", "add"),
                ("Tab", "next pane"),
                ("q", "quit"),
            ],
        }
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use classboard_core::{AttendanceField, Store, Timetable, Weekday};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn app() -> AppState {
        AppState::new(Store::default(), Timetable::section_h(), "Section H - Timetable")
    }

    fn draw(app: &AppState) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_header_and_timetable() {
        let screen = draw(&app());
        assert!(screen.contains("Section H - Timetable"));
        assert!(screen.contains("Monday"));
        assert!(screen.contains("Friday"));
        assert!(screen.contains("Period 7"));
    }

    #[test]
    fn test_renders_attendance_percentage() {
        let mut app = app();
        app.store
            .set_attendance_field("Math", AttendanceField::Present, "8");
        app.store
            .set_attendance_field("Math", AttendanceField::Total, "10");

        let screen = draw(&app);
        assert!(screen.contains("80.0%"));
        assert!(screen.contains("Attendance: —"));
    }

    #[test]
    fn test_renders_notes_and_events() {
        let mut app = app();
        app.store.append_note(Some("Bring calculator".to_string()));
        app.store.append_event(Some("Sports day".to_string()));

        let screen = draw(&app);
        assert!(screen.contains("Bring calculator"));
        assert!(screen.contains("Sports day"));
    }

    #[test]
    fn test_renders_assignment_overlay_when_open() {
        let mut app = app();
        app.store.open_assignment_editor(Weekday::Monday, 3, "TEM");

        let screen = draw(&app);
        assert!(screen.contains("TEM - Monday (Period 3)"));
        assert!(screen.contains("Enter assignment details..."));

        app.store.close_assignment_editor();
        let screen = draw(&app);
        assert!(!screen.contains("TEM - Monday (Period 3)"));
    }
}
