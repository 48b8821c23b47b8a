//! Attendance pane rendering.

use classboard_core::attendance::NO_PERCENTAGE;
use classboard_core::{AttendanceField, AttendanceRecord};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::state::{AppState, Focus};

/// Minimum width of an input box's text.
const INPUT_WIDTH: usize = 4;

/// Renders two lines per tracked subject: name with percentage, then the inputs.
pub fn render_attendance(app: &AppState, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Attendance && !app.store.session().is_open();
    let border_color = if focused { Color::Cyan } else { Color::Blue };

    let mut lines = Vec::new();
    for (index, subject) in app.store.tracked_subjects().iter().enumerate() {
        let selected = focused && index == app.attendance.selected();
        let name_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let percentage = app
            .store
            .attendance(subject)
            .map(AttendanceRecord::display_percentage)
            .unwrap_or_else(|| NO_PERCENTAGE.to_string());
        lines.push(Line::from(vec![
            Span::styled(subject.clone(), name_style),
            Span::styled("  Attendance: ", Style::default().fg(Color::Gray)),
            Span::styled(
                percentage,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        let mut spans = vec![Span::raw("  ")];
        for field in [AttendanceField::Present, AttendanceField::Total] {
            let active = selected && app.attendance.field() == field;
            spans.push(Span::styled(
                format!("{}: ", field.label()),
                Style::default().fg(Color::Gray),
            ));
            spans.push(input_span(app.attendance.buffer(subject, field), active));
            spans.push(Span::raw("  "));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Attendance ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Input box: `[8   ]`, placeholder `0` when empty, cursor when active.
fn input_span(value: &str, active: bool) -> Span<'static> {
    let shown = if active {
        format!("{value}█")
    } else if value.is_empty() {
        "0".to_string()
    } else {
        value.to_string()
    };
    let style = match (active, value.is_empty()) {
        (true, _) => Style::default().fg(Color::Black).bg(Color::LightCyan),
        (false, true) => Style::default().fg(Color::DarkGray).bg(Color::Black),
        (false, false) => Style::default().fg(Color::White).bg(Color::Black),
    };
    Span::styled(format!("[{shown:<width$}]", width = INPUT_WIDTH), style)
}
