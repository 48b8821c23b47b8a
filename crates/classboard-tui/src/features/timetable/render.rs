//! Timetable rendering.

use classboard_core::{PERIODS_PER_DAY, Weekday};
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::common::{first_line_preview, truncate_with_ellipsis};
use crate::state::{AppState, Focus};

/// Width of the day-name column.
const DAY_COLUMN_WIDTH: u16 = 11;

/// Label shown for a free period.
const FREE_PERIOD: &str = "-";

/// Renders the weekly grid.
///
/// Cells holding an assignment are green. The cursor is drawn reversed while
/// the timetable has focus; today's row label is highlighted.
pub fn render_timetable(app: &AppState, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Timetable && !app.store.session().is_open();
    let border_color = if focused { Color::Cyan } else { Color::Blue };

    let header_style = Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(
        std::iter::once(Cell::from("Day")).chain(
            (1..=PERIODS_PER_DAY).map(|period| Cell::from(format!("Period {period}"))),
        ),
    )
    .style(header_style);

    let rows = Weekday::ALL.into_iter().map(|day| {
        let day_style = if app.today == Some(day) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        };
        let day_cell = Cell::from(day.name()).style(day_style);

        let period_cells = (1..=PERIODS_PER_DAY as u8).map(move |period| {
            let label = app.timetable.label(day, period);
            let mut style = if app.store.assignment(day, period).is_some() {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else if label.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            if focused && app.cursor.is_at(day, period) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let text = if label.is_empty() { FREE_PERIOD } else { label };
            Cell::from(text).style(style)
        });

        Row::new(std::iter::once(day_cell).chain(period_cells))
    });

    let widths = std::iter::once(Constraint::Length(DAY_COLUMN_WIDTH))
        .chain(std::iter::repeat_n(Constraint::Fill(1), PERIODS_PER_DAY));

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Timetable "),
    );
    frame.render_widget(table, area);
}

/// Renders one line describing the selected cell (its saved assignment, or
/// what Enter would do).
pub fn render_preview(app: &AppState, frame: &mut Frame, area: Rect) {
    let (day, period) = (app.cursor.day(), app.cursor.period());
    let location = format!(" {day} · Period {period}: ");

    let (detail, detail_style) = match (
        app.timetable.subject(day, period),
        app.store.assignment(day, period),
    ) {
        (_, Some(text)) => (
            format!("Assignment: {}", first_line_preview(text)),
            Style::default().fg(Color::Green),
        ),
        (Some(_), None) => (
            "Press Enter to add assignment".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        (None, None) => (
            "Free period".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let max_detail = (area.width as usize).saturating_sub(location.chars().count());
    let line = Line::from(vec![
        Span::styled(location, Style::default().fg(Color::Cyan)),
        Span::styled(truncate_with_ellipsis(&detail, max_detail), detail_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
