//! Notes/events pane rendering.

use classboard_core::ListKind;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::state::{AppState, Focus};

fn focus_for(kind: ListKind) -> Focus {
    match kind {
        ListKind::Notes => Focus::Notes,
        ListKind::Events => Focus::Events,
    }
}

/// Renders a list pane. When entries overflow, the newest ones stay visible.
pub fn render_list(app: &AppState, kind: ListKind, frame: &mut Frame, area: Rect) {
    let focused = app.focus == focus_for(kind) && !app.store.session().is_open();
    let border_color = if focused { Color::Cyan } else { Color::Blue };
    let entries = app.store.list(kind);

    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::from(Span::styled(
            "Nothing yet. Press a to add.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let visible = area.height.saturating_sub(2) as usize;
        let skip = entries.len().saturating_sub(visible);
        entries
            .iter()
            .skip(skip)
            .map(|entry| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::Cyan)),
                    Span::raw(entry.as_str()),
                ])
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ({}) ", kind.title(), entries.len()));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
