//! Assignment editor overlay.
//!
//! The editor has no state of its own: it edits the store's session buffer
//! through `Store::edit_assignment_text` and is visible while the session is
//! open.

use classboard_core::Store;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::render_utils::{InputHint, OverlayConfig, render_overlay};

const OVERLAY_WIDTH: u16 = 60;
const OVERLAY_HEIGHT: u16 = 12;
const PLACEHOLDER: &str = "Enter assignment details...";
const CURSOR: &str = "█";

/// Handles a key while the editor is open. Every key is consumed.
pub fn handle_key(store: &mut Store, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => store.close_assignment_editor(),
        KeyCode::Enter if alt => push_str(store, "\n"),
        KeyCode::Enter => {
            store.save_assignment();
        }
        KeyCode::Backspace => {
            let mut text = store.session().text().to_string();
            text.pop();
            store.edit_assignment_text(text);
        }
        KeyCode::Char('u') if ctrl => store.edit_assignment_text(""),
        KeyCode::Char(ch) if !ctrl => {
            let mut buf = [0; 4];
            push_str(store, ch.encode_utf8(&mut buf));
        }
        _ => {}
    }
}

/// Inserts pasted text at the end of the buffer.
pub fn handle_paste(store: &mut Store, text: &str) {
    push_str(store, &text.replace('\r', ""));
}

fn push_str(store: &mut Store, s: &str) {
    let text = format!("{}{s}", store.session().text());
    store.edit_assignment_text(text);
}

/// Renders the editor if the session is open.
pub fn render(store: &Store, frame: &mut Frame, area: Rect) {
    let session = store.session();
    if !session.is_open() {
        return;
    }

    let title = match session.cell() {
        Some(cell) => format!(
            "{} - {} (Period {})",
            session.subject(),
            cell.day(),
            cell.period()
        ),
        None => session.subject().to_string(),
    };
    let hints = [
        InputHint::new("Enter", "save"),
        InputHint::new("Alt+Enter", "newline"),
        InputHint::new("Esc", "cancel"),
    ];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: &title,
            border_color: Color::LightBlue,
            width: OVERLAY_WIDTH,
            height: OVERLAY_HEIGHT,
            hints: &hints,
        },
    );

    // One spacer row above the hints
    let text_area = Rect::new(
        layout.body.x,
        layout.body.y,
        layout.body.width,
        layout.body.height.saturating_sub(1),
    );
    let cursor = Span::styled(CURSOR, Style::default().fg(Color::LightBlue));

    let lines: Vec<Line> = if session.text().is_empty() {
        vec![Line::from(vec![
            cursor,
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])]
    } else {
        let width = text_area.width as usize;
        let mut rows = wrap_rows(session.text(), width);
        // The cursor needs one more cell; start a new row when the last is full
        if rows.last().is_some_and(|row| row.width() >= width) {
            rows.push(String::new());
        }
        let mut lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
        if let Some(last) = lines.last_mut() {
            last.push_span(cursor);
        }
        // Keep the end of the buffer (where typing happens) in view
        let overflow = lines.len().saturating_sub(text_area.height as usize);
        lines.split_off(overflow)
    };

    frame.render_widget(Paragraph::new(lines), text_area);
}

/// Splits `text` into display rows at most `width` cells wide.
///
/// Newlines start a new row; long lines break at the cell boundary.
fn wrap_rows(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;
        for ch in line.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if row_width + ch_width > width && row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(ch);
            row_width += ch_width;
        }
        rows.push(row);
    }
    rows
}
