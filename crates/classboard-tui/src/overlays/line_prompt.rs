//! One-line text prompt overlay.
//!
//! Backs the blocking `LinePrompt` the runtime hands to the store when a note
//! or event is added. Key handling is pure so it can be tested without a
//! terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::render_utils::{InputHint, InputLine, OverlayConfig, render_input_line, render_overlay};

/// Shown while the input is empty; an empty answer appends nothing.
const PLACEHOLDER: &str = "Type a line, or press Enter on empty to skip";

/// Outcome of one key press in the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    Continue,
    /// User confirmed; carries the entered text (possibly empty).
    Submit(String),
    Cancel,
}

/// State for the line prompt overlay.
#[derive(Debug, Clone)]
pub struct LinePromptState {
    pub message: String,
    pub input: String,
}

impl LinePromptState {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            input: String::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptStep {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => PromptStep::Cancel,
            KeyCode::Char('c') if ctrl => PromptStep::Cancel,
            KeyCode::Enter => PromptStep::Submit(std::mem::take(&mut self.input)),
            KeyCode::Backspace => {
                self.input.pop();
                PromptStep::Continue
            }
            KeyCode::Char('u') if ctrl => {
                self.input.clear();
                PromptStep::Continue
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                PromptStep::Continue
            }
            _ => PromptStep::Continue,
        }
    }

    /// Inserts pasted text; line breaks become spaces since the prompt is one line.
    pub fn handle_paste(&mut self, text: &str) {
        let flattened: String = text
            .chars()
            .filter(|c| *c != '\r')
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        self.input.push_str(&flattened);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [
            InputHint::new("Enter", "ok"),
            InputHint::new("Esc", "cancel"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Input",
                border_color: Color::Yellow,
                width: 60,
                height: 6,
                hints: &hints,
            },
        );

        let message_area = Rect::new(layout.body.x, layout.body.y, layout.body.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                self.message.as_str(),
                Style::default().fg(Color::Gray),
            ))),
            message_area,
        );

        let input_area = Rect::new(layout.body.x, layout.body.y + 2, layout.body.width, 1);
        render_input_line(
            frame,
            input_area,
            &InputLine {
                value: &self.input,
                placeholder: Some(PLACEHOLDER),
                prompt: "> ",
                text_color: Color::Yellow,
                cursor_color: Color::Yellow,
            },
        );
    }
}
