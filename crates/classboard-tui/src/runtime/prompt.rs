use std::io::Stdout;

use anyhow::Result;
use classboard_core::LinePrompt;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use tracing::warn;

use crate::overlays::{LinePromptState, PromptStep};

/// Blocking line prompt that takes over the terminal until the user answers.
///
/// Draws the prompt overlay on top of `backdrop` (the last dashboard frame)
/// and runs its own read loop, so the caller sees a plain synchronous call.
pub struct TerminalPrompt<'a> {
    terminal: &'a mut Terminal<CrosstermBackend<Stdout>>,
    backdrop: &'a Buffer,
}

impl<'a> TerminalPrompt<'a> {
    pub fn new(terminal: &'a mut Terminal<CrosstermBackend<Stdout>>, backdrop: &'a Buffer) -> Self {
        Self { terminal, backdrop }
    }

    fn read_line(&mut self, message: &str) -> Result<Option<String>> {
        let mut state = LinePromptState::new(message);

        loop {
            self.terminal.draw(|frame| {
                let area = frame.area();
                if self.backdrop.area == area {
                    *frame.buffer_mut() = self.backdrop.clone();
                }
                state.render(frame, area);
            })?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match state.handle_key(key) {
                        PromptStep::Continue => {}
                        PromptStep::Submit(text) => return Ok(Some(text)),
                        PromptStep::Cancel => return Ok(None),
                    }
                }
                Event::Paste(text) => state.handle_paste(&text),
                _ => {}
            }
        }
    }
}

impl LinePrompt for TerminalPrompt<'_> {
    fn request_line(&mut self, message: &str) -> Option<String> {
        match self.read_line(message) {
            Ok(answer) => answer,
            Err(e) => {
                warn!("line prompt failed: {e:#}");
                None
            }
        }
    }
}
