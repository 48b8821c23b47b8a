//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! Structure:
//! - `mod.rs`: Core runtime (TuiRuntime, event loop, effect dispatch)
//! - `prompt.rs`: Blocking line prompt drawn over the last frame

mod prompt;

use std::io::Stdout;
use std::time::Duration;

use anyhow::{Context, Result};
use classboard_core::Weekday;
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use tracing::debug;

use self::prompt::TerminalPrompt;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// How long to wait for input before re-checking the clock.
/// The dashboard has no animation, so this only bounds day-change latency.
pub const IDLE_POLL_DURATION: Duration = Duration::from_secs(1);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop or panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    /// Copy of the last drawn frame, used as the backdrop of the line prompt.
    backdrop: Buffer,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(state: AppState) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        Ok(Self {
            terminal,
            state,
            backdrop: Buffer::default(),
        })
    }

    /// Runs the main event loop.
    ///
    /// # Errors
    /// Returns an error if drawing or reading terminal input fails.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        let result = self.event_loop();

        let _ = terminal::disable_input_features();

        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            if dirty {
                let completed = self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                self.backdrop = completed.buffer.clone();
                dirty = false;
            }

            let today = Weekday::today();
            if today != self.state.today {
                self.dispatch_event(UiEvent::DayChanged(today));
                dirty = true;
            }

            if event::poll(IDLE_POLL_DURATION)? {
                self.dispatch_event(UiEvent::Terminal(event::read()?));
                // Drain any remaining buffered events (non-blocking)
                while event::poll(Duration::ZERO)? {
                    self.dispatch_event(UiEvent::Terminal(event::read()?));
                }
                dirty = true;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::RequestLine { list } => {
                debug!(list = list.title(), "opening line prompt");
                let mut prompt = TerminalPrompt::new(&mut self.terminal, &self.backdrop);
                self.state.store.request(list, &mut prompt);
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
