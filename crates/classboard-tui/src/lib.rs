//! Full-screen TUI implementation for Classboard.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use classboard_core::config::Config;
pub use features::{attendance, lists, timetable};
pub use runtime::TuiRuntime;
use tracing::info;

use crate::state::AppState;

/// Fails unless stdout is an interactive terminal.
///
/// # Errors
/// Returns an error suggesting `classboard timetable` when stdout is redirected.
pub fn ensure_terminal() -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The dashboard requires a terminal.\n\
             Use `classboard timetable` to print the timetable instead."
        );
    }
    Ok(())
}

/// Runs the interactive dashboard until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal, the config holds an invalid
/// timetable, or the terminal cannot be driven.
pub fn run_dashboard(config: &Config) -> Result<()> {
    ensure_terminal()?;

    let state = AppState::from_config(config)?;
    info!(
        subjects = state.store.tracked_subjects().len(),
        today = ?state.today,
        "starting dashboard"
    );

    let mut runtime = TuiRuntime::new(state)?;
    runtime.run()?;

    let store = &runtime.state.store;
    info!(
        notes = store.notes().len(),
        events = store.events().len(),
        assignments = store.assignments().count(),
        "dashboard closed"
    );
    Ok(())
}
