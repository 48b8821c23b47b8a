//! UI event types fed to the reducer.

use classboard_core::Weekday;
use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Raw terminal input (keys, paste, resize).
    Terminal(Event),
    /// The local date moved to a different (school) day.
    DayChanged(Option<Weekday>),
}
