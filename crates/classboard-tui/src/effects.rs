//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state and returns effects; anything that needs
//! the terminal (such as the blocking line prompt) runs in the runtime.

use classboard_core::ListKind;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Ask the user for one line of text and append it to a list.
    RequestLine { list: ListKind },
}
