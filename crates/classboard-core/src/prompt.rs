//! Line prompt capability.
//!
//! Notes and events are entered through a "ask the user for one line" call
//! supplied by the host. The store only sees this trait, so the terminal UI
//! and tests can plug in their own implementations.

use std::collections::VecDeque;

/// Synchronously asks the user for a single line of text.
pub trait LinePrompt {
    /// Shows `message` and returns the entered line, or `None` when the user
    /// cancelled.
    fn request_line(&mut self, message: &str) -> Option<String>;
}

/// Prompt that replays canned answers in order.
///
/// Each call consumes one answer; once exhausted every call is a cancel.
/// Messages it was asked are recorded in `asked`.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompt {
    answers: VecDeque<Option<String>>,
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(|a| a.map(Into::into)).collect(),
            asked: Vec::new(),
        }
    }
}

impl LinePrompt for ScriptedPrompt {
    fn request_line(&mut self, message: &str) -> Option<String> {
        self.asked.push(message.to_string());
        self.answers.pop_front().flatten()
    }
}
