//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//!
//! ## Module Structure
//!
//! - `assignment.rs`: Assignment editor (driven by the store's editor session)
//! - `line_prompt.rs`: One-line text prompt used for notes and events
//! - `render_utils.rs`: Shared rendering utilities for overlays

pub mod assignment;
pub mod line_prompt;
pub mod render_utils;

pub use line_prompt::{LinePromptState, PromptStep};
