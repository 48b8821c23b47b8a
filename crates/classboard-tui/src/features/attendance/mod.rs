//! Attendance feature slice.
//!
//! Each tracked subject has two numeric inputs (present, total). Like a form
//! field, every edit forwards the input's whole raw text to the store, which
//! coerces it to a number.
//!
//! ## Module Structure
//!
//! - `state.rs`: AttendanceInputs (raw input text and selection)
//! - `update.rs`: key handling
//! - `render.rs`: attendance pane rendering

mod render;
mod state;
mod update;

pub use render::render_attendance;
pub use state::AttendanceInputs;
pub use update::handle_key;
