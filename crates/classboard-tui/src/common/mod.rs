//! Shared helpers used across feature slices.

pub mod text;

pub use text::{first_line_preview, truncate_start_with_ellipsis, truncate_with_ellipsis};
