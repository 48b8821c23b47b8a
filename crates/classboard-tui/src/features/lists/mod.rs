//! Notes and events feature slice.
//!
//! Both lists share one renderer and one key handler, parameterised by
//! `ListKind`. New entries come from the blocking line prompt, which the
//! runtime runs in response to `UiEffect::RequestLine`.

mod render;
mod update;

pub use render::render_list;
pub use update::handle_key;
