//! HTML template rendering handlers.

mod index;

pub use index::{IndexTemplate, index_handler, render_index};
