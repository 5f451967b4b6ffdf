// Render module - UI rendering functions

pub mod content;

pub use content::{render_app, row_block_height};
