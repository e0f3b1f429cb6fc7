//! Compositing - painting tiles onto a single canvas

mod canvas;
mod error;
mod render;

// Re-export public API
pub use canvas::{allocate_canvas, canvas_size, fill_canvas, paint_block};
pub use error::CompositeError;
pub use render::{composite, paint_tile, render_registry};

/// Result type alias for compositing operations.
pub type Result<T> = std::result::Result<T, CompositeError>;
