//! Error types for compositing

use thiserror::Error;

/// Error when the canvas cannot be created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompositeError {
    /// No valid tile, so the bounding box has no area
    #[error("no valid maps to render (canvas would be {width}x{height})")]
    EmptyCanvas { width: i64, height: i64 },
    /// Width or height doesn't fit the image buffer
    #[error("canvas {width}x{height} is too large")]
    TooLarge { width: i64, height: i64 },
    /// The pixel buffer could not be allocated
    #[error("cannot allocate {bytes} bytes for a {width}x{height} canvas")]
    Allocation { width: u32, height: u32, bytes: usize },
}
