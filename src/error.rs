//! Error types shared by the widget and its collaborators.

use thiserror::Error;

/// Errors that can occur while driving the drawing surface.
///
/// None of these are fatal to the widget: handlers log them and carry on, so a
/// host only sees them when calling the fallible entry points directly
/// (e.g. [`Canvas::try_new`](crate::Canvas::try_new)).
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("2D drawing context unavailable: {0}")]
    ContextUnavailable(String),

    #[error(
        "Degenerate element geometry (backing {backing_width}x{backing_height}, display {display_width}x{display_height})"
    )]
    DegenerateGeometry {
        backing_width: f64,
        backing_height: f64,
        display_width: f64,
        display_height: f64,
    },

    #[error("Failed to load image: {0}")]
    Image(String),

    #[error("Drawing surface error: {0}")]
    Surface(#[from] cairo::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
