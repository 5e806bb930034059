//! The 2D drawing surface the widget renders through.

use super::color::Color;
use crate::config::{LineCap, LineJoin};
use crate::error::CanvasError;
use crate::util::Point;
use std::path::Path;

/// Immediate-mode 2D rasterizing context.
///
/// Mirrors the subset of a canvas-style API the widget needs: path building,
/// stroking, rectangle fills and a handful of style properties. The widget
/// never reads pixels back through this trait.
///
/// Operations that can fail in a real rasterizer return a [`CanvasError`];
/// path building and style setters are infallible.
pub trait DrawingSurface {
    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);

    /// Starts a new sub-path at `point`.
    fn move_to(&mut self, point: Point);

    /// Adds a straight line from the current point to `point`.
    fn line_to(&mut self, point: Point);

    /// Strokes the current path with the current stroke style.
    fn stroke(&mut self) -> Result<(), CanvasError>;

    /// Erases the rectangle to full transparency.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), CanvasError>;

    /// Fills the rectangle with the current fill color.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), CanvasError>;

    /// Pushes the current style state.
    fn save(&mut self) -> Result<(), CanvasError>;

    /// Pops the style state pushed by the matching [`save`](Self::save).
    fn restore(&mut self) -> Result<(), CanvasError>;

    /// Loads the image at `path` and draws it scaled into the given rectangle.
    fn draw_image(
        &mut self,
        path: &Path,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), CanvasError>;

    fn set_line_width(&mut self, width: f64);

    fn set_line_cap(&mut self, cap: LineCap);

    fn set_line_join(&mut self, join: LineJoin);

    fn set_stroke_color(&mut self, color: Color);

    fn set_fill_color(&mut self, color: Color);
}
