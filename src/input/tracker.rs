//! Viewport-to-canvas coordinate mapping.
//!
//! The backing store of a surface is often a different resolution from the
//! size it is laid out at (HiDPI, CSS scaling, zoomed views), so pointer
//! positions have to be rescaled per axis before they can be drawn with.

use crate::element::HostElement;
use crate::error::CanvasError;
use crate::util::{Point, Size, ViewportRect};

/// Horizontal and vertical `backing / display` ratios.
///
/// # Errors
/// [`CanvasError::DegenerateGeometry`] when either size has a zero (or
/// non-finite) dimension, or when a ratio overflows (a subnormal display
/// size, for instance).
pub fn scale_factors(backing: Size, display: Size) -> Result<(f64, f64), CanvasError> {
    let degenerate = || CanvasError::DegenerateGeometry {
        backing_width: backing.width,
        backing_height: backing.height,
        display_width: display.width,
        display_height: display.height,
    };

    if !backing.is_valid() || !display.is_valid() {
        return Err(degenerate());
    }

    let sx = backing.width / display.width;
    let sy = backing.height / display.height;
    if !sx.is_finite() || !sy.is_finite() {
        return Err(degenerate());
    }
    Ok((sx, sy))
}

/// Maps a viewport-space point into the element's canvas space.
///
/// `(raw - bounds.origin) * scale`, with the scale computed independently for
/// each axis. A mapped point that is not finite is rejected the same way as
/// degenerate sizes, so it can never become a stroke endpoint.
pub fn map_to_canvas(
    raw: Point,
    bounds: ViewportRect,
    backing: Size,
    display: Size,
) -> Result<Point, CanvasError> {
    let (sx, sy) = scale_factors(backing, display)?;
    let offset = raw - bounds.origin();
    let mapped = Point::new(offset.x * sx, offset.y * sy);
    if !mapped.is_finite() {
        return Err(CanvasError::DegenerateGeometry {
            backing_width: backing.width,
            backing_height: backing.height,
            display_width: display.width,
            display_height: display.height,
        });
    }
    Ok(mapped)
}

/// Reads the element's current geometry and maps `raw` into canvas space.
///
/// Geometry is queried on every call; elements can be resized or scrolled
/// between events.
pub fn update_position<E: HostElement + ?Sized>(
    element: &E,
    raw: Point,
) -> Result<Point, CanvasError> {
    map_to_canvas(
        raw,
        element.bounding_rect(),
        element.backing_size(),
        element.display_size(),
    )
}
