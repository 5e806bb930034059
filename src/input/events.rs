//! Pointer event types delivered by the host.

use crate::util::Point;
use serde::{Deserialize, Serialize};

/// Pointer notification in viewport coordinates.
///
/// Hosts translate their native events into these and hand them to
/// [`Canvas::dispatch`](crate::Canvas::dispatch), or call the matching
/// `on_pointer_*` handler directly.
///
/// Serialized as an internally tagged object, e.g.
/// `{"type": "move", "x": 110.0, "y": 110.0}` or `{"type": "down"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PointerEvent {
    /// Pointer moved to viewport position (x, y)
    Move { x: f64, y: f64 },
    /// Primary button pressed (or contact made)
    Down,
    /// Primary button released (or contact lifted)
    Up,
    /// Pointer left the element bounds
    Leave,
}

impl PointerEvent {
    /// Convenience constructor for a move event.
    pub fn moved(point: Point) -> Self {
        PointerEvent::Move {
            x: point.x,
            y: point.y,
        }
    }
}
