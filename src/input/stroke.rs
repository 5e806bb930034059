//! Pointer-to-stroke state machine.

use super::stabilizer::Stabilizer;
use crate::util::Point;

/// Current stroke mode.
///
/// Tracks whether the pointer is idle or actively drawing. State transitions
/// only happen through [`PointerState::press`] and [`PointerState::release`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeState {
    /// Not drawing - pointer moves only update the tracked position
    Idle,
    /// Pointer is down; segments are emitted on every move
    Drawing {
        /// Last committed (possibly smoothed) position of the stroke
        last: Point,
    },
}

/// A straight line piece of a stroke, in canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Pointer position plus stroke mode, owned by one widget.
///
/// Starts at the origin in [`StrokeState::Idle`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointerState {
    current: Point,
    stroke: StrokeState,
}

impl PointerState {
    pub fn new() -> Self {
        Self {
            current: Point::ORIGIN,
            stroke: StrokeState::Idle,
        }
    }

    /// Latest raw pointer position in canvas space.
    pub fn current(&self) -> Point {
        self.current
    }

    pub fn stroke(&self) -> StrokeState {
        self.stroke
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.stroke, StrokeState::Drawing { .. })
    }

    /// Last committed point of the active stroke, if any.
    pub fn last_committed(&self) -> Option<Point> {
        match self.stroke {
            StrokeState::Drawing { last } => Some(last),
            StrokeState::Idle => None,
        }
    }

    /// Records a new raw pointer position and, when drawing, commits the next
    /// stroke point.
    ///
    /// Returns the segment to draw, or `None` while idle. Exactly one segment
    /// is produced per call while a stroke is active.
    pub fn advance(&mut self, position: Point, stabilizer: &Stabilizer) -> Option<Segment> {
        self.current = position;

        match &mut self.stroke {
            StrokeState::Idle => None,
            StrokeState::Drawing { last } => {
                let from = *last;
                let to = stabilizer.target(from, position);
                *last = to;
                Some(Segment { from, to })
            }
        }
    }

    /// Starts a stroke at the current raw position and returns that point.
    ///
    /// Pressing while a stroke is already active restarts it at the current
    /// position.
    pub fn press(&mut self) -> Point {
        self.stroke = StrokeState::Drawing { last: self.current };
        self.current
    }

    /// Ends the active stroke.
    ///
    /// Returns the closing segment from the last committed point to the raw
    /// position when the stabilizer asks for one. Has no effect while idle, so
    /// repeated releases transition only once.
    pub fn release(&mut self, stabilizer: &Stabilizer) -> Option<Segment> {
        let StrokeState::Drawing { last } = self.stroke else {
            return None;
        };
        self.stroke = StrokeState::Idle;

        stabilizer.closes_strokes().then_some(Segment {
            from: last,
            to: self.current,
        })
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}
