//! Pointer input handling and the stroke state machine.
//!
//! This module maps viewport-space pointer events to canvas space, smooths
//! pointer motion with the stabilizer, and decides when and where line
//! segments are emitted (idle vs. drawing).

pub mod events;
pub mod stabilizer;
pub mod stroke;
pub mod tracker;
#[cfg(test)]
mod tests;

// Re-export commonly used types at module level
pub use events::PointerEvent;
pub use stabilizer::Stabilizer;
pub use stroke::{PointerState, Segment, StrokeState};
pub use tracker::update_position;
