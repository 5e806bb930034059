//! Drawing primitives and the surface abstraction.
//!
//! This module defines:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`DrawingSurface`]: the immediate-mode 2D context the widget renders through
//! - [`CairoSurface`]: a Cairo-based implementation of that context

pub mod color;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use render::CairoSurface;
pub use surface::DrawingSurface;

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
