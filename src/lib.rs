//! Library exports for the ezcanvas drawing widget.
//!
//! Exposes the widget itself alongside the configuration, input and drawing
//! modules it is built from, so hosts can wire pointer events from whatever
//! event loop they run and render through any [`draw::DrawingSurface`].

pub mod canvas;
pub mod config;
pub mod draw;
pub mod element;
pub mod error;
pub mod input;
pub mod util;

pub use canvas::Canvas;
pub use config::{Config, Settings};
pub use error::CanvasError;
