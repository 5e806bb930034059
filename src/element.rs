//! Host elements: the thing a drawing surface lives in.
//!
//! A host element owns the backing pixel store, knows how large it is laid out
//! on screen and where, and hands out 2D contexts for drawing into it. The
//! widget only holds a handle; the host may resize, move or redraw the element
//! at any time between events.

use crate::draw::{CairoSurface, DrawingSurface};
use crate::error::CanvasError;
use crate::util::{Point, Size, ViewportRect};
use log::debug;
use std::cell::RefCell;
use std::fs::File;
use std::path::Path;
use std::rc::Rc;

/// Element that hosts a drawing surface.
pub trait HostElement {
    /// Context type handed out by [`context_2d`](Self::context_2d).
    type Surface: DrawingSurface;

    /// Resolution of the backing pixel store.
    fn backing_size(&self) -> Size;

    /// Size the element is laid out at on screen.
    fn display_size(&self) -> Size;

    /// Element bounds in viewport coordinates.
    fn bounding_rect(&self) -> ViewportRect;

    /// Acquires a 2D drawing context for the backing store.
    fn context_2d(&self) -> Result<Self::Surface, CanvasError>;

    /// Replaces the backing store with one of the given resolution.
    ///
    /// Contexts acquired earlier may no longer target the new store and should
    /// be re-acquired.
    fn resize(&self, width: u32, height: u32) -> Result<(), CanvasError>;
}

struct ImageElementInner {
    surface: cairo::ImageSurface,
    display: Size,
    offset: Point,
}

/// Off-screen host element backed by a Cairo image surface.
///
/// Cloning yields another handle to the same element, so the host can keep
/// adjusting layout (display size, viewport offset) after handing a clone to
/// the widget.
#[derive(Clone)]
pub struct ImageElement {
    inner: Rc<RefCell<ImageElementInner>>,
}

impl ImageElement {
    /// Creates a transparent element whose display size equals its backing
    /// size and which sits at the viewport origin.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let surface = create_surface(width, height)?;
        Ok(Self {
            inner: Rc::new(RefCell::new(ImageElementInner {
                surface,
                display: Size::new(width as f64, height as f64),
                offset: Point::ORIGIN,
            })),
        })
    }

    /// Changes the on-screen layout size without touching the backing store.
    pub fn set_display_size(&self, width: f64, height: f64) {
        self.inner.borrow_mut().display = Size::new(width, height);
    }

    /// Moves the element's top-left corner in the viewport.
    pub fn set_viewport_offset(&self, left: f64, top: f64) {
        self.inner.borrow_mut().offset = Point::new(left, top);
    }

    /// Copies the current backing store into a new, exclusively owned surface.
    ///
    /// The copy can be read with `ImageSurface::data` even while a context on
    /// the original is still alive.
    pub fn snapshot(&self) -> Result<cairo::ImageSurface, CanvasError> {
        let inner = self.inner.borrow();
        inner.surface.flush();
        let copy = create_surface(
            inner.surface.width() as u32,
            inner.surface.height() as u32,
        )?;
        {
            let ctx = cairo::Context::new(&copy)?;
            ctx.set_source_surface(&inner.surface, 0.0, 0.0)?;
            ctx.paint()?;
        }
        Ok(copy)
    }

    /// Encodes the backing store as PNG at `path`.
    pub fn write_png(&self, path: &Path) -> Result<(), CanvasError> {
        let inner = self.inner.borrow();
        inner.surface.flush();
        let mut file = File::create(path)?;
        inner
            .surface
            .write_to_png(&mut file)
            .map_err(|err| CanvasError::Image(format!("{}: {err}", path.display())))?;
        Ok(())
    }
}

impl HostElement for ImageElement {
    type Surface = CairoSurface;

    fn backing_size(&self) -> Size {
        let inner = self.inner.borrow();
        Size::new(inner.surface.width() as f64, inner.surface.height() as f64)
    }

    fn display_size(&self) -> Size {
        self.inner.borrow().display
    }

    fn bounding_rect(&self) -> ViewportRect {
        let inner = self.inner.borrow();
        ViewportRect::new(
            inner.offset.x,
            inner.offset.y,
            inner.display.width,
            inner.display.height,
        )
    }

    fn context_2d(&self) -> Result<CairoSurface, CanvasError> {
        let inner = self.inner.borrow();
        let ctx = cairo::Context::new(&inner.surface)
            .map_err(|err| CanvasError::ContextUnavailable(err.to_string()))?;
        Ok(CairoSurface::new(ctx))
    }

    fn resize(&self, width: u32, height: u32) -> Result<(), CanvasError> {
        let mut inner = self.inner.borrow_mut();
        let resized = create_surface(width, height)?;
        {
            // Keep what has been drawn so far, anchored at the top-left corner.
            let ctx = cairo::Context::new(&resized)?;
            ctx.set_source_surface(&inner.surface, 0.0, 0.0)?;
            ctx.paint()?;
        }
        debug!(
            "Resized backing store {}x{} -> {}x{}",
            inner.surface.width(),
            inner.surface.height(),
            width,
            height
        );
        inner.surface = resized;
        Ok(())
    }
}

fn create_surface(width: u32, height: u32) -> Result<cairo::ImageSurface, CanvasError> {
    let width = i32::try_from(width)
        .map_err(|_| CanvasError::ContextUnavailable(format!("width {width} too large")))?;
    let height = i32::try_from(height)
        .map_err(|_| CanvasError::ContextUnavailable(format!("height {height} too large")))?;
    Ok(cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        width,
        height,
    )?)
}
