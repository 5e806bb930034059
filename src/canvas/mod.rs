//! The drawing widget: pointer handlers bound to a host element's surface.

use crate::config::{BrushSettings, Config, Settings};
use crate::draw::{Color, DrawingSurface};
use crate::element::HostElement;
use crate::error::CanvasError;
use crate::input::{PointerEvent, PointerState, Segment, Stabilizer, tracker};
use crate::util::Point;
use log::{debug, error, info, warn};
use std::path::Path;


/// Freehand drawing widget with pointer stabilization.
///
/// The widget owns its [`PointerState`] and a handle to the host element. It
/// exposes one plain handler per pointer event kind; the host wires those to
/// whatever event loop it runs, or feeds [`PointerEvent`]s to
/// [`dispatch`](Self::dispatch).
///
/// Every segment is stroked as soon as it is computed (begin path, move to the
/// last committed point, line to the new one, stroke), so a stroke of `n`
/// moves costs `n` small strokes rather than re-stroking an ever-growing path.
///
/// If no drawing context could be acquired the widget stays usable but inert:
/// drawing operations are skipped with a debug log.
pub struct Canvas<E: HostElement> {
    element: E,
    surface: Option<E::Surface>,
    config: Config,
    stabilizer: Stabilizer,
    pointer: PointerState,
}

impl<E: HostElement> Canvas<E> {
    /// Creates a widget with `settings` merged over the defaults.
    ///
    /// Context acquisition failures are logged and leave the widget without a
    /// surface; see [`try_new`](Self::try_new) to get the error instead.
    pub fn new(element: E, settings: &Settings) -> Self {
        Self::with_config(element, Config::from_settings(settings))
    }

    /// Like [`new`](Self::new) but fails if no drawing context is available.
    pub fn try_new(element: E, settings: &Settings) -> Result<Self, CanvasError> {
        let surface = element.context_2d()?;
        Ok(Self::assemble(
            element,
            Some(surface),
            Config::from_settings(settings),
        ))
    }

    /// Creates a widget from an already merged configuration.
    pub fn with_config(element: E, config: Config) -> Self {
        let surface = match element.context_2d() {
            Ok(surface) => Some(surface),
            Err(err) => {
                error!("Couldn't acquire a 2D context for the canvas element: {err}");
                None
            }
        };
        Self::assemble(element, surface, config)
    }

    fn assemble(element: E, surface: Option<E::Surface>, config: Config) -> Self {
        let mut canvas = Self {
            element,
            surface,
            stabilizer: Stabilizer::from_config(&config.stabilizer),
            config,
            pointer: PointerState::new(),
        };
        canvas.apply_settings();
        canvas
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn is_drawing(&self) -> bool {
        self.pointer.is_drawing()
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// The drawing context, or `None` if acquisition failed.
    pub fn surface(&self) -> Option<&E::Surface> {
        self.surface.as_ref()
    }

    /// Returns true if the widget has a drawing context to render into.
    pub fn is_functional(&self) -> bool {
        self.surface.is_some()
    }

    // ------------------------------------------------------------------------
    // Style
    // ------------------------------------------------------------------------

    /// Applies the brush settings to the drawing context.
    pub fn apply_settings(&mut self) -> &mut Self {
        let brush = &self.config.brush;
        let color = self.config.brush_color();
        if let Some(surface) = self.surface.as_mut() {
            surface.set_line_width(brush.size);
            surface.set_line_cap(brush.ends);
            surface.set_line_join(brush.joins);
            surface.set_stroke_color(color);
        }
        self
    }

    /// Changes the brush color and applies it immediately.
    pub fn set_brush_color(&mut self, color: Color) -> &mut Self {
        self.config.apply(&Settings {
            brush: BrushSettings {
                color: Some(color.into()),
                ..Default::default()
            },
            ..Default::default()
        });
        let color = self.config.brush_color();
        if let Some(surface) = self.surface.as_mut() {
            surface.set_stroke_color(color);
        }
        self
    }

    /// Changes the brush width and applies it immediately.
    ///
    /// The width goes through the same validation as configured values.
    pub fn set_brush_size(&mut self, size: f64) -> &mut Self {
        self.config.apply(&Settings {
            brush: BrushSettings {
                size: Some(size),
                ..Default::default()
            },
            ..Default::default()
        });
        let size = self.config.brush.size;
        if let Some(surface) = self.surface.as_mut() {
            surface.set_line_width(size);
        }
        self
    }

    // ------------------------------------------------------------------------
    // Pointer handlers
    // ------------------------------------------------------------------------

    /// Routes an event to its handler.
    pub fn dispatch(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move { x, y } => self.on_pointer_move(Point::new(x, y)),
            PointerEvent::Down => self.on_pointer_down(),
            PointerEvent::Up => self.on_pointer_up(),
            PointerEvent::Leave => self.on_pointer_leave(),
        }
    }

    /// Handles a pointer move to `viewport_point`.
    ///
    /// Always updates the tracked position; while a stroke is active it also
    /// draws exactly one segment. Moves that arrive while the element has a
    /// zero-sized backing store or layout are dropped and the last valid
    /// position is kept.
    pub fn on_pointer_move(&mut self, viewport_point: Point) {
        let position = match tracker::update_position(&self.element, viewport_point) {
            Ok(position) => position,
            Err(err) => {
                debug!("Ignoring pointer move: {err}");
                return;
            }
        };

        if let Some(segment) = self.pointer.advance(position, &self.stabilizer) {
            self.draw_segment(segment);
        }
    }

    /// Handles a pointer press: starts a stroke at the tracked position.
    pub fn on_pointer_down(&mut self) {
        let start = self.pointer.press();
        debug!("Stroke started at ({:.1}, {:.1})", start.x, start.y);
        if let Some(surface) = self.surface.as_mut() {
            surface.begin_path();
            surface.move_to(start);
        }
    }

    /// Handles a pointer release: ends the active stroke, if any.
    pub fn on_pointer_up(&mut self) {
        self.end_stroke();
    }

    /// Handles the pointer leaving the element: treated exactly like a release
    /// so strokes never continue off-canvas.
    pub fn on_pointer_leave(&mut self) {
        self.end_stroke();
    }

    fn end_stroke(&mut self) {
        if !self.pointer.is_drawing() {
            return;
        }
        let closing = self.pointer.release(&self.stabilizer);
        debug!("Stroke ended");
        if let Some(segment) = closing {
            self.draw_segment(segment);
        }
    }

    fn draw_segment(&mut self, segment: Segment) {
        let Some(surface) = self.surface.as_mut() else {
            debug!("No drawing context; dropping segment");
            return;
        };
        surface.begin_path();
        surface.move_to(segment.from);
        surface.line_to(segment.to);
        if let Err(err) = surface.stroke() {
            warn!("Failed to stroke segment: {err}");
        }
    }

    // ------------------------------------------------------------------------
    // Whole-surface operations
    // ------------------------------------------------------------------------

    /// Clears the canvas.
    ///
    /// `None` or a fully transparent color erases to full transparency; any
    /// other color fills without disturbing the brush style.
    pub fn clear(&mut self, color: Option<Color>) -> &mut Self {
        let size = self.element.backing_size();
        if let Some(surface) = self.surface.as_mut() {
            let result = match color {
                Some(color) if color.a > 0.0 => {
                    fill_surface(surface, color, size.width, size.height)
                }
                _ => surface.clear_rect(0.0, 0.0, size.width, size.height),
            };
            if let Err(err) = result {
                warn!("Failed to clear canvas: {err}");
            }
        } else {
            debug!("No drawing context; skipping clear");
        }
        self
    }

    /// Fills the canvas with the configured clear color.
    pub fn clear_to_background(&mut self) -> &mut Self {
        let color = self.config.clear_color();
        self.clear(Some(color))
    }

    /// Draws the PNG at `path` stretched over the whole canvas.
    ///
    /// Load failures are logged and otherwise ignored.
    pub fn draw_image(&mut self, path: &Path) -> &mut Self {
        let size = self.element.backing_size();
        match self.surface.as_mut() {
            Some(surface) => match surface.draw_image(path, 0.0, 0.0, size.width, size.height) {
                Ok(()) => debug!("Drew image {}", path.display()),
                Err(err) => warn!("Failed to draw image {}: {err}", path.display()),
            },
            None => debug!("No drawing context; skipping image {}", path.display()),
        }
        self
    }

    /// Resizes the element's backing store, keeping the current drawing.
    ///
    /// The drawing context is re-acquired for the new store and the brush
    /// settings re-applied. An active stroke carries on from its last point.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), CanvasError> {
        self.element.resize(width, height)?;
        match self.element.context_2d() {
            Ok(surface) => self.surface = Some(surface),
            Err(err) => {
                self.surface = None;
                return Err(err);
            }
        }
        self.apply_settings();
        if let Some(last) = self.pointer.last_committed() {
            if let Some(surface) = self.surface.as_mut() {
                surface.begin_path();
                surface.move_to(last);
            }
        }
        info!("Canvas resized to {width}x{height}");
        Ok(())
    }
}

/// Fills the whole surface with `color`, leaving the fill style untouched.
fn fill_surface<S: DrawingSurface>(
    surface: &mut S,
    color: Color,
    width: f64,
    height: f64,
) -> Result<(), CanvasError> {
    surface.save()?;
    surface.set_fill_color(color);
    let filled = surface.fill_rect(0.0, 0.0, width, height);
    surface.restore()?;
    filled
}
