//! Cairo-backed implementation of [`DrawingSurface`].

use super::color::{BLACK, Color};
use super::surface::DrawingSurface;
use crate::config::{LineCap, LineJoin};
use crate::error::CanvasError;
use crate::util::Point;
use std::fs::File;
use std::path::Path;

/// Drawing surface that rasterizes through a Cairo context.
///
/// Cairo has a single "source" instead of separate stroke and fill styles, so
/// both colors are tracked here and installed right before the operation that
/// uses them. [`save`](DrawingSurface::save)/[`restore`](DrawingSurface::restore)
/// cover both the Cairo graphics state and these two colors.
pub struct CairoSurface {
    ctx: cairo::Context,
    stroke_color: Color,
    fill_color: Color,
    saved_styles: Vec<(Color, Color)>,
}

impl CairoSurface {
    /// Wraps a Cairo context. Stroke and fill start out black, as on a fresh
    /// canvas.
    pub fn new(ctx: cairo::Context) -> Self {
        Self {
            ctx,
            stroke_color: BLACK,
            fill_color: BLACK,
            saved_styles: Vec::new(),
        }
    }

    /// Returns the underlying Cairo context.
    pub fn context(&self) -> &cairo::Context {
        &self.ctx
    }

    fn set_source(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }
}

impl DrawingSurface for CairoSurface {
    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, point: Point) {
        self.ctx.move_to(point.x, point.y);
    }

    fn line_to(&mut self, point: Point) {
        self.ctx.line_to(point.x, point.y);
    }

    fn stroke(&mut self) -> Result<(), CanvasError> {
        self.set_source(self.stroke_color);
        self.ctx.stroke()?;
        Ok(())
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), CanvasError> {
        self.ctx.save()?;
        self.ctx.set_operator(cairo::Operator::Clear);
        self.ctx.rectangle(x, y, width, height);
        let filled = self.ctx.fill();
        self.ctx.restore()?;
        filled?;
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), CanvasError> {
        self.set_source(self.fill_color);
        self.ctx.rectangle(x, y, width, height);
        self.ctx.fill()?;
        Ok(())
    }

    fn save(&mut self) -> Result<(), CanvasError> {
        self.ctx.save()?;
        self.saved_styles.push((self.stroke_color, self.fill_color));
        Ok(())
    }

    fn restore(&mut self) -> Result<(), CanvasError> {
        // Unbalanced restore is ignored, matching canvas semantics.
        if let Some((stroke, fill)) = self.saved_styles.pop() {
            self.stroke_color = stroke;
            self.fill_color = fill;
            self.ctx.restore()?;
        }
        Ok(())
    }

    fn draw_image(
        &mut self,
        path: &Path,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), CanvasError> {
        let mut file = File::open(path)?;
        let image = cairo::ImageSurface::create_from_png(&mut file)
            .map_err(|err| CanvasError::Image(format!("{}: {err}", path.display())))?;

        let (image_width, image_height) = (image.width() as f64, image.height() as f64);
        if image_width <= 0.0 || image_height <= 0.0 {
            return Err(CanvasError::Image(format!(
                "{}: image has no pixels",
                path.display()
            )));
        }

        self.ctx.save()?;
        self.ctx.translate(x, y);
        self.ctx.scale(width / image_width, height / image_height);
        let painted = self
            .ctx
            .set_source_surface(&image, 0.0, 0.0)
            .and_then(|_| self.ctx.paint());
        self.ctx.restore()?;
        painted?;
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ctx.set_line_cap(match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        });
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.ctx.set_line_join(match join {
            LineJoin::Miter => cairo::LineJoin::Miter,
            LineJoin::Round => cairo::LineJoin::Round,
            LineJoin::Bevel => cairo::LineJoin::Bevel,
        });
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};
    use cairo::{Format, ImageSurface};

    fn surface(width: i32, height: i32) -> (ImageSurface, CairoSurface) {
        let image = ImageSurface::create(Format::ARgb32, width, height).unwrap();
        let ctx = cairo::Context::new(&image).unwrap();
        (image, CairoSurface::new(ctx))
    }

    /// Reads the ARGB32 pixel at (x, y) as (a, r, g, b).
    fn pixel(image: &mut ImageSurface, x: usize, y: usize) -> (u8, u8, u8, u8) {
        let stride = image.stride() as usize;
        let data = image.data().unwrap();
        let offset = y * stride + x * 4;
        let px = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        (
            (px >> 24) as u8,
            (px >> 16) as u8,
            (px >> 8) as u8,
            px as u8,
        )
    }

    #[test]
    fn fill_then_clear_rect() {
        let (mut image, mut s) = surface(20, 20);
        s.set_fill_color(WHITE);
        s.fill_rect(0.0, 0.0, 20.0, 20.0).unwrap();
        s.clear_rect(0.0, 0.0, 10.0, 20.0).unwrap();
        drop(s);

        assert_eq!(pixel(&mut image, 5, 5), (0, 0, 0, 0));
        assert_eq!(pixel(&mut image, 15, 5), (255, 255, 255, 255));
    }

    #[test]
    fn stroke_uses_stroke_color_not_fill_color() {
        let (mut image, mut s) = surface(20, 20);
        s.set_fill_color(WHITE);
        s.set_stroke_color(RED);
        s.set_line_width(4.0);
        s.begin_path();
        s.move_to(Point::new(0.0, 10.0));
        s.line_to(Point::new(20.0, 10.0));
        s.stroke().unwrap();
        drop(s);

        assert_eq!(pixel(&mut image, 10, 10), (255, 255, 0, 0));
        assert_eq!(pixel(&mut image, 10, 2), (0, 0, 0, 0));
    }

    #[test]
    fn restore_brings_back_saved_colors() {
        let (_image, mut s) = surface(4, 4);
        s.set_fill_color(RED);
        s.save().unwrap();
        s.set_fill_color(WHITE);
        s.restore().unwrap();
        assert_eq!(s.fill_color, RED);

        // An extra restore is a no-op.
        s.restore().unwrap();
        assert_eq!(s.fill_color, RED);
    }

    #[test]
    fn draw_image_reports_missing_file() {
        let (_image, mut s) = surface(4, 4);
        let err = s
            .draw_image(Path::new("/nonexistent/image.png"), 0.0, 0.0, 4.0, 4.0)
            .unwrap_err();
        assert!(matches!(err, CanvasError::Io(_)));
    }
}
