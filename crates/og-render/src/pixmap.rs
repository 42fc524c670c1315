//! Offscreen canvas backed by a `tiny_skia::Pixmap`.

use og_engine::Point;
use og_ir::CANVAS_PX;
use tiny_skia::{LineCap, Paint, Path, PathBuilder, Rect, Stroke, Transform};

use crate::glyph::{self, GLYPH_H, GLYPH_W};
use crate::surface::{Color, Surface};

/// Horizontal gap between digits.
const GLYPH_GAP: f32 = 2.0;

/// A fixed 144×144 RGBA raster, top row first.
#[derive(Clone, Debug)]
pub struct Pixmap {
    inner: tiny_skia::Pixmap,
}

impl Pixmap {
    pub fn new() -> Self {
        let side = CANVAS_PX as u32;
        Self {
            inner: tiny_skia::Pixmap::new(side, side).expect("canvas size is non-zero"),
        }
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Raw RGBA bytes. Everything the editor draws is opaque, so these
    /// match straight alpha.
    pub fn data(&self) -> &[u8] {
        self.inner.data()
    }

    /// Color at `(x, y)`, or `None` off the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        let c = self.inner.pixel(x, y)?.demultiply();
        Some(Color {
            r: c.red(),
            g: c.green(),
            b: c.blue(),
            a: c.alpha(),
        })
    }

    pub(crate) fn as_skia(&self) -> &tiny_skia::Pixmap {
        &self.inner
    }

    fn stroke(&mut self, path: &Path, width: f32, color: Color) {
        let stroke = Stroke {
            width,
            line_cap: LineCap::Square,
            ..Stroke::default()
        };
        self.inner
            .stroke_path(path, &paint(color), &stroke, Transform::identity(), None);
    }
}

impl Default for Pixmap {
    fn default() -> Self {
        Self::new()
    }
}

/// Solid, non-antialiased paint so cells and lanes land on whole pixels.
fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = false;
    paint
}

impl Surface for Pixmap {
    fn clear(&mut self, color: Color) {
        self.inner
            .fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let Some(rect) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) else {
            return;
        };
        self.inner
            .fill_rect(rect, &paint(color), Transform::identity(), None);
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color) {
        let Some((first, rest)) = points.split_first() else { return };
        // Route points name pixels; stroke through their centers.
        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32 + 0.5, first.y as f32 + 0.5);
        for p in rest {
            pb.line_to(p.x as f32 + 0.5, p.y as f32 + 0.5);
        }
        if let Some(path) = pb.finish() {
            self.stroke(&path, 1.0, color);
        }
    }

    fn draw_text(&mut self, center: Point, text: &str, color: Color) {
        let count = text.chars().count() as f32;
        let width = count * (GLYPH_W + GLYPH_GAP) - GLYPH_GAP;
        let left = center.x as f32 - width / 2.0;
        let top = center.y as f32 - GLYPH_H / 2.0;

        for (i, c) in text.chars().enumerate() {
            if let Some(path) = glyph::digit_path(c, left + i as f32 * (GLYPH_W + GLYPH_GAP), top) {
                self.stroke(&path, 1.5, color);
            }
        }
    }
}
