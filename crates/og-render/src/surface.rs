//! Drawing target trait and color type.

use og_engine::Point;

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Normalized `[r, g, b, a]`, as immediate-mode GUIs take colors.
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Something the editor canvas can be drawn onto.
///
/// Coordinates are surface-local logical pixels on the 144×144 canvas,
/// y growing downward. Implementations map them onto their own space.
pub trait Surface {
    /// Fill the whole surface.
    fn clear(&mut self, color: Color);

    /// Fill an axis-aligned rectangle with top-left corner `(x, y)`.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);

    /// Stroke a polyline through `points`.
    fn stroke_polyline(&mut self, points: &[Point], color: Color);

    /// Draw `text` centred on `center`.
    fn draw_text(&mut self, center: Point, text: &str, color: Color);
}
