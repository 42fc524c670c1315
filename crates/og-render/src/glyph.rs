//! Seven-segment operator digits as tiny-skia paths.

use tiny_skia::{Path, PathBuilder};

/// Glyph box width in canvas pixels.
pub const GLYPH_W: f32 = 4.0;
/// Glyph box height in canvas pixels.
pub const GLYPH_H: f32 = 8.0;

/// Lit segments per digit; bit 0 is the top bar (a), bit 6 the middle (g).
const SEGMENTS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Segment endpoints in glyph-box units, in a..g order.
const STROKES: [((f32, f32), (f32, f32)); 7] = [
    ((0.0, 0.0), (1.0, 0.0)),
    ((1.0, 0.0), (1.0, 0.5)),
    ((1.0, 0.5), (1.0, 1.0)),
    ((0.0, 1.0), (1.0, 1.0)),
    ((0.0, 0.5), (0.0, 1.0)),
    ((0.0, 0.0), (0.0, 0.5)),
    ((0.0, 0.5), (1.0, 0.5)),
];

/// Outline of digit `c` with its glyph box at `(left, top)`, or `None`
/// for anything but an ASCII digit.
pub fn digit_path(c: char, left: f32, top: f32) -> Option<Path> {
    let lit = SEGMENTS[c.to_digit(10)? as usize];
    let mut pb = PathBuilder::new();
    for (i, ((x0, y0), (x1, y1))) in STROKES.iter().enumerate() {
        if lit & (1 << i) != 0 {
            pb.move_to(left + x0 * GLYPH_W, top + y0 * GLYPH_H);
            pb.line_to(left + x1 * GLYPH_W, top + y1 * GLYPH_H);
        }
    }
    pb.finish()
}
