//! Grid geometry shared by layout, routing, rendering and hit testing.
//!
//! Rows are counted from the bottom (row 0 holds the carriers). Pixel
//! coordinates are surface-local with y growing downward, so the bottom
//! grid row is the last row of pixels.

/// Cells per side of the square grid.
pub const GRID_SIZE: u8 = 6;

/// Index of the top row (and of the last column).
pub const MAX_ROW: u8 = GRID_SIZE - 1;

/// Edge length of one grid cell in logical pixels.
pub const CELL_PX: i32 = 24;

/// Edge length of the whole drawable surface in logical pixels.
pub const CANVAS_PX: i32 = CELL_PX * GRID_SIZE as i32;

/// A cell of the 6×6 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridCell {
    /// Row counted from the bottom, `0..=5`.
    pub row: u8,
    /// Column counted from the left, `0..=5`.
    pub col: u8,
}

impl GridCell {
    /// Returns `None` if either coordinate is off the grid.
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Row index counted from the top, as the surface draws it.
    pub const fn draw_row(self) -> u8 {
        MAX_ROW - self.row
    }

    /// Top-left corner of the cell in surface pixels.
    pub const fn origin_px(self) -> (i32, i32) {
        (self.col as i32 * CELL_PX, self.draw_row() as i32 * CELL_PX)
    }

    /// Iterate over all 36 cells, bottom row first, left to right.
    pub fn all() -> impl Iterator<Item = GridCell> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| GridCell { row, col }))
    }

    /// Resolve a surface-local pointer position to the cell whose centre
    /// is nearest, i.e. the cell containing it. Points off the surface
    /// resolve to `None`.
    pub fn from_point(x: f32, y: f32) -> Option<Self> {
        // Within half a cell of a centre means inside that cell, so plain
        // truncation after the bounds check is the nearest-centre rule.
        if !(0.0..CANVAS_PX as f32).contains(&x) || !(0.0..CANVAS_PX as f32).contains(&y) {
            return None;
        }
        let col = (x as i32 / CELL_PX) as u8;
        let draw_row = (y as i32 / CELL_PX) as u8;
        GridCell::new(MAX_ROW - draw_row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_row_draws_last() {
        let cell = GridCell::new(0, 2).unwrap();
        assert_eq!(cell.draw_row(), 5);
        assert_eq!(cell.origin_px(), (48, 120));
    }

    #[test]
    fn from_point_maps_into_cells() {
        assert_eq!(GridCell::from_point(0.0, 143.0), GridCell::new(0, 0));
        assert_eq!(GridCell::from_point(30.0, 0.0), GridCell::new(5, 1));
        assert_eq!(GridCell::from_point(143.9, 71.0), GridCell::new(3, 5));
        // Just left of a boundary stays in the left cell.
        assert_eq!(GridCell::from_point(23.9, 130.0), GridCell::new(0, 0));
        assert_eq!(GridCell::from_point(24.0, 130.0), GridCell::new(0, 1));
    }

    #[test]
    fn from_point_rejects_off_surface() {
        assert_eq!(GridCell::from_point(-1.0, 10.0), None);
        assert_eq!(GridCell::from_point(10.0, 144.0), None);
        assert_eq!(GridCell::from_point(200.0, 200.0), None);
    }

    #[test]
    fn all_cells_cover_grid() {
        assert_eq!(GridCell::all().count(), 36);
    }
}
