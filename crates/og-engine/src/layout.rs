//! Greedy grid placement of the six operators.
//!
//! Carriers anchor the bottom row in index order. Each modulator goes one
//! row above the last operator it modulates, sliding right if that cell is
//! taken; unconnected modulators start from the top row. Always recomputed
//! from scratch, so the same graph yields the same layout.

use og_ir::{GraphModel, GridCell, NodeIndex, GRID_SIZE, MAX_ROW, OPERATOR_COUNT};

/// Node ↔ cell bijection for one layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    /// Cell of each operator, by slot.
    cells: [Option<GridCell>; OPERATOR_COUNT],
    /// Occupant of each cell, `[row][col]` with row 0 at the bottom.
    occupants: [[Option<NodeIndex>; GRID_SIZE as usize]; GRID_SIZE as usize],
}

impl Placement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell_of(&self, node: NodeIndex) -> Option<GridCell> {
        self.cells[node.slot()]
    }

    pub fn occupant(&self, cell: GridCell) -> Option<NodeIndex> {
        self.occupants[cell.row as usize][cell.col as usize]
    }

    pub fn is_free(&self, cell: GridCell) -> bool {
        self.occupant(cell).is_none()
    }

    /// Placed operators with their cells, ascending by index.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, GridCell)> + '_ {
        NodeIndex::ALL
            .into_iter()
            .filter_map(|node| self.cell_of(node).map(|cell| (node, cell)))
    }

    /// Record `node` at `cell` in both directions.
    fn insert(&mut self, node: NodeIndex, cell: GridCell) {
        debug_assert!(self.is_free(cell));
        self.cells[node.slot()] = Some(cell);
        self.occupants[cell.row as usize][cell.col as usize] = Some(node);
    }

    /// First free cell in `row` at or right of `from_col`.
    fn scan_row(&self, row: u8, from_col: u8) -> Option<GridCell> {
        (from_col..GRID_SIZE)
            .filter_map(|col| GridCell::new(row, col))
            .find(|&cell| self.is_free(cell))
    }

    /// First free cell scanning rows top-down, columns left to right.
    fn first_free(&self) -> GridCell {
        (0..GRID_SIZE)
            .rev()
            .find_map(|row| self.scan_row(row, 0))
            // At most six of the 36 cells are ever taken.
            .unwrap_or(GridCell { row: MAX_ROW, col: 0 })
    }
}

/// Lay out all six operators. Pure: reads the model, returns a fresh
/// placement.
pub fn compute_layout(model: &GraphModel) -> Placement {
    let mut placement = Placement::new();
    for node in NodeIndex::ALL {
        let cell = if model.is_carrier(node) {
            GridCell { row: 0, col: node.slot() as u8 }
        } else {
            anchored_cell(&placement, model, node)
                .or_else(|| placement.scan_row(MAX_ROW, 0))
                .unwrap_or_else(|| placement.first_free())
        };
        placement.insert(node, cell);
    }
    placement
}

/// One row above the last operator `node` modulates, probing rightward.
///
/// The last entry wins when a modulator feeds several operators; with the
/// inverse lists ascending, that is the highest-indexed one.
fn anchored_cell(placement: &Placement, model: &GraphModel, node: NodeIndex) -> Option<GridCell> {
    let anchor = *model.modulation_targets(node).last()?;
    let at = placement.cell_of(anchor)?;
    if at.row >= MAX_ROW {
        return None;
    }
    placement.scan_row(at.row + 1, at.col)
}
