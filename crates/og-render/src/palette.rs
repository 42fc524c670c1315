//! Editor colors.

use crate::surface::Color;

/// Colors used to draw the grid, operators, selection and edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Editor background; also the inset of every cell
    pub background: Color,
    /// Cell frame around the inset
    pub cell: Color,
    pub carrier_fill: Color,
    pub carrier_text: Color,
    pub modulator_fill: Color,
    pub modulator_text: Color,
    /// Outline around the selected operator
    pub selection: Color,
    /// Edge stroke, indexed by source slot (operator index - 1)
    pub edges: [Color; 6],
}

impl Default for Palette {
    fn default() -> Self {
        let carrier = Color::rgb(120, 120, 181);
        let modulator = Color::rgb(32, 32, 44);
        Self {
            background: Color::rgb(26, 26, 26),
            cell: Color::rgb(51, 51, 69),
            carrier_fill: carrier,
            carrier_text: modulator,
            modulator_fill: modulator,
            modulator_text: carrier,
            selection: Color::rgb(255, 200, 64),
            edges: [
                Color::rgb(230, 96, 96),
                Color::rgb(96, 200, 96),
                Color::rgb(96, 150, 240),
                Color::rgb(230, 180, 60),
                Color::rgb(190, 110, 220),
                Color::rgb(80, 200, 200),
            ],
        }
    }
}
