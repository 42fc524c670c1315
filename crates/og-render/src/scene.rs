//! Full-canvas redraw of the operator grid.

use og_engine::{compute_layout, route_all, Placement, Point, RoutedEdge, NODE_INSET};
use og_ir::{GraphModel, GridCell, NodeIndex, CELL_PX};

use crate::palette::Palette;
use crate::surface::Surface;

/// Width of the cell frame drawn around each inset.
const FRAME_PX: i32 = 1;

/// Everything one redraw needs, already computed.
pub struct Scene<'a> {
    pub model: &'a GraphModel,
    pub placement: &'a Placement,
    pub routes: &'a [RoutedEdge],
    pub selected: Option<NodeIndex>,
}

impl Scene<'_> {
    /// Clear the surface and draw cells, operators, selection and edges.
    pub fn draw(&self, surface: &mut impl Surface, palette: &Palette) {
        surface.clear(palette.background);

        for cell in GridCell::all() {
            draw_cell(surface, cell, palette);
        }

        for (node, cell) in self.placement.iter() {
            draw_operator(surface, node, cell, self.model.is_carrier(node), palette);
        }

        if let Some(cell) = self.selected.and_then(|n| self.placement.cell_of(n)) {
            draw_selection(surface, cell, palette);
        }

        for routed in self.routes {
            let color = palette.edges[routed.edge.source.slot()];
            surface.stroke_polyline(routed.route.points(), color);
        }
    }
}

/// Lay out, route and draw `model` in one go.
pub fn redraw(surface: &mut impl Surface, model: &GraphModel, selected: Option<NodeIndex>, palette: &Palette) {
    let placement = compute_layout(model);
    let routes = route_all(model, &placement);
    Scene {
        model,
        placement: &placement,
        routes: &routes,
        selected,
    }
    .draw(surface, palette);
}

fn draw_cell(surface: &mut impl Surface, cell: GridCell, palette: &Palette) {
    let (x, y) = cell.origin_px();
    surface.fill_rect(x + FRAME_PX, y + FRAME_PX, CELL_PX - 2 * FRAME_PX, CELL_PX - 2 * FRAME_PX, palette.cell);
    surface.fill_rect(
        x + 2 * FRAME_PX,
        y + 2 * FRAME_PX,
        CELL_PX - 4 * FRAME_PX,
        CELL_PX - 4 * FRAME_PX,
        palette.background,
    );
}

fn draw_operator(surface: &mut impl Surface, node: NodeIndex, cell: GridCell, carrier: bool, palette: &Palette) {
    let (x, y) = cell.origin_px();
    let (fill, text) = if carrier {
        (palette.carrier_fill, palette.carrier_text)
    } else {
        (palette.modulator_fill, palette.modulator_text)
    };
    let size = CELL_PX - 2 * NODE_INSET;
    surface.fill_rect(x + NODE_INSET, y + NODE_INSET, size, size, fill);

    let mut label = [0u8; 1];
    let digit = (b'0' + node.get()) as char;
    let center = Point::new(x + CELL_PX / 2, y + CELL_PX / 2);
    surface.draw_text(center, digit.encode_utf8(&mut label), text);
}

fn draw_selection(surface: &mut impl Surface, cell: GridCell, palette: &Palette) {
    let (x, y) = cell.origin_px();
    let c = palette.selection;
    let outer = CELL_PX - 2 * FRAME_PX;
    let (x0, y0) = (x + FRAME_PX, y + FRAME_PX);
    surface.fill_rect(x0, y0, outer, 2, c);
    surface.fill_rect(x0, y0 + outer - 2, outer, 2, c);
    surface.fill_rect(x0, y0, 2, outer, c);
    surface.fill_rect(x0 + outer - 2, y0, 2, outer, c);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Color;
    use og_ir::{CustomAlgorithm, CustomFeedback, Mode};

    /// Records draw calls instead of rasterizing.
    #[derive(Default)]
    struct Recorder {
        clears: usize,
        rects: Vec<(i32, i32, i32, i32, Color)>,
        lines: Vec<(Vec<Point>, Color)>,
        labels: Vec<(Point, String, Color)>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, _color: Color) {
            self.clears += 1;
        }
        fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
            self.rects.push((x, y, w, h, color));
        }
        fn stroke_polyline(&mut self, points: &[Point], color: Color) {
            self.lines.push((points.to_vec(), color));
        }
        fn draw_text(&mut self, center: Point, text: &str, color: Color) {
            self.labels.push((center, text.to_string(), color));
        }
    }

    fn model() -> GraphModel {
        let algorithm = CustomAlgorithm::from_lists(2, &[&[3], &[4]]);
        GraphModel::from_instrument(&algorithm, &CustomFeedback::new(), Mode::Algorithm)
    }

    #[test]
    fn draws_every_cell_and_operator() {
        let mut rec = Recorder::default();
        let palette = Palette::default();
        redraw(&mut rec, &model(), None, &palette);

        assert_eq!(rec.clears, 1);
        // Two rects per cell plus one per operator.
        assert_eq!(rec.rects.len(), 36 * 2 + 6);
        assert_eq!(rec.labels.len(), 6);
        assert_eq!(rec.lines.len(), 2);
    }

    #[test]
    fn carriers_and_modulators_swap_colors() {
        let mut rec = Recorder::default();
        let palette = Palette::default();
        redraw(&mut rec, &model(), None, &palette);

        let label = |text: &str| rec.labels.iter().find(|l| l.1 == text).map(|l| l.2);
        assert_eq!(label("1"), Some(palette.carrier_text));
        assert_eq!(label("3"), Some(palette.modulator_text));
        // Node 1 sits in the bottom-left cell.
        assert_eq!(rec.labels[0].0, Point::new(12, 132));
    }

    #[test]
    fn edges_use_source_color() {
        let mut rec = Recorder::default();
        let palette = Palette::default();
        redraw(&mut rec, &model(), None, &palette);
        assert_eq!(rec.lines[0].1, palette.edges[2]);
        assert_eq!(rec.lines[1].1, palette.edges[3]);
    }

    #[test]
    fn selection_adds_outline() {
        let mut rec = Recorder::default();
        let palette = Palette::default();
        redraw(&mut rec, &model(), NodeIndex::new(3), &palette);
        let outline = rec.rects.iter().filter(|r| r.4 == palette.selection).count();
        assert_eq!(outline, 4);
    }
}
