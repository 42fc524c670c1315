//! Operator grid drawn onto the imgui DrawList.

use og_engine::Point;
use og_ir::CANVAS_PX;
use og_render::{Color, Surface};

use super::input::{self, CanvasRect};
use super::{process_actions, GuiState};

/// Adapts the window DrawList to the renderer's [`Surface`].
struct DrawListSurface<'a, 'ui> {
    ui: &'a imgui::Ui,
    draw_list: &'a imgui::DrawListMut<'ui>,
    rect: CanvasRect,
}

impl DrawListSurface<'_, '_> {
    fn at(&self, x: i32, y: i32) -> [f32; 2] {
        [
            self.rect.origin[0] + x as f32 * self.rect.scale,
            self.rect.origin[1] + y as f32 * self.rect.scale,
        ]
    }
}

impl Surface for DrawListSurface<'_, '_> {
    fn clear(&mut self, color: Color) {
        self.fill_rect(0, 0, CANVAS_PX, CANVAS_PX, color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.draw_list
            .add_rect(self.at(x, y), self.at(x + w, y + h), color.to_f32())
            .filled(true)
            .build();
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Color) {
        // Pixel centres, so one-pixel strokes land on the lane.
        let half = 0.5 * self.rect.scale;
        let points: Vec<[f32; 2]> = points
            .iter()
            .map(|p| {
                let [x, y] = self.at(p.x, p.y);
                [x + half, y + half]
            })
            .collect();
        self.draw_list
            .add_polyline(points, color.to_f32())
            .thickness(self.rect.scale)
            .build();
    }

    fn draw_text(&mut self, center: Point, text: &str, color: Color) {
        let size = self.ui.calc_text_size(text);
        let [x, y] = self.at(center.x, center.y);
        self.draw_list
            .add_text([x - size[0] / 2.0, y - size[1] / 2.0], color.to_f32(), text);
    }
}

pub fn canvas_panel(ui: &imgui::Ui, gui: &mut GuiState) {
    let rect = CanvasRect {
        origin: ui.cursor_screen_pos(),
        scale: gui.scale,
    };
    let side = CANVAS_PX as f32 * gui.scale;
    ui.invisible_button("canvas", [side, side]);
    let hovered = ui.is_item_hovered();

    let actions = input::poll_canvas_actions(ui, rect, hovered, gui.in_contact());
    process_actions(gui, &actions);

    let draw_list = ui.get_window_draw_list();
    let mut surface = DrawListSurface {
        ui,
        draw_list: &draw_list,
        rect,
    };
    gui.session.draw(&mut surface, &gui.palette);
}
