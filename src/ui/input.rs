//! Mouse and keyboard input mapping for the algorithm canvas.
//!
//! Pure functions that convert imgui input state into canvas actions.

/// An action produced by input over the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasAction {
    /// Pointer pressed at canvas-local logical pixels.
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
    ToggleMode,
    Reset,
    Undo,
    Redo,
}

/// Where the canvas sits on screen this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub origin: [f32; 2],
    /// Screen pixels per logical canvas pixel.
    pub scale: f32,
}

impl CanvasRect {
    /// Screen position to canvas-local logical pixels.
    pub fn to_local(&self, pos: [f32; 2]) -> (f32, f32) {
        (
            (pos[0] - self.origin[0]) / self.scale,
            (pos[1] - self.origin[1]) / self.scale,
        )
    }
}

/// Left-button state for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MouseSample {
    pub hovered: bool,
    /// A contact started on the canvas is still held.
    pub in_contact: bool,
    pub clicked: bool,
    pub down: bool,
    pub released: bool,
    pub moved: bool,
}

/// Pointer actions for one frame, at canvas-local `(x, y)`.
///
/// A press only starts a contact over the canvas; motion and release are
/// reported for as long as the contact lasts, even outside it.
pub fn pointer_actions(mouse: MouseSample, x: f32, y: f32, actions: &mut Vec<CanvasAction>) {
    if mouse.hovered && mouse.clicked {
        actions.push(CanvasAction::PointerDown { x, y });
    } else if mouse.in_contact && mouse.down && mouse.moved {
        actions.push(CanvasAction::PointerMove { x, y });
    }
    if mouse.in_contact && mouse.released {
        actions.push(CanvasAction::PointerUp);
    }
}

/// Poll imgui mouse and key state and return all triggered canvas actions.
pub fn poll_canvas_actions(ui: &imgui::Ui, rect: CanvasRect, hovered: bool, in_contact: bool) -> Vec<CanvasAction> {
    let mut actions = Vec::new();
    let io = ui.io();
    let (x, y) = rect.to_local(io.mouse_pos);

    let mouse = MouseSample {
        hovered,
        in_contact,
        clicked: ui.is_mouse_clicked(imgui::MouseButton::Left),
        down: ui.is_mouse_down(imgui::MouseButton::Left),
        released: ui.is_mouse_released(imgui::MouseButton::Left),
        moved: io.mouse_delta != [0.0, 0.0],
    };
    pointer_actions(mouse, x, y, &mut actions);

    if io.want_text_input {
        return actions;
    }
    poll_shortcuts(ui, &mut actions);
    actions
}

fn poll_shortcuts(ui: &imgui::Ui, actions: &mut Vec<CanvasAction>) {
    let io = ui.io();
    let cmd = io.key_super || io.key_ctrl;
    let shift = io.key_shift;

    if ui.is_key_pressed(imgui::Key::Tab) {
        actions.push(CanvasAction::ToggleMode);
    }
    if ui.is_key_pressed(imgui::Key::Escape) {
        actions.push(CanvasAction::Reset);
    }
    // Undo/Redo: Cmd+Z / Cmd+Shift+Z
    if cmd && ui.is_key_pressed(imgui::Key::Z) {
        actions.push(if shift { CanvasAction::Redo } else { CanvasAction::Undo });
    }
}
