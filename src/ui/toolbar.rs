//! Toolbar: mode toggle, Undo/Redo, Reset, routing notation and status.

use super::input::CanvasAction;
use super::{process_actions, GuiState};
use og_master::{Document, Mode};

pub fn toolbar_panel(ui: &imgui::Ui, gui: &mut GuiState) {
    let mut actions = Vec::new();

    let mode_label = match gui.session.mode() {
        Mode::Algorithm => "Edit feedback",
        Mode::Feedback => "Edit algorithm",
    };
    if ui.button(mode_label) {
        actions.push(CanvasAction::ToggleMode);
    }
    ui.same_line();
    ui.separator();
    ui.same_line();

    let history = gui.document.history();
    ui.disabled(!history.can_undo(), || {
        if ui.button("Undo") {
            actions.push(CanvasAction::Undo);
        }
    });
    ui.same_line();
    ui.disabled(!history.can_redo(), || {
        if ui.button("Redo") {
            actions.push(CanvasAction::Redo);
        }
    });
    ui.same_line();
    if ui.button("Reset") {
        actions.push(CanvasAction::Reset);
    }

    process_actions(gui, &actions);

    ui.text(format!("Algorithm: {}", gui.document.algorithm()));
    ui.text(format!("Feedback:  {}", gui.document.feedback()));
    if !gui.status.is_empty() {
        ui.text_disabled(&gui.status);
    }
}
