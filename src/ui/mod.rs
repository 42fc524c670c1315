//! UI modules and layout composition.

mod canvas;
pub mod input;
mod toolbar;

use input::CanvasAction;
use og_master::{InstrumentDocument, Palette, Session, SessionConfig, Transition};
use tracing::debug;

/// Default on-screen size of one logical canvas pixel.
pub const DEFAULT_SCALE: f32 = 3.0;

/// UI-facing state bundle, passed to all panel functions.
/// No GL/imgui/renderer fields.
pub struct GuiState {
    pub document: InstrumentDocument,
    pub session: Session,
    pub palette: Palette,
    pub scale: f32,
    pub status: String,
    contact: bool,
}

impl GuiState {
    pub fn new(document: InstrumentDocument, config: SessionConfig) -> Self {
        let session = Session::open(&document, config);
        Self {
            document,
            session,
            palette: Palette::default(),
            scale: DEFAULT_SCALE,
            status: String::new(),
            contact: false,
        }
    }

    /// Whether a pointer contact started on the canvas is still held.
    pub fn in_contact(&self) -> bool {
        self.contact
    }
}

pub fn build_ui(ui: &imgui::Ui, gui: &mut GuiState) {
    let display_size = ui.io().display_size;
    ui.window("opgrid")
        .position([0.0, 0.0], imgui::Condition::Always)
        .size(display_size, imgui::Condition::Always)
        .flags(
            imgui::WindowFlags::NO_TITLE_BAR
                | imgui::WindowFlags::NO_RESIZE
                | imgui::WindowFlags::NO_MOVE
                | imgui::WindowFlags::NO_COLLAPSE
                | imgui::WindowFlags::NO_BRING_TO_FRONT_ON_FOCUS,
        )
        .build(|| {
            toolbar::toolbar_panel(ui, gui);
            ui.separator();
            canvas::canvas_panel(ui, gui);
        });
}

pub fn process_actions(gui: &mut GuiState, actions: &[CanvasAction]) {
    for action in actions {
        match *action {
            CanvasAction::PointerDown { x, y } => {
                gui.contact = true;
                let transition = gui.session.pointer_down(x, y);
                update_status(gui, transition);
            }
            CanvasAction::PointerMove { x, y } => {
                let transition = gui.session.pointer_move(x, y);
                update_status(gui, transition);
            }
            CanvasAction::PointerUp => {
                // Releases of drags that started elsewhere are not ours.
                if gui.contact {
                    gui.contact = false;
                    gui.session.pointer_up(&mut gui.document);
                }
            }
            CanvasAction::ToggleMode => {
                let mode = gui.session.mode().toggled();
                gui.session.set_mode(mode, &gui.document);
                gui.status = format!("Editing {}", mode.label());
            }
            CanvasAction::Reset => {
                gui.session.reset();
                gui.status.clear();
            }
            CanvasAction::Undo => {
                if gui.document.undo() {
                    gui.session.redraw_canvas(false, &gui.document);
                    gui.status = "Undo".to_string();
                } else {
                    gui.status = "Nothing to undo".to_string();
                }
            }
            CanvasAction::Redo => {
                if gui.document.redo() {
                    gui.session.redraw_canvas(false, &gui.document);
                    gui.status = "Redo".to_string();
                } else {
                    gui.status = "Nothing to redo".to_string();
                }
            }
        }
    }
}

fn update_status(gui: &mut GuiState, transition: Transition) {
    let status = match transition {
        Transition::Ignored => return,
        Transition::Selected(node) => format!("Operator {node} selected"),
        Transition::Deselected(_) => String::new(),
        Transition::EdgeToggled { edge, present } => {
            let verb = if present { "added" } else { "removed" };
            format!("{} > {} {verb}", edge.source, edge.target)
        }
        Transition::CarriersChanged(n) => format!("{n} carriers"),
    };
    debug!(%status, "status");
    gui.status = status;
}

#[cfg(test)]
mod tests {
    use super::*;
    use og_ir::{parse_algorithm, parse_feedback, GridCell, Mode, NodeIndex, CELL_PX};
    use og_master::Document;

    fn gui(algorithm: &str) -> GuiState {
        let doc = InstrumentDocument::new(parse_algorithm(algorithm).unwrap(), parse_feedback("").unwrap());
        GuiState::new(doc, SessionConfig::default())
    }

    fn press(gui: &GuiState, n: u8) -> [CanvasAction; 2] {
        let cell = gui.session.placement().cell_of(NodeIndex::new(n).unwrap()).unwrap();
        let (x, y) = cell.origin_px();
        let (x, y) = ((x + CELL_PX / 2) as f32, (y + CELL_PX / 2) as f32);
        [CanvasAction::PointerDown { x, y }, CanvasAction::PointerUp]
    }

    #[test]
    fn click_pair_edits_document() {
        let mut gui = gui("c2: 3>1 4>2");
        let a = press(&gui, 2);
        process_actions(&mut gui, &a);
        assert_eq!(gui.status, "Operator 2 selected");
        let b = press(&gui, 5);
        process_actions(&mut gui, &b);
        assert_eq!(gui.status, "5 > 2 added");
        assert_eq!(gui.document.algorithm().modulated_by[1], vec![4, 5]);
    }

    #[test]
    fn stray_release_does_not_commit() {
        let mut gui = gui("c1:");
        process_actions(&mut gui, &[CanvasAction::PointerUp]);
        assert!(gui.document.history().is_empty());
        assert!(!gui.in_contact());
    }

    #[test]
    fn undo_redraws_from_document() {
        let mut gui = gui("c1:");
        let a = press(&gui, 1);
        process_actions(&mut gui, &a);
        let b = press(&gui, 2);
        process_actions(&mut gui, &b);
        assert_eq!(gui.session.model().carrier_count(), 2);

        process_actions(&mut gui, &[CanvasAction::Undo]);
        assert_eq!(gui.session.model().carrier_count(), 1);
        assert_eq!(gui.session.placement().cell_of(NodeIndex::new(2).unwrap()), GridCell::new(5, 0));

        process_actions(&mut gui, &[CanvasAction::Redo, CanvasAction::Redo]);
        assert_eq!(gui.session.model().carrier_count(), 2);
        assert_eq!(gui.status, "Nothing to redo");
    }

    #[test]
    fn toggle_mode_switches_graph() {
        let mut gui = gui("c1:");
        process_actions(&mut gui, &[CanvasAction::ToggleMode]);
        assert_eq!(gui.session.mode(), Mode::Feedback);
        assert_eq!(gui.status, "Editing feedback");
        process_actions(&mut gui, &[CanvasAction::ToggleMode]);
        assert_eq!(gui.session.mode(), Mode::Algorithm);
    }
}
