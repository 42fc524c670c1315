//! Pointer-driven editing session over one instrument's operator graph.

use og_engine::{compute_layout, route_all, Placement, RouteSet};
use og_ir::{Change, Edge, GraphModel, GridCell, Mode, NodeIndex};
use og_render::{Palette, Scene, Surface};
use tracing::{debug, trace};

use crate::change;
use crate::document::Document;

/// Selection cursor: how the next click on an operator is read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerState {
    /// Nothing selected; a click selects.
    #[default]
    Idle,
    /// A click on another operator edits the graph between the two.
    NodeSelected(NodeIndex),
}

/// What a pointer event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Empty cell, off-surface, hover, or a repeat within the same cell.
    Ignored,
    Selected(NodeIndex),
    Deselected(NodeIndex),
    /// An edge was toggled; `present` tells whether it now exists.
    EdgeToggled { edge: Edge, present: bool },
    /// The carrier boundary moved to the given count.
    CarriersChanged(u8),
}

/// Session options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Mode the session opens in.
    pub initial_mode: Mode,
    /// Ignore move events inside the cell that produced the last
    /// transition of the current contact.
    pub suppress_drag_repeat: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_mode: Mode::Algorithm,
            suppress_drag_repeat: true,
        }
    }
}

/// State of the pointer between down and up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Contact {
    #[default]
    Released,
    /// Pressed; holds the cell of the last handled event, if any.
    Pressed(Option<GridCell>),
}

/// One open editor: the graph under edit, its derived layout and routes,
/// and the pointer state machine.
pub struct Session {
    config: SessionConfig,
    model: GraphModel,
    placement: Placement,
    routes: RouteSet,
    pointer: PointerState,
    contact: Contact,
}

impl Session {
    /// Open a session on `doc`'s current routing.
    pub fn open(doc: &impl Document, config: SessionConfig) -> Self {
        let model = GraphModel::from_instrument(doc.algorithm(), doc.feedback(), config.initial_mode);
        let mut session = Self {
            config,
            model,
            placement: Placement::new(),
            routes: RouteSet::new(),
            pointer: PointerState::Idle,
            contact: Contact::Released,
        };
        session.relayout();
        debug!(mode = config.initial_mode.label(), "session opened");
        session
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }

    pub fn mode(&self) -> Mode {
        self.model.mode()
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn routes(&self) -> &RouteSet {
        &self.routes
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn selected(&self) -> Option<NodeIndex> {
        match self.pointer {
            PointerState::Idle => None,
            PointerState::NodeSelected(node) => Some(node),
        }
    }

    /// Start a contact at surface position `(x, y)`.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Transition {
        self.contact = Contact::Pressed(None);
        self.handle_point(x, y)
    }

    /// Pointer motion. Only acts while pressed (dragging across cells).
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Transition {
        if self.contact == Contact::Released {
            return Transition::Ignored;
        }
        self.handle_point(x, y)
    }

    /// End the contact and commit the graph to `doc`, whether or not
    /// anything changed during it.
    pub fn pointer_up(&mut self, doc: &mut impl Document) -> Change {
        self.contact = Contact::Released;
        change::commit(&self.model, doc)
    }

    /// Clear the selection and relayout without touching the graph.
    pub fn reset(&mut self) {
        self.pointer = PointerState::Idle;
        self.contact = Contact::Released;
        self.relayout();
    }

    /// Relayout, first reloading the graph from `doc` unless
    /// `preserve_graph` is set.
    pub fn redraw_canvas(&mut self, preserve_graph: bool, doc: &impl Document) {
        if !preserve_graph {
            self.model.load(doc.algorithm(), doc.feedback());
            debug!("graph reloaded from document");
        }
        self.relayout();
    }

    /// Switch modes. The graph is reloaded from `doc` and the selection
    /// cleared.
    pub fn set_mode(&mut self, mode: Mode, doc: &impl Document) {
        self.model.set_mode(mode);
        self.pointer = PointerState::Idle;
        self.redraw_canvas(false, doc);
        debug!(mode = mode.label(), "mode switched");
    }

    /// Draw the whole canvas.
    pub fn draw(&self, surface: &mut impl Surface, palette: &Palette) {
        Scene {
            model: &self.model,
            placement: &self.placement,
            routes: &self.routes,
            selected: self.selected(),
        }
        .draw(surface, palette);
    }

    fn relayout(&mut self) {
        self.placement = compute_layout(&self.model);
        self.routes = route_all(&self.model, &self.placement);
    }

    fn handle_point(&mut self, x: f32, y: f32) -> Transition {
        let Some(cell) = GridCell::from_point(x, y) else {
            trace!(x, y, "pointer off grid");
            return Transition::Ignored;
        };
        if self.config.suppress_drag_repeat && self.contact == Contact::Pressed(Some(cell)) {
            return Transition::Ignored;
        }
        let Some(clicked) = self.placement.occupant(cell) else {
            trace!(row = cell.row, col = cell.col, "empty cell");
            return Transition::Ignored;
        };

        self.contact = Contact::Pressed(Some(cell));
        let transition = self.click(clicked);
        debug!(?transition, "pointer");
        transition
    }

    fn click(&mut self, clicked: NodeIndex) -> Transition {
        let PointerState::NodeSelected(selected) = self.pointer else {
            self.pointer = PointerState::NodeSelected(clicked);
            return Transition::Selected(clicked);
        };
        self.pointer = PointerState::Idle;

        let mode = self.model.mode();
        let transition = match mode {
            Mode::Algorithm if selected == clicked => return Transition::Deselected(selected),
            Mode::Algorithm if self.at_carrier_boundary(selected, clicked) => {
                self.model.toggle_carrier_boundary(selected.max(clicked));
                Transition::CarriersChanged(self.model.carrier_count())
            }
            Mode::Algorithm | Mode::Feedback => {
                let edge = match mode {
                    // The higher operator is always the modulator.
                    Mode::Algorithm => Edge::new(selected.max(clicked), selected.min(clicked)),
                    Mode::Feedback => Edge::new(selected, clicked),
                };
                let present = self.model.toggle_edge(mode, selected, clicked);
                Transition::EdgeToggled { edge, present }
            }
        };
        self.relayout();
        transition
    }

    /// The selected operator is the last carrier and the click lands on
    /// its direct neighbour, one side of the boundary or the other.
    fn at_carrier_boundary(&self, selected: NodeIndex, clicked: NodeIndex) -> bool {
        selected.get() == self.model.carrier_count()
            && (selected.offset(1) == Some(clicked) || selected.offset(-1) == Some(clicked))
    }
}
