//! Integration test: open instrument → pointer gestures → commit → verify document.

use og_ir::{parse_algorithm, parse_feedback, Change, CustomAlgorithm, CustomFeedback, GridCell, Mode, NodeIndex, CELL_PX};
use og_master::{Document, InstrumentDocument, PointerState, Session, SessionConfig, Transition};
use og_render::{Palette, Pixmap};

/// Document that keeps every recorded change.
#[derive(Default)]
struct Recorder {
    algorithm: CustomAlgorithm,
    feedback: CustomFeedback,
    changes: Vec<Change>,
}

impl Document for Recorder {
    fn algorithm(&self) -> &CustomAlgorithm {
        &self.algorithm
    }

    fn feedback(&self) -> &CustomFeedback {
        &self.feedback
    }

    fn record(&mut self, change: Change) {
        change.apply(&mut self.algorithm, &mut self.feedback);
        self.changes.push(change);
    }
}

fn node(n: u8) -> NodeIndex {
    NodeIndex::new(n).unwrap()
}

fn instrument(algorithm: &str, feedback: &str) -> InstrumentDocument {
    InstrumentDocument::new(parse_algorithm(algorithm).unwrap(), parse_feedback(feedback).unwrap())
}

fn center(cell: GridCell) -> (f32, f32) {
    let (x, y) = cell.origin_px();
    ((x + CELL_PX / 2) as f32, (y + CELL_PX / 2) as f32)
}

/// Press and release on operator `n`, wherever it currently sits.
fn click(session: &mut Session, doc: &mut impl Document, n: u8) -> Transition {
    let cell = session.placement().cell_of(node(n)).unwrap();
    let (x, y) = center(cell);
    let transition = session.pointer_down(x, y);
    session.pointer_up(doc);
    transition
}

// --- edge editing ---

#[test]
fn select_then_click_toggles_modulation() {
    let mut doc = instrument("c2: 3>1 4>2", "");
    let mut session = Session::open(&doc, SessionConfig::default());

    assert_eq!(click(&mut session, &mut doc, 2), Transition::Selected(node(2)));
    let t = click(&mut session, &mut doc, 5);
    assert!(matches!(t, Transition::EdgeToggled { present: true, .. }), "{:?}", t);
    assert_eq!(session.pointer(), PointerState::Idle);
    assert_eq!(doc.algorithm().modulated_by[1], vec![4, 5]);

    click(&mut session, &mut doc, 2);
    let t = click(&mut session, &mut doc, 5);
    assert!(matches!(t, Transition::EdgeToggled { present: false, .. }), "{:?}", t);
    assert_eq!(doc.algorithm().modulated_by[1], vec![4]);
}

#[test]
fn edge_direction_ignores_click_order() {
    let mut doc = instrument("c1:", "");
    let mut session = Session::open(&doc, SessionConfig::default());

    click(&mut session, &mut doc, 6);
    click(&mut session, &mut doc, 4);
    // The higher operator always modulates the lower one.
    assert_eq!(doc.algorithm().modulated_by[3], vec![6]);
}

#[test]
fn new_modulator_moves_above_its_target() {
    let mut doc = instrument("c2: 3>1 4>2", "");
    let mut session = Session::open(&doc, SessionConfig::default());
    assert_eq!(session.placement().cell_of(node(5)), GridCell::new(5, 0));

    click(&mut session, &mut doc, 2);
    click(&mut session, &mut doc, 5);
    // 5 wants (1,1) above carrier 2, but 4 is there; it slides right.
    assert_eq!(session.placement().cell_of(node(5)), GridCell::new(1, 2));
    assert_eq!(session.routes().len(), 3);
}

#[test]
fn feedback_self_loop_leaves_modulation_alone() {
    let mut doc = instrument("c2: 3>1 4>2", "");
    let mut session = Session::open(&doc, SessionConfig::default());
    session.set_mode(Mode::Feedback, &doc);

    assert_eq!(click(&mut session, &mut doc, 3), Transition::Selected(node(3)));
    let t = click(&mut session, &mut doc, 3);
    assert!(matches!(t, Transition::EdgeToggled { present: true, edge } if edge.is_self_loop()));

    assert_eq!(doc.feedback().indices[2], vec![3]);
    assert_eq!(doc.algorithm().modulated_by[0], vec![3]);
    assert_eq!(doc.algorithm().modulated_by[1], vec![4]);
    assert_eq!(doc.algorithm().carrier_count, 2);
}

#[test]
fn feedback_mode_keeps_algorithm_layout() {
    let mut doc = instrument("c2: 3>1 4>2", "5>1");
    let mut session = Session::open(&doc, SessionConfig::default());
    let before = *session.placement();
    session.set_mode(Mode::Feedback, &doc);
    assert_eq!(*session.placement(), before);
    assert_eq!(session.routes().len(), 1);

    click(&mut session, &mut doc, 6);
    click(&mut session, &mut doc, 2);
    // Feedback edits never relocate operators.
    assert_eq!(*session.placement(), before);
    assert_eq!(doc.feedback().indices[1], vec![6]);
}

// --- carrier boundary ---

#[test]
fn carrier_boundary_grows_and_shrinks() {
    let mut doc = instrument("c1:", "");
    let mut session = Session::open(&doc, SessionConfig::default());

    click(&mut session, &mut doc, 1);
    assert_eq!(click(&mut session, &mut doc, 2), Transition::CarriersChanged(2));
    assert_eq!(doc.algorithm().carrier_count, 2);
    assert_eq!(session.placement().cell_of(node(2)), GridCell::new(0, 1));

    click(&mut session, &mut doc, 2);
    assert_eq!(click(&mut session, &mut doc, 1), Transition::CarriersChanged(1));
    assert_eq!(doc.algorithm().carrier_count, 1);
    assert!(doc.algorithm().modulated_by.iter().all(Vec::is_empty));
}

#[test]
fn boundary_needs_direct_neighbour() {
    let mut doc = instrument("c1:", "");
    let mut session = Session::open(&doc, SessionConfig::default());

    // 1 is the last carrier but 3 is not next to it: an ordinary edge.
    click(&mut session, &mut doc, 1);
    click(&mut session, &mut doc, 3);
    assert_eq!(doc.algorithm().carrier_count, 1);
    assert_eq!(doc.algorithm().modulated_by[0], vec![3]);
}

#[test]
fn non_boundary_carrier_pair_is_an_edge() {
    let mut doc = instrument("c3:", "");
    let mut session = Session::open(&doc, SessionConfig::default());

    click(&mut session, &mut doc, 1);
    click(&mut session, &mut doc, 2);
    assert_eq!(doc.algorithm().carrier_count, 3);
    assert_eq!(doc.algorithm().modulated_by[0], vec![2]);
}

// --- commit ---

#[test]
fn every_release_commits() {
    let mut doc = Recorder::default();
    let mut session = Session::open(&doc, SessionConfig::default());

    click(&mut session, &mut doc, 3);
    click(&mut session, &mut doc, 1);
    // Release over nothing still commits.
    session.pointer_down(200.0, 200.0);
    session.pointer_up(&mut doc);

    assert_eq!(doc.changes.len(), 3);
    let last = doc.changes.last().unwrap();
    assert_eq!(last.mode, Mode::Algorithm);
    assert_eq!(last.adjacency[0], vec![3]);
    assert_eq!(last.carrier_count, 1);
}

#[test]
fn plain_click_keeps_unordered_rows() {
    let mut doc = InstrumentDocument::new(CustomAlgorithm::from_lists(1, &[&[3, 2]]), CustomFeedback::new());
    let mut session = Session::open(&doc, SessionConfig::default());

    assert_eq!(click(&mut session, &mut doc, 1), Transition::Selected(node(1)));
    assert!(doc.history().is_empty());
    assert_eq!(doc.algorithm().modulated_by[0], vec![3, 2]);

    // A real edit appends without reordering what was there.
    click(&mut session, &mut doc, 5);
    assert_eq!(doc.algorithm().modulated_by[0], vec![3, 2, 5]);
    assert_eq!(doc.history().len(), 1);
}

#[test]
fn feedback_commit_carries_feedback_rows() {
    let mut doc = Recorder::default();
    let mut session = Session::open(
        &doc,
        SessionConfig {
            initial_mode: Mode::Feedback,
            ..SessionConfig::default()
        },
    );

    click(&mut session, &mut doc, 4);
    click(&mut session, &mut doc, 2);
    let last = doc.changes.last().unwrap();
    assert_eq!(last.mode, Mode::Feedback);
    assert_eq!(last.adjacency[1], vec![4]);
    assert!(doc.algorithm.modulated_by.iter().all(Vec::is_empty));
}

#[test]
fn empty_cells_do_nothing() {
    let mut doc = instrument("c2: 3>1 4>2", "");
    let mut session = Session::open(&doc, SessionConfig::default());
    click(&mut session, &mut doc, 3);

    let (x, y) = center(GridCell::new(3, 4).unwrap());
    assert_eq!(session.pointer_down(x, y), Transition::Ignored);
    session.pointer_up(&mut doc);
    // Selection survives a miss.
    assert_eq!(session.selected(), Some(node(3)));
    assert!(doc.history().is_empty());
}

#[test]
fn drag_repeat_can_be_disabled() {
    let mut doc = instrument("c1:", "");
    let config = SessionConfig {
        suppress_drag_repeat: false,
        ..SessionConfig::default()
    };
    let mut session = Session::open(&doc, config);
    let (x, y) = center(session.placement().cell_of(node(4)).unwrap());

    assert_eq!(session.pointer_down(x, y), Transition::Selected(node(4)));
    assert_eq!(session.pointer_move(x + 1.0, y), Transition::Deselected(node(4)));
    session.pointer_up(&mut doc);
}

// --- reset / redraw ---

#[test]
fn reset_clears_selection_only() {
    let mut doc = instrument("c2: 3>1 4>2", "");
    let mut session = Session::open(&doc, SessionConfig::default());
    click(&mut session, &mut doc, 4);

    session.reset();
    assert_eq!(session.pointer(), PointerState::Idle);
    assert_eq!(session.model().modulated_by(node(2)), &[node(4)]);
}

#[test]
fn redraw_canvas_reloads_from_document() {
    let mut doc = instrument("c1:", "");
    let mut session = Session::open(&doc, SessionConfig::default());
    click(&mut session, &mut doc, 5);

    // Edited behind the session's back, e.g. by undo.
    let mut other = instrument("c1: 2>1", "");
    std::mem::swap(&mut doc, &mut other);

    session.redraw_canvas(true, &doc);
    assert!(session.model().modulated_by(node(1)).is_empty());
    session.redraw_canvas(false, &doc);
    assert_eq!(session.model().modulated_by(node(1)), &[node(2)]);
    // Selection is not part of a redraw.
    assert_eq!(session.selected(), Some(node(5)));
}

// --- undo ---

#[test]
fn undo_restores_previous_routing() {
    let mut doc = instrument("c2: 3>1 4>2", "");
    let mut session = Session::open(&doc, SessionConfig::default());

    click(&mut session, &mut doc, 2);
    click(&mut session, &mut doc, 5);
    assert_eq!(doc.history().len(), 1);

    assert!(doc.undo());
    session.redraw_canvas(false, &doc);
    assert_eq!(session.model().modulated_by(node(2)), &[node(4)]);
    assert_eq!(session.placement().cell_of(node(5)), GridCell::new(5, 0));

    assert!(doc.redo());
    session.redraw_canvas(false, &doc);
    assert_eq!(session.model().modulated_by(node(2)), &[node(4), node(5)]);
}

#[test]
fn undo_carrier_change() {
    let mut doc = instrument("c1:", "");
    let mut session = Session::open(&doc, SessionConfig::default());
    click(&mut session, &mut doc, 1);
    click(&mut session, &mut doc, 2);
    assert_eq!(doc.algorithm().carrier_count, 2);

    assert!(doc.undo());
    assert_eq!(doc.algorithm().carrier_count, 1);
    assert!(!doc.undo());
}

// --- drawing ---

#[test]
fn session_draws_selection() {
    let mut doc = instrument("c2: 3>1 4>2", "");
    let mut session = Session::open(&doc, SessionConfig::default());
    let palette = Palette::default();

    let mut plain = Pixmap::new();
    session.draw(&mut plain, &palette);

    click(&mut session, &mut doc, 3);
    let mut selected = Pixmap::new();
    session.draw(&mut selected, &palette);

    assert_ne!(plain.data(), selected.data());
}
