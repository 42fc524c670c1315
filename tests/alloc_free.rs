//! Allocation-free redraw path tests.
//!
//! These tests verify that toggling an edge, recomputing the layout and
//! routing every edge do not allocate. Pointer handling runs this path on
//! every drag step, so it must stay heap-free once the model exists.
//!
//! Just run `cargo test`; no feature flags needed.

use assert_no_alloc::{assert_no_alloc, AllocDisabler};

#[cfg(debug_assertions)]
#[global_allocator]
static A: AllocDisabler = AllocDisabler;

use og_engine::{compute_layout, route_all, Placement, RouteSet};
use og_ir::{parse_algorithm, parse_feedback, GraphModel, Mode, NodeIndex};

fn model(algorithm: &str, feedback: &str, mode: Mode) -> GraphModel {
    let algorithm = parse_algorithm(algorithm).unwrap();
    let feedback = parse_feedback(feedback).unwrap();
    GraphModel::from_instrument(&algorithm, &feedback, mode)
}

/// Toggle every ordered pair once, relayouting and rerouting after each.
fn assert_edit_cycle_alloc_free(mut model: GraphModel) {
    let mut placement = Placement::new();
    let mut routes = RouteSet::new();
    let mode = model.mode();

    assert_no_alloc(|| {
        for source in NodeIndex::ALL {
            for target in NodeIndex::ALL {
                model.toggle_edge(mode, source, target);
                placement = compute_layout(&model);
                routes = route_all(&model, &placement);
            }
        }
    });
    assert_eq!(placement.iter().count(), 6);
    assert_eq!(routes.len(), model.edges(mode).count());
}

#[test]
fn algorithm_edits_alloc_free() {
    assert_edit_cycle_alloc_free(model("c2: 3>1 4>2", "", Mode::Algorithm));
}

#[test]
fn feedback_edits_alloc_free() {
    assert_edit_cycle_alloc_free(model("c1: 2>1 3>2", "3>3 5>1", Mode::Feedback));
}

#[test]
fn carrier_boundary_alloc_free() {
    let mut model = model("c3:", "", Mode::Algorithm);
    assert_no_alloc(|| {
        for _ in 0..10 {
            for node in NodeIndex::ALL {
                model.toggle_carrier_boundary(node);
                let placement = compute_layout(&model);
                let _ = route_all(&model, &placement);
            }
        }
    });
}
