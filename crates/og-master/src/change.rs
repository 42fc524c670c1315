//! Packages the edited graph into a change for the document history.

use og_ir::{Change, GraphModel};
use tracing::info;

use crate::document::Document;

/// Snapshot the active graph of `model` as a change.
pub fn build_change(model: &GraphModel) -> Change {
    Change {
        mode: model.mode(),
        adjacency: model.active_graph().to_rows(),
        carrier_count: model.carrier_count(),
    }
}

/// Hand the current graph to the document. This is the only place the
/// session's state becomes durable.
pub fn commit(model: &GraphModel, doc: &mut impl Document) -> Change {
    let change = build_change(model);
    info!(
        mode = change.mode.label(),
        carriers = change.carrier_count,
        edges = model.active_graph().len(),
        "commit"
    );
    doc.record(change.clone());
    change
}

#[cfg(test)]
mod tests {
    use super::*;
    use og_ir::{CustomAlgorithm, CustomFeedback, Mode};

    #[test]
    fn feedback_mode_serializes_feedback_rows() {
        let algorithm = CustomAlgorithm::from_lists(2, &[&[3]]);
        let feedback = CustomFeedback::from_lists(&[&[], &[], &[3]]);
        let model = GraphModel::from_instrument(&algorithm, &feedback, Mode::Feedback);

        let change = build_change(&model);
        assert_eq!(change.mode, Mode::Feedback);
        assert_eq!(change.adjacency[2], vec![3]);
        assert!(change.adjacency[0].is_empty());
        assert_eq!(change.carrier_count, 2);
    }
}
