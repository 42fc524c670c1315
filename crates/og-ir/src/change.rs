//! Undoable change commands produced by the editor.

use alloc::vec::Vec;

use crate::instrument::{CustomAlgorithm, CustomFeedback};
use crate::mode::Mode;

/// A snapshot of one graph, handed to the document's history on commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Change {
    /// Which graph `adjacency` belongs to.
    pub mode: Mode,
    /// Raw 1-based rows: `modulated_by` in algorithm mode, feedback
    /// `indices` in feedback mode.
    pub adjacency: Vec<Vec<u8>>,
    /// Carrier count at commit time. Only applied in algorithm mode.
    pub carrier_count: u8,
}

impl Change {
    /// Write this change into the instrument's persisted arrays.
    pub fn apply(&self, algorithm: &mut CustomAlgorithm, feedback: &mut CustomFeedback) {
        match self.mode {
            Mode::Algorithm => {
                algorithm.carrier_count = self.carrier_count;
                algorithm.modulated_by = self.adjacency.clone();
            }
            Mode::Feedback => feedback.indices = self.adjacency.clone(),
        }
    }

    /// The change that restores the instrument's current state for
    /// this change's mode.
    pub fn capture(mode: Mode, algorithm: &CustomAlgorithm, feedback: &CustomFeedback) -> Self {
        let adjacency = match mode {
            Mode::Algorithm => algorithm.modulated_by.clone(),
            Mode::Feedback => feedback.indices.clone(),
        };
        Self {
            mode,
            adjacency,
            carrier_count: algorithm.carrier_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn feedback_change_leaves_algorithm() {
        let mut algorithm = CustomAlgorithm::from_lists(2, &[&[3]]);
        let mut feedback = CustomFeedback::new();
        let change = Change {
            mode: Mode::Feedback,
            adjacency: vec![vec![], vec![], vec![3]],
            carrier_count: 5,
        };
        change.apply(&mut algorithm, &mut feedback);
        assert_eq!(algorithm.carrier_count, 2);
        assert_eq!(feedback.indices[2], vec![3]);
    }

    #[test]
    fn capture_then_apply_restores() {
        let mut algorithm = CustomAlgorithm::from_lists(2, &[&[3], &[4]]);
        let mut feedback = CustomFeedback::new();
        let before = Change::capture(Mode::Algorithm, &algorithm, &feedback);

        algorithm.carrier_count = 4;
        algorithm.modulated_by[0].clear();
        before.apply(&mut algorithm, &mut feedback);

        assert_eq!(algorithm, CustomAlgorithm::from_lists(2, &[&[3], &[4]]));
    }
}
