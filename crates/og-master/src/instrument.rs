//! In-memory instrument with undoable operator routing.

use og_ir::{Change, CustomAlgorithm, CustomFeedback};
use tracing::debug;

use crate::document::Document;
use crate::history::UndoStack;

/// An instrument's operator routing plus its edit history.
#[derive(Debug, Default)]
pub struct InstrumentDocument {
    algorithm: CustomAlgorithm,
    feedback: CustomFeedback,
    history: UndoStack,
}

impl InstrumentDocument {
    pub fn new(algorithm: CustomAlgorithm, feedback: CustomFeedback) -> Self {
        Self {
            algorithm,
            feedback,
            history: UndoStack::new(),
        }
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// Revert the last recorded change. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        let Some(change) = self.history.undo().cloned() else {
            return false;
        };
        change.apply(&mut self.algorithm, &mut self.feedback);
        debug!(mode = change.mode.label(), "undo");
        true
    }

    /// Re-apply the last undone change. Returns false if there was none.
    pub fn redo(&mut self) -> bool {
        let Some(change) = self.history.redo().cloned() else {
            return false;
        };
        change.apply(&mut self.algorithm, &mut self.feedback);
        debug!(mode = change.mode.label(), "redo");
        true
    }
}

impl Document for InstrumentDocument {
    fn algorithm(&self) -> &CustomAlgorithm {
        &self.algorithm
    }

    fn feedback(&self) -> &CustomFeedback {
        &self.feedback
    }

    /// Changes that leave the instrument as it is are applied but not
    /// added to the history, so a plain click does not create an undo step.
    fn record(&mut self, change: Change) {
        let reverse = Change::capture(change.mode, &self.algorithm, &self.feedback);
        if reverse == change {
            return;
        }
        change.apply(&mut self.algorithm, &mut self.feedback);
        self.history.push(change, reverse);
    }
}
