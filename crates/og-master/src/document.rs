//! The document the editor reads from and records changes into.

use og_ir::{Change, CustomAlgorithm, CustomFeedback};

/// The instrument-side collaborator of an editing session.
///
/// The session only reads the persisted arrays when it (re)loads and only
/// writes through [`record`](Document::record); undo/redo semantics belong
/// to the implementor.
pub trait Document {
    fn algorithm(&self) -> &CustomAlgorithm;

    fn feedback(&self) -> &CustomFeedback;

    /// Apply `change` and make it undoable.
    fn record(&mut self, change: Change);
}
