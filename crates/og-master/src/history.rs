//! Undo/redo stack of graph changes.

use og_ir::Change;

/// A single undoable operation: forward change + reverse change.
#[derive(Clone, Debug)]
struct UndoEntry {
    forward: Change,
    reverse: Change,
}

/// Undo/redo stack.
#[derive(Debug, Default)]
pub struct UndoStack {
    entries: Vec<UndoEntry>,
    position: usize,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change with its reverse.
    pub fn push(&mut self, forward: Change, reverse: Change) {
        // Truncate any redo history beyond current position
        self.entries.truncate(self.position);
        self.entries.push(UndoEntry { forward, reverse });
        self.position = self.entries.len();
    }

    /// Undo: returns the reverse change to apply, or None if nothing to undo.
    pub fn undo(&mut self) -> Option<&Change> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        Some(&self.entries[self.position].reverse)
    }

    /// Redo: returns the forward change to apply, or None if nothing to redo.
    pub fn redo(&mut self) -> Option<&Change> {
        if self.position >= self.entries.len() {
            return None;
        }
        let change = &self.entries[self.position].forward;
        self.position += 1;
        Some(change)
    }

    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    pub fn can_redo(&self) -> bool {
        self.position < self.entries.len()
    }

    /// Number of recorded entries, including undone ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use og_ir::Mode;

    fn carriers(n: u8) -> Change {
        Change {
            mode: Mode::Algorithm,
            adjacency: vec![Vec::new(); 6],
            carrier_count: n,
        }
    }

    #[test]
    fn undo_redo_single() {
        let mut stack = UndoStack::new();
        stack.push(carriers(2), carriers(1));

        assert!(stack.can_undo());
        assert_eq!(stack.undo(), Some(&carriers(1)));
        assert!(stack.can_redo());
        assert_eq!(stack.redo(), Some(&carriers(2)));
    }

    #[test]
    fn undo_at_bottom_returns_none() {
        let mut stack = UndoStack::new();
        assert!(stack.undo().is_none());
    }

    #[test]
    fn redo_at_top_returns_none() {
        let mut stack = UndoStack::new();
        assert!(stack.redo().is_none());
    }

    #[test]
    fn new_change_after_undo_truncates_redo() {
        let mut stack = UndoStack::new();
        stack.push(carriers(2), carriers(1));
        stack.push(carriers(3), carriers(2));

        stack.undo(); // undo second change
        assert!(stack.can_redo());

        // New change truncates redo history
        stack.push(carriers(4), carriers(2));
        assert!(!stack.can_redo());
        assert_eq!(stack.len(), 2);
    }
}
