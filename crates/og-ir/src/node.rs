//! Operator node indices.

use core::fmt;

/// Number of operator slots. Always six, whether or not every slot is used.
pub const OPERATOR_COUNT: usize = 6;

/// A 1-based operator index in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u8);

impl NodeIndex {
    /// All six operators in ascending order.
    pub const ALL: [NodeIndex; OPERATOR_COUNT] = [
        NodeIndex(1),
        NodeIndex(2),
        NodeIndex(3),
        NodeIndex(4),
        NodeIndex(5),
        NodeIndex(6),
    ];

    /// Wrap a 1-based index. Returns `None` outside `1..=6`.
    pub const fn new(index: u8) -> Option<Self> {
        if index >= 1 && index as usize <= OPERATOR_COUNT {
            Some(NodeIndex(index))
        } else {
            None
        }
    }

    /// The 1-based index.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The 0-based slot, for indexing fixed arrays.
    pub const fn slot(self) -> usize {
        self.0 as usize - 1
    }

    /// The neighbouring index `self + delta`, if it is still in range.
    pub fn offset(self, delta: i8) -> Option<Self> {
        let n = self.0 as i16 + delta as i16;
        if n < 1 || n > OPERATOR_COUNT as i16 {
            return None;
        }
        Some(NodeIndex(n as u8))
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge: `source` modulates (or feeds back into) `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
}

impl Edge {
    pub const fn new(source: NodeIndex, target: NodeIndex) -> Self {
        Self { source, target }
    }

    /// Self-loops only carry meaning in feedback graphs.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
