//! The operator graph being edited: modulation and feedback adjacency plus
//! the carrier boundary.

use alloc::vec::Vec;
use arrayvec::ArrayVec;

use crate::instrument::{CustomAlgorithm, CustomFeedback};
use crate::mode::Mode;
use crate::node::{Edge, NodeIndex, OPERATOR_COUNT};

/// One adjacency list per operator slot.
pub type AdjacencyList = ArrayVec<NodeIndex, OPERATOR_COUNT>;

/// Fixed-size adjacency: `lists[slot]` belongs to operator `slot + 1`.
///
/// Lists keep the order entries were added in and never hold duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adjacency {
    lists: [AdjacencyList; OPERATOR_COUNT],
}

impl Adjacency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load raw 1-based rows, skipping entries outside `1..=6` and
    /// duplicates. Rows beyond the sixth are ignored.
    pub fn from_rows(rows: &[Vec<u8>]) -> Self {
        let mut adjacency = Self::new();
        for (list, row) in adjacency.lists.iter_mut().zip(rows) {
            for node in row.iter().copied().filter_map(NodeIndex::new) {
                if !list.contains(&node) {
                    let _ = list.try_push(node);
                }
            }
        }
        adjacency
    }

    /// The list belonging to `node`.
    pub fn get(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.lists[node.slot()]
    }

    /// Does `owner`'s list contain `node`?
    pub fn contains(&self, owner: NodeIndex, node: NodeIndex) -> bool {
        self.lists[owner.slot()].contains(&node)
    }

    /// Remove `node` from `owner`'s list if present, append it otherwise.
    /// Returns true if the entry is now present.
    pub fn toggle(&mut self, owner: NodeIndex, node: NodeIndex) -> bool {
        let list = &mut self.lists[owner.slot()];
        match list.iter().position(|&n| n == node) {
            Some(pos) => {
                list.remove(pos);
                false
            }
            None => list.try_push(node).is_ok(),
        }
    }

    /// Inverse mapping: for every `n` in `lists[owner]`, `owner` is pushed
    /// onto `inverse[n]`. Owners are visited in ascending order, so each
    /// inverse list is sorted.
    pub fn inverse(&self) -> Adjacency {
        let mut inverse = Adjacency::new();
        for owner in NodeIndex::ALL {
            for &node in self.get(owner) {
                let _ = inverse.lists[node.slot()].try_push(owner);
            }
        }
        inverse
    }

    /// Raw 1-based rows, as persisted on the instrument.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.lists
            .iter()
            .map(|list| list.iter().map(|n| n.get()).collect())
            .collect()
    }

    /// Total number of entries across all lists.
    pub fn len(&self) -> usize {
        self.lists.iter().map(|list| list.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The editable operator graph.
///
/// Holds both graphs at once; the active [`Mode`] picks which one clicks
/// mutate and which edges get drawn. Layout always follows the modulation
/// graph, so operators keep their positions when switching to feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphModel {
    mode: Mode,
    carrier_count: u8,
    /// Edges `source -> target` stored as `modulated_by[target] ∋ source`.
    modulated_by: Adjacency,
    /// Edges `source -> target` stored as `feedback[target] ∋ source`.
    feedback: Adjacency,
    /// `modulation_targets[source]`: the operators `source` modulates.
    modulation_targets: Adjacency,
    /// Inverse of the active graph.
    inverse: Adjacency,
}

impl GraphModel {
    /// Build from the instrument's persisted arrays.
    pub fn from_instrument(algorithm: &CustomAlgorithm, feedback: &CustomFeedback, mode: Mode) -> Self {
        let mut model = Self {
            mode,
            carrier_count: 1,
            modulated_by: Adjacency::new(),
            feedback: Adjacency::new(),
            modulation_targets: Adjacency::new(),
            inverse: Adjacency::new(),
        };
        model.load(algorithm, feedback);
        model
    }

    /// Replace both graphs and the carrier count with the persisted state.
    pub fn load(&mut self, algorithm: &CustomAlgorithm, feedback: &CustomFeedback) {
        self.carrier_count = algorithm.carrier_count.clamp(1, OPERATOR_COUNT as u8);
        self.modulated_by = Adjacency::from_rows(&algorithm.modulated_by);
        self.feedback = Adjacency::from_rows(&feedback.indices);
        self.rebuild_inverse();
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.rebuild_inverse();
    }

    pub fn carrier_count(&self) -> u8 {
        self.carrier_count
    }

    pub fn is_carrier(&self, node: NodeIndex) -> bool {
        node.get() <= self.carrier_count
    }

    /// The adjacency for `mode`.
    pub fn graph(&self, mode: Mode) -> &Adjacency {
        match mode {
            Mode::Algorithm => &self.modulated_by,
            Mode::Feedback => &self.feedback,
        }
    }

    /// The adjacency for the active mode.
    pub fn active_graph(&self) -> &Adjacency {
        self.graph(self.mode)
    }

    /// Operators modulating `node`.
    pub fn modulated_by(&self, node: NodeIndex) -> &[NodeIndex] {
        self.modulated_by.get(node)
    }

    /// Operators feeding back into `node`.
    pub fn feedback_into(&self, node: NodeIndex) -> &[NodeIndex] {
        self.feedback.get(node)
    }

    /// Operators that `node` modulates, ascending.
    pub fn modulation_targets(&self, node: NodeIndex) -> &[NodeIndex] {
        self.modulation_targets.get(node)
    }

    /// Targets reached from `node` in the active graph, ascending.
    pub fn inverse(&self, node: NodeIndex) -> &[NodeIndex] {
        self.inverse.get(node)
    }

    /// Toggle the edge `source -> target` in `mode`'s graph.
    ///
    /// Modulation edges are stored canonically on the lower-indexed
    /// operator's list, holding the higher index: the higher operator
    /// always modulates the lower one, whichever was clicked first, and
    /// carriers stay sinks. Self-loops are ignored in this mode. Feedback
    /// edges are stored on the target's list as given.
    ///
    /// Returns true if the edge exists after the call.
    pub fn toggle_edge(&mut self, mode: Mode, source: NodeIndex, target: NodeIndex) -> bool {
        let present = match mode {
            Mode::Algorithm => {
                if source == target {
                    return false;
                }
                let low = source.min(target);
                let high = source.max(target);
                self.modulated_by.toggle(low, high)
            }
            Mode::Feedback => self.feedback.toggle(target, source),
        };
        self.rebuild_inverse();
        present
    }

    /// Move the carrier boundary: clicking the last carrier turns it into a
    /// modulator, clicking the first modulator turns it into a carrier.
    /// Other nodes leave the boundary alone. Returns true if it moved.
    pub fn toggle_carrier_boundary(&mut self, node: NodeIndex) -> bool {
        let n = node.get();
        if n == self.carrier_count && self.carrier_count > 1 {
            self.carrier_count -= 1;
            true
        } else if n == self.carrier_count + 1 && (self.carrier_count as usize) < OPERATOR_COUNT {
            self.carrier_count += 1;
            true
        } else {
            false
        }
    }

    /// Recompute derived inverse adjacency after a load or mutation.
    pub fn rebuild_inverse(&mut self) {
        self.modulation_targets = self.modulated_by.inverse();
        self.inverse = match self.mode {
            Mode::Algorithm => self.modulation_targets.clone(),
            Mode::Feedback => self.feedback.inverse(),
        };
    }

    /// Every edge of `mode`'s graph, grouped by ascending target.
    pub fn edges(&self, mode: Mode) -> impl Iterator<Item = Edge> + '_ {
        let graph = self.graph(mode);
        NodeIndex::ALL
            .into_iter()
            .flat_map(move |target| graph.get(target).iter().map(move |&source| Edge::new(source, target)))
    }
}

impl Default for GraphModel {
    fn default() -> Self {
        Self::from_instrument(&CustomAlgorithm::new(), &CustomFeedback::new(), Mode::Algorithm)
    }
}
