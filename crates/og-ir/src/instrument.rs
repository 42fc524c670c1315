//! Persisted operator routing as stored on an instrument.
//!
//! These mirror the instrument's raw arrays: plain 1-based indices with no
//! validation. Anything out of range is tolerated here and skipped when a
//! [`GraphModel`](crate::GraphModel) is built from them.

use alloc::vec;
use alloc::vec::Vec;

use crate::node::OPERATOR_COUNT;

/// Custom FM algorithm: carrier count plus, per operator, the operators
/// that modulate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomAlgorithm {
    /// Operators `1..=carrier_count` are carriers.
    pub carrier_count: u8,
    /// `modulated_by[i]` lists the 1-based operators modulating operator `i + 1`.
    pub modulated_by: Vec<Vec<u8>>,
}

impl CustomAlgorithm {
    /// A single carrier and no modulation.
    pub fn new() -> Self {
        Self {
            carrier_count: 1,
            modulated_by: vec![Vec::new(); OPERATOR_COUNT],
        }
    }

    /// Build from explicit lists (missing trailing rows are treated as empty).
    pub fn from_lists(carrier_count: u8, lists: &[&[u8]]) -> Self {
        let mut modulated_by = vec![Vec::new(); OPERATOR_COUNT];
        for (row, list) in modulated_by.iter_mut().zip(lists) {
            row.extend_from_slice(list);
        }
        Self {
            carrier_count,
            modulated_by,
        }
    }
}

impl Default for CustomAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

/// Custom feedback routing: per operator, the operators feeding back into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomFeedback {
    /// `indices[i]` lists the 1-based operators feeding into operator `i + 1`.
    pub indices: Vec<Vec<u8>>,
}

impl CustomFeedback {
    /// No feedback at all.
    pub fn new() -> Self {
        Self {
            indices: vec![Vec::new(); OPERATOR_COUNT],
        }
    }

    pub fn from_lists(lists: &[&[u8]]) -> Self {
        let mut indices = vec![Vec::new(); OPERATOR_COUNT];
        for (row, list) in indices.iter_mut().zip(lists) {
            row.extend_from_slice(list);
        }
        Self { indices }
    }
}

impl Default for CustomFeedback {
    fn default() -> Self {
        Self::new()
    }
}
