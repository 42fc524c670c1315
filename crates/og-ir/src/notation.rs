//! Compact text notation for operator graphs.
//!
//! An algorithm reads `c2: 3>1 4>2`: two carriers, operator 3 modulates
//! operator 1, operator 4 modulates operator 2. The carrier prefix is
//! optional (default one carrier). Feedback uses the same pairs without
//! the prefix, e.g. `3>3 5>1`. Pairs are separated by whitespace or commas.

use alloc::string::{String, ToString};
use core::fmt;

use crate::instrument::{CustomAlgorithm, CustomFeedback};
use crate::node::{NodeIndex, OPERATOR_COUNT};

/// Error type for notation parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotationError {
    /// The `cN:` prefix did not hold a carrier count in `1..=6`
    InvalidCarrierCount(String),
    /// A pair was not of the form `a>b`
    MalformedPair(String),
    /// A pair named an operator outside `1..=6`
    InvalidNode(String),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::InvalidCarrierCount(tok) => {
                write!(f, "Invalid carrier count '{}' (expected 1-{})", tok, OPERATOR_COUNT)
            }
            NotationError::MalformedPair(tok) => write!(f, "Malformed pair '{}' (expected a>b)", tok),
            NotationError::InvalidNode(tok) => {
                write!(f, "Operator out of range in '{}' (expected 1-{})", tok, OPERATOR_COUNT)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NotationError {}

/// Parse `cN: a>b ...` into an algorithm.
pub fn parse_algorithm(text: &str) -> Result<CustomAlgorithm, NotationError> {
    let text = text.trim();
    let (carrier_count, pairs) = match text.split_once(':') {
        Some((prefix, rest)) => (parse_carrier_count(prefix.trim())?, rest),
        None => (1, text),
    };

    let mut algorithm = CustomAlgorithm::new();
    algorithm.carrier_count = carrier_count;
    for_each_pair(pairs, |source, target| {
        push_unique(&mut algorithm.modulated_by[target.slot()], source.get());
    })?;
    Ok(algorithm)
}

/// Parse `a>b ...` into feedback routing.
pub fn parse_feedback(text: &str) -> Result<CustomFeedback, NotationError> {
    let mut feedback = CustomFeedback::new();
    for_each_pair(text, |source, target| {
        push_unique(&mut feedback.indices[target.slot()], source.get());
    })?;
    Ok(feedback)
}

fn parse_carrier_count(prefix: &str) -> Result<u8, NotationError> {
    prefix
        .strip_prefix('c')
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|&n| n >= 1 && n as usize <= OPERATOR_COUNT)
        .ok_or_else(|| NotationError::InvalidCarrierCount(prefix.to_string()))
}

fn for_each_pair(
    text: &str,
    mut f: impl FnMut(NodeIndex, NodeIndex),
) -> Result<(), NotationError> {
    for token in text.split(|c: char| c.is_whitespace() || c == ',').filter(|t| !t.is_empty()) {
        let (a, b) = token
            .split_once('>')
            .ok_or_else(|| NotationError::MalformedPair(token.to_string()))?;
        let parse = |s: &str| -> Result<NodeIndex, NotationError> {
            let n = s
                .trim()
                .parse::<u8>()
                .map_err(|_| NotationError::MalformedPair(token.to_string()))?;
            NodeIndex::new(n).ok_or_else(|| NotationError::InvalidNode(token.to_string()))
        };
        f(parse(a)?, parse(b)?);
    }
    Ok(())
}

fn push_unique(row: &mut alloc::vec::Vec<u8>, node: u8) {
    if !row.contains(&node) {
        row.push(node);
    }
}

fn write_pairs(f: &mut fmt::Formatter<'_>, rows: &[alloc::vec::Vec<u8>]) -> fmt::Result {
    let mut first = true;
    for (slot, row) in rows.iter().enumerate().take(OPERATOR_COUNT) {
        for source in row {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}>{}", source, slot + 1)?;
            first = false;
        }
    }
    Ok(())
}

impl fmt::Display for CustomAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}:", self.carrier_count)?;
        if self.modulated_by.iter().any(|row| !row.is_empty()) {
            f.write_str(" ")?;
        }
        write_pairs(f, &self.modulated_by)
    }
}

impl fmt::Display for CustomFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_pairs(f, &self.indices)
    }
}
