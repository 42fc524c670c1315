//! Core operator-graph types for the opgrid algorithm editor.
//!
//! This crate defines the data the rest of the workspace agrees on: the
//! six operator slots, the modulation and feedback graphs, grid geometry,
//! the instrument's persisted arrays and the change commands that carry
//! edits into the document history.
//!
//! Designed to be `no_std` compatible with the `alloc` crate.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod change;
mod grid;
mod instrument;
mod mode;
mod model;
mod node;
pub mod notation;

pub use change::Change;
pub use grid::{GridCell, CANVAS_PX, CELL_PX, GRID_SIZE, MAX_ROW};
pub use instrument::{CustomAlgorithm, CustomFeedback};
pub use mode::Mode;
pub use model::{Adjacency, AdjacencyList, GraphModel};
pub use node::{Edge, NodeIndex, OPERATOR_COUNT};
pub use notation::{parse_algorithm, parse_feedback, NotationError};
