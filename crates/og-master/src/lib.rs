//! Headless editing session for the opgrid algorithm editor.
//!
//! Provides a unified API for opening an instrument, feeding it pointer
//! events and committing the edited graph that both the GUI and CLI can
//! share.

mod change;
mod controller;
mod document;
mod history;
mod instrument;

pub use change::{build_change, commit};
pub use controller::{PointerState, Session, SessionConfig, Transition};
pub use document::Document;
pub use history::UndoStack;
pub use instrument::InstrumentDocument;

// Re-export common types so callers don't need og-ir/og-render directly.
pub use og_ir::{Change, CustomAlgorithm, CustomFeedback, Mode, NodeIndex};
pub use og_render::{Palette, Pixmap, Surface};
