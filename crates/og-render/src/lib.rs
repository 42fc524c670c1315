//! Canvas rendering for the opgrid algorithm editor.
//!
//! Draws the operator grid through the [`Surface`] trait so the same scene
//! can land on a GUI draw list or on the offscreen [`Pixmap`].

#[cfg(feature = "png")]
mod export;
mod glyph;
mod palette;
mod pixmap;
mod scene;
mod surface;

#[cfg(feature = "png")]
pub use export::ExportError;
pub use palette::Palette;
pub use pixmap::Pixmap;
pub use scene::{redraw, Scene};
pub use surface::{Color, Surface};
