//! Editing mode: which graph the editor operates on.

/// Which operator graph is being edited and drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The modulation graph (which operator modulates which).
    #[default]
    Algorithm,
    /// The feedback graph (self and cross feedback routing).
    Feedback,
}

impl Mode {
    /// Short display label for UI rendering.
    pub const fn label(self) -> &'static str {
        match self {
            Mode::Algorithm => "algorithm",
            Mode::Feedback => "feedback",
        }
    }

    /// The other mode.
    pub const fn toggled(self) -> Self {
        match self {
            Mode::Algorithm => Mode::Feedback,
            Mode::Feedback => Mode::Algorithm,
        }
    }
}
