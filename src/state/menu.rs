//! Mobile navigation menu state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Open/closed state of the mobile navigation panel.
///
/// Visibility is binary and immediate; there is no animation state to track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Panel hidden.
    #[default]
    Closed,
    /// Panel visible.
    Open,
}

impl MenuState {
    /// The menu button flips the panel.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Clicking a navigation link always closes the panel.
    #[must_use]
    pub fn closed(self) -> Self {
        Self::Closed
    }

    /// Whether the panel is visible.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}
