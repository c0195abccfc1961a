//! Theme and styling state management.
//!
//! Holds the current display mode for the lifetime of the process. The
//! choice is never written to storage.

use crate::theme::{Theme, ThemeColors};

/// State related to visual theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeState {
    current: Theme,
}

impl ThemeState {
    /// Creates a new theme state in dark mode.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Theme Queries =====

    /// Returns the current theme.
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Returns the color bundle of the current theme.
    pub fn colors(&self) -> ThemeColors {
        self.current.colors()
    }

    // ===== Theme Mutations =====

    /// Flips between dark and light. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        tracing::debug!(theme = %self.current, "theme toggled");
        self.current
    }
}
