//! Mobile navigation menu state.

/// Whether the compact-layout navigation overlay is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Creates a closed menu.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the menu between open and closed. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        tracing::debug!(open = self.open, "navigation menu toggled");
        self.open
    }

    /// Closes the menu whatever its current state.
    pub fn close(&mut self) {
        self.open = false;
    }
}
