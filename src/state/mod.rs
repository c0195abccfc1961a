//! State management for the portfolio viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Section tracker (which section is in view)
//! - Theme state (dark/light display mode)
//! - Menu state (mobile navigation visibility)

mod section_tracker;
mod theme_state;
mod menu_state;

pub use section_tracker::SectionTracker;
pub use theme_state::ThemeState;
pub use menu_state::MenuState;
