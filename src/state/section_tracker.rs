//! Active section tracking.
//!
//! This module owns the "which section is in view" state. The value is only
//! ever replaced by a fresh derivation or by an explicit navigation, never
//! adjusted incrementally, so a stale scroll event can simply be superseded.

use crate::domain::section_tracking;
use crate::section::Section;
use crate::traits::SectionRegistry;

/// State of the section currently considered in view.
///
/// Responsibilities:
/// - Recomputing the active section from measured section bounds
/// - Retaining the previous value when no section matches
/// - Accepting optimistic updates from navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTracker {
    active: Option<Section>,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTracker {
    /// Creates a tracker with Home active.
    pub fn new() -> Self {
        Self {
            active: Some(Section::Home),
        }
    }

    // ===== Queries =====

    /// Returns the active section, if one has been determined.
    pub fn active(&self) -> Option<Section> {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == Some(section)
    }

    // ===== Mutations =====

    /// Re-derives the active section from the registry's current measurements.
    ///
    /// Keeps the previous value when no section contains the viewport midpoint.
    /// Returns true if the active section changed.
    pub fn recompute<R>(&mut self, registry: &R, viewport_height: f32) -> bool
    where
        R: SectionRegistry + ?Sized,
    {
        match section_tracking::derive_active_section(registry, viewport_height) {
            Some(section) if self.active != Some(section) => {
                tracing::debug!(from = ?self.active, to = %section, "active section changed");
                self.active = Some(section);
                true
            }
            _ => false,
        }
    }

    /// Sets the active section directly.
    pub(crate) fn set_active(&mut self, section: Section) {
        self.active = Some(section);
    }
}
