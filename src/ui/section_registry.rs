//! Section registry backed by the rects egui laid out this frame.
//!
//! Sections record their screen rect as they are drawn inside the page scroll
//! area. Bounds are reported relative to the top of the visible scroll
//! viewport. Scroll requests are parked here and carried out the next time the
//! target section is laid out, since egui can only scroll to a rect from
//! inside the scroll area.

use std::collections::HashMap;

use folio::{LookupError, ScrollBehavior, Section, SectionBounds, SectionRegistry};

/// Measured positions of the rendered sections.
#[derive(Debug, Default)]
pub struct MeasuredSectionRegistry {
    /// Screen rects from the latest layout pass.
    rects: HashMap<Section, egui::Rect>,
    /// Visible rect of the page scroll area.
    viewport: Option<egui::Rect>,
    /// Vertical scroll offset of the page scroll area.
    scroll_offset: f32,
    /// Scroll request waiting for the target to be laid out.
    pending_scroll: Option<(Section, ScrollBehavior)>,
}

impl MeasuredSectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where a section was drawn.
    pub fn record(&mut self, section: Section, rect: egui::Rect) {
        self.rects.insert(section, rect);
    }

    /// Records the page scroll area's visible rect and offset.
    pub fn set_viewport(&mut self, viewport: egui::Rect, scroll_offset: f32) {
        self.viewport = Some(viewport);
        self.scroll_offset = scroll_offset;
    }

    pub fn viewport_height(&self) -> Option<f32> {
        self.viewport.map(|rect| rect.height())
    }

    pub fn viewport_width(&self) -> Option<f32> {
        self.viewport.map(|rect| rect.width())
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Returns true once both the viewport and at least one section were measured.
    pub fn is_measured(&self) -> bool {
        self.viewport.is_some() && !self.rects.is_empty()
    }

    /// Takes the pending scroll request if it targets `section`.
    pub fn take_pending_scroll(&mut self, section: Section) -> Option<ScrollBehavior> {
        match self.pending_scroll {
            Some((target, behavior)) if target == section => {
                self.pending_scroll = None;
                Some(behavior)
            }
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn pending_scroll(&self) -> Option<(Section, ScrollBehavior)> {
        self.pending_scroll
    }
}

impl SectionRegistry for MeasuredSectionRegistry {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        let viewport = self.viewport?;
        let rect = self.rects.get(&section)?;
        Some(SectionBounds::new(
            rect.top() - viewport.top(),
            rect.bottom() - viewport.top(),
        ))
    }

    fn scroll_into_view(
        &mut self,
        section: Section,
        behavior: ScrollBehavior,
    ) -> Result<(), LookupError> {
        if !self.rects.contains_key(&section) {
            return Err(LookupError::MissingElement(section));
        }
        self.pending_scroll = Some((section, behavior));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Rect};

    fn measured() -> MeasuredSectionRegistry {
        let mut registry = MeasuredSectionRegistry::new();
        // Scroll area starts below a 60pt nav bar and is 800pt tall
        registry.set_viewport(Rect::from_min_max(pos2(0.0, 60.0), pos2(1200.0, 860.0)), 900.0);
        registry.record(Section::Home, Rect::from_min_max(pos2(0.0, -840.0), pos2(1200.0, -40.0)));
        registry.record(Section::About, Rect::from_min_max(pos2(0.0, -40.0), pos2(1200.0, 560.0)));
        registry
    }

    #[test]
    fn test_bounds_relative_to_viewport_top() {
        let registry = measured();
        assert_eq!(registry.bounds(Section::About), Some(SectionBounds::new(-100.0, 500.0)));
        assert_eq!(registry.bounds(Section::Skills), None);
        assert_eq!(registry.viewport_height(), Some(800.0));
        assert_eq!(registry.viewport_width(), Some(1200.0));
        assert!(registry.is_measured());
    }

    #[test]
    fn test_no_bounds_without_viewport() {
        let mut registry = MeasuredSectionRegistry::new();
        registry.record(Section::Home, Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0)));
        assert_eq!(registry.bounds(Section::Home), None);
        assert!(!registry.is_measured());
    }

    #[test]
    fn test_scroll_request_parked_until_taken() {
        let mut registry = measured();
        registry.scroll_into_view(Section::About, ScrollBehavior::Smooth).unwrap();

        assert_eq!(registry.take_pending_scroll(Section::Home), None);
        assert_eq!(registry.take_pending_scroll(Section::About), Some(ScrollBehavior::Smooth));
        assert_eq!(registry.take_pending_scroll(Section::About), None);
    }

    #[test]
    fn test_scroll_to_unrendered_section_fails() {
        let mut registry = measured();
        let err = registry.scroll_into_view(Section::Contact, ScrollBehavior::Smooth).unwrap_err();
        assert_eq!(err, LookupError::MissingElement(Section::Contact));
        assert_eq!(registry.pending_scroll(), None);
    }
}
