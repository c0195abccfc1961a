//! Seams between the navigation core and the view that renders the page.
//!
//! The core never touches widgets directly. It measures sections and asks for
//! scrolling through [`SectionRegistry`], which the UI implements on top of
//! whatever it rendered last.

use crate::error::LookupError;
use crate::section::Section;

/// Vertical extent of a rendered section in viewport coordinates.
///
/// `top` and `bottom` are relative to the top edge of the visible viewport,
/// so a section above the viewport has a negative `bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f32,
    pub bottom: f32,
}

impl SectionBounds {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Returns true if `y` lies within `[top, bottom]`, edges included.
    pub fn contains(&self, y: f32) -> bool {
        self.top <= y && y <= self.bottom
    }
}

/// How a scroll request should be carried out by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animated scroll.
    #[default]
    Smooth,
    /// Jump without animation.
    Instant,
}

/// Registry mapping each section to a measurable, scrollable view element.
pub trait SectionRegistry {
    /// Returns the current bounds of the section's element.
    ///
    /// `None` means the element is not mounted or cannot be measured yet.
    fn bounds(&self, section: Section) -> Option<SectionBounds>;

    /// Requests that the section's element be scrolled into view.
    ///
    /// The request is fire-and-forget: it returns as soon as the view has
    /// accepted it, not when the scroll finishes. Fails with
    /// [`LookupError::MissingElement`] when the element does not exist.
    fn scroll_into_view(
        &mut self,
        section: Section,
        behavior: ScrollBehavior,
    ) -> Result<(), LookupError>;
}
