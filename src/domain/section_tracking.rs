//! Active section derivation.
//!
//! A section is in view when the viewport midpoint falls inside its bounds.
//! Sections are tested in document order and the first hit wins, so when
//! bounds overlap (fast scrolling, mid-resize layouts) the earlier section is
//! chosen regardless of which one is drawn on top.

use crate::section::Section;
use crate::traits::{SectionBounds, SectionRegistry};

/// Returns the first section, in document order, whose bounds contain
/// `midpoint`.
///
/// `measure` yields `None` for sections that cannot be measured; those are
/// skipped.
pub fn active_section_at<F>(midpoint: f32, measure: F) -> Option<Section>
where
    F: Fn(Section) -> Option<SectionBounds>,
{
    Section::ALL
        .into_iter()
        .find(|&section| measure(section).is_some_and(|bounds| bounds.contains(midpoint)))
}

/// Derives the active section from a registry and a viewport height.
pub fn derive_active_section<R>(registry: &R, viewport_height: f32) -> Option<Section>
where
    R: SectionRegistry + ?Sized,
{
    active_section_at(viewport_height / 2.0, |section| registry.bounds(section))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stacks sections vertically starting at `start` with the given heights.
    fn stacked(start: f32, heights: [f32; 5]) -> impl Fn(Section) -> Option<SectionBounds> {
        move |section| {
            let top = start + heights[..section.index()].iter().sum::<f32>();
            Some(SectionBounds::new(top, top + heights[section.index()]))
        }
    }

    #[test]
    fn test_home_at_top_of_page() {
        let measure = stacked(0.0, [800.0; 5]);
        assert_eq!(active_section_at(400.0, measure), Some(Section::Home));
    }

    #[test]
    fn test_scrolled_into_skills() {
        // Scrolled 1700 points: home [-1700,-900], about [-900,-100], skills [-100,700]
        let measure = stacked(-1700.0, [800.0; 5]);
        assert_eq!(active_section_at(400.0, measure), Some(Section::Skills));
    }

    #[test]
    fn test_shared_edge_prefers_earlier_section() {
        // about ends exactly where skills begins, at the midpoint
        let measure = stacked(-1200.0, [800.0; 5]);
        assert_eq!(active_section_at(400.0, measure), Some(Section::About));
    }

    #[test]
    fn test_overlap_resolves_by_document_order() {
        let measure = |section: Section| match section {
            Section::Projects => Some(SectionBounds::new(0.0, 800.0)),
            Section::About => Some(SectionBounds::new(300.0, 500.0)),
            _ => None,
        };
        assert_eq!(active_section_at(400.0, measure), Some(Section::About));
    }

    #[test]
    fn test_gap_between_sections_matches_nothing() {
        let measure = |section: Section| match section {
            Section::Home => Some(SectionBounds::new(-500.0, 350.0)),
            Section::About => Some(SectionBounds::new(450.0, 1200.0)),
            _ => None,
        };
        assert_eq!(active_section_at(400.0, measure), None);
    }

    #[test]
    fn test_unmeasurable_sections_are_skipped() {
        let measure = |section: Section| match section {
            Section::Home | Section::About => None,
            _ => Some(SectionBounds::new(0.0, 1000.0)),
        };
        assert_eq!(active_section_at(400.0, measure), Some(Section::Skills));
        assert_eq!(active_section_at(400.0, |_| None), None);
    }
}
