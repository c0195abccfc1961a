//! Viewport navigation controller.
//!
//! Composes the three pieces of UI state owned by the page root: the section
//! tracker, the theme switch and the mobile menu switch. Each is mutated only
//! through the controller's operations; renderers read them through the query
//! methods and all see the same value within a frame.

use crate::error::LookupError;
use crate::events::{ScrollHub, ScrollSubscription};
use crate::section::Section;
use crate::state::{MenuState, SectionTracker, ThemeState};
use crate::theme::{Theme, ThemeColors};
use crate::traits::{ScrollBehavior, SectionRegistry};

/// Root UI state of the portfolio page.
#[derive(Debug, Default)]
pub struct NavigationController {
    tracker: SectionTracker,
    theme: ThemeState,
    menu: MenuState,
    /// Live while mounted; dropping it detaches the scroll listener.
    subscription: Option<ScrollSubscription>,
}

impl NavigationController {
    /// Creates a controller with Home active, dark theme and the menu closed.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn active_section(&self) -> Option<Section> {
        self.tracker.active()
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.tracker.is_active(section)
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn theme_colors(&self) -> ThemeColors {
        self.theme.colors()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    // ===== Lifecycle =====

    /// Attaches to the scroll hub and derives the active section once.
    ///
    /// The initial derivation covers pages that open already scrolled (scroll
    /// restoration). Mounting again replaces the previous subscription.
    pub fn mount<R>(&mut self, hub: &ScrollHub, registry: &R, viewport_height: f32)
    where
        R: SectionRegistry + ?Sized,
    {
        self.subscription = Some(hub.subscribe());
        self.tracker.recompute(registry, viewport_height);
        tracing::info!(active = ?self.active_section(), "navigation controller mounted");
    }

    /// Detaches from the scroll hub.
    pub fn unmount(&mut self) {
        if self.subscription.take().is_some() {
            tracing::info!("navigation controller unmounted");
        }
    }

    // ===== Scroll Tracking =====

    /// Handles every scroll event queued since the last call.
    ///
    /// Does nothing while unmounted. Returns true if the active section changed.
    pub fn process_scroll_events<R>(&mut self, registry: &R) -> bool
    where
        R: SectionRegistry + ?Sized,
    {
        let Some(subscription) = &self.subscription else {
            return false;
        };
        let mut changed = false;
        for event in subscription.drain() {
            changed |= self.tracker.recompute(registry, event.viewport_height);
        }
        changed
    }

    // ===== User Actions =====

    /// Flips the display theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    /// Flips the mobile navigation menu.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu.toggle()
    }

    /// Jumps to a section.
    ///
    /// Requests a smooth scroll, then marks the section active and closes the
    /// menu without waiting for the scroll to finish. Scroll tracking takes
    /// over again with the next scroll event.
    ///
    /// # Errors
    /// Returns [`LookupError::MissingElement`] when the registry has no element
    /// for the section. No state is changed in that case.
    pub fn navigate_to<R>(&mut self, registry: &mut R, section: Section) -> Result<(), LookupError>
    where
        R: SectionRegistry + ?Sized,
    {
        registry.scroll_into_view(section, ScrollBehavior::Smooth)?;
        self.tracker.set_active(section);
        self.menu.close();
        tracing::debug!(section = %section, "navigated");
        Ok(())
    }

    /// Jumps to a section given by its identifier (e.g. `"contact"`).
    ///
    /// # Errors
    /// Returns [`LookupError::UnknownSection`] for an unrecognised identifier,
    /// or any error from [`navigate_to`](Self::navigate_to).
    pub fn navigate_to_id<R>(&mut self, registry: &mut R, id: &str) -> Result<Section, LookupError>
    where
        R: SectionRegistry + ?Sized,
    {
        let section: Section = id.parse()?;
        self.navigate_to(registry, section)?;
        Ok(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SectionBounds;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeView {
        bounds: HashMap<Section, SectionBounds>,
        scroll_requests: Vec<(Section, ScrollBehavior)>,
    }

    impl SectionRegistry for FakeView {
        fn bounds(&self, section: Section) -> Option<SectionBounds> {
            self.bounds.get(&section).copied()
        }

        fn scroll_into_view(&mut self, section: Section, behavior: ScrollBehavior) -> Result<(), LookupError> {
            if !self.bounds.contains_key(&section) {
                return Err(LookupError::MissingElement(section));
            }
            self.scroll_requests.push((section, behavior));
            Ok(())
        }
    }

    #[test]
    fn test_initial_state() {
        let controller = NavigationController::new();
        assert_eq!(controller.active_section(), Some(Section::Home));
        assert_eq!(controller.theme(), Theme::Dark);
        assert!(!controller.menu_open());
        assert!(!controller.is_mounted());
    }

    #[test]
    fn test_navigate_missing_element_changes_nothing() {
        let mut view = FakeView::default();
        let mut controller = NavigationController::new();
        controller.toggle_menu();

        let err = controller.navigate_to(&mut view, Section::About).unwrap_err();
        assert_eq!(err, LookupError::MissingElement(Section::About));
        assert_eq!(controller.active_section(), Some(Section::Home));
        assert!(controller.menu_open());
        assert!(view.scroll_requests.is_empty());
    }

    #[test]
    fn test_navigate_to_id() {
        let mut view = FakeView::default();
        view.bounds.insert(Section::Skills, SectionBounds::new(900.0, 1600.0));
        let mut controller = NavigationController::new();

        assert_eq!(controller.navigate_to_id(&mut view, "skills"), Ok(Section::Skills));
        assert_eq!(controller.active_section(), Some(Section::Skills));

        let err = controller.navigate_to_id(&mut view, "blog").unwrap_err();
        assert_eq!(err, LookupError::UnknownSection("blog".to_string()));
        assert_eq!(controller.active_section(), Some(Section::Skills));
    }

    #[test]
    fn test_events_ignored_while_unmounted() {
        let hub = ScrollHub::new();
        let mut view = FakeView::default();
        view.bounds.insert(Section::Contact, SectionBounds::new(0.0, 1000.0));

        let mut controller = NavigationController::new();
        controller.mount(&hub, &view, 800.0);
        assert_eq!(controller.active_section(), Some(Section::Contact));
        assert_eq!(hub.listener_count(), 1);

        controller.unmount();
        assert_eq!(hub.listener_count(), 0);

        view.bounds.clear();
        view.bounds.insert(Section::About, SectionBounds::new(0.0, 1000.0));
        hub.observe(50.0, 1200.0, 800.0);
        assert!(!controller.process_scroll_events(&view));
        assert_eq!(controller.active_section(), Some(Section::Contact));
    }
}
