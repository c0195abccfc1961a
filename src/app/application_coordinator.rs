//! Application-level coordination.
//!
//! Turns panel interactions into controller operations and feeds the page
//! scroll position into the scroll hub once per frame. This is the UI
//! boundary: navigation lookup failures are logged here and go no further.

use folio::Section;

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;

/// Coordinates application-level operations.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Synchronizes scroll tracking with the latest layout pass.
    ///
    /// Mounts the controller on the first measured frame, then publishes the
    /// scroll sample and lets the controller consume the resulting events.
    /// Returns true if the active section changed.
    pub fn sync_scroll(state: &mut AppState) -> bool {
        let (Some(viewport_width), Some(viewport_height)) = (
            state.sections.viewport_width(),
            state.sections.viewport_height(),
        ) else {
            return false;
        };
        if !state.sections.is_measured() {
            return false;
        }

        let before = state.navigation.active_section();
        if !state.navigation.is_mounted() {
            state
                .navigation
                .mount(&state.scroll_hub, &state.sections, viewport_height);
        }

        state.scroll_hub.observe(
            state.sections.scroll_offset(),
            viewport_width,
            viewport_height,
        );
        state.navigation.process_scroll_events(&state.sections);

        state.navigation.active_section() != before
    }

    /// Applies a panel interaction to the application state.
    pub fn handle_interaction(state: &mut AppState, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::NavigateRequested(section) => Self::navigate(state, section),
            PanelInteraction::ThemeToggleRequested => {
                state.navigation.toggle_theme();
            }
            PanelInteraction::MenuToggleRequested => {
                state.navigation.toggle_menu();
            }
            PanelInteraction::ContactSubmitted => {
                tracing::info!("contact form submitted; sending messages is not available");
            }
        }
    }

    /// Jumps to a section, swallowing lookup failures.
    pub fn navigate(state: &mut AppState, section: Section) {
        if let Err(e) = state.navigation.navigate_to(&mut state.sections, section) {
            tracing::warn!(section = %section, error = %e, "navigation ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Rect};
    use folio::{PortfolioContent, ScrollBehavior};

    /// Lays out five 800pt sections in a 1000x600pt viewport scrolled by `offset`.
    fn lay_out(state: &mut AppState, offset: f32) {
        lay_out_sized(state, offset, 1000.0, 800.0);
    }

    /// Lays out five equally tall sections in a viewport `width` wide and 600pt tall.
    fn lay_out_sized(state: &mut AppState, offset: f32, width: f32, section_height: f32) {
        let viewport = Rect::from_min_max(pos2(0.0, 0.0), pos2(width, 600.0));
        state.sections.set_viewport(viewport, offset);
        for section in Section::ALL {
            let top = section.index() as f32 * section_height - offset;
            state.sections.record(
                section,
                Rect::from_min_max(pos2(0.0, top), pos2(width, top + section_height)),
            );
        }
    }

    #[test]
    fn test_nothing_happens_before_layout() {
        let mut state = AppState::new(PortfolioContent::default());
        assert!(!ApplicationCoordinator::sync_scroll(&mut state));
        assert!(!state.navigation.is_mounted());
    }

    #[test]
    fn test_first_frame_mounts_and_tracks() {
        let mut state = AppState::new(PortfolioContent::default());

        // Restored scroll position: midpoint (300) lands in about [100, 900]
        lay_out(&mut state, 700.0);
        assert!(ApplicationCoordinator::sync_scroll(&mut state));
        assert!(state.navigation.is_mounted());
        assert_eq!(state.navigation.active_section(), Some(Section::About));

        lay_out(&mut state, 2000.0);
        assert!(ApplicationCoordinator::sync_scroll(&mut state));
        assert_eq!(state.navigation.active_section(), Some(Section::Skills));

        // Unchanged scroll position publishes nothing
        assert!(!ApplicationCoordinator::sync_scroll(&mut state));
    }

    #[test]
    fn test_width_only_resize_retracks_reflowed_sections() {
        let mut state = AppState::new(PortfolioContent::default());
        lay_out(&mut state, 700.0);
        ApplicationCoordinator::sync_scroll(&mut state);
        assert_eq!(state.navigation.active_section(), Some(Section::About));

        // Narrower window: same offset and height, but sections reflow to 300pt.
        // Midpoint is 700 + 300 = 1000 in document space, inside projects [900, 1200].
        lay_out_sized(&mut state, 700.0, 500.0, 300.0);
        assert!(ApplicationCoordinator::sync_scroll(&mut state));
        assert_eq!(state.navigation.active_section(), Some(Section::Projects));
    }

    #[test]
    fn test_contact_submission_log_omits_visitor_details() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl Write for Captured {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();

        let mut state = AppState::default();
        state.contact_form.name = "Ada Lovelace".to_string();
        state.contact_form.email = "ada@example.com".to_string();
        tracing::subscriber::with_default(subscriber, || {
            ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::ContactSubmitted);
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("contact form submitted"));
        assert!(!output.contains("Ada Lovelace"));
        assert!(!output.contains("ada@example.com"));
    }

    #[test]
    fn test_navigate_interaction() {
        let mut state = AppState::new(PortfolioContent::default());
        lay_out(&mut state, 0.0);
        ApplicationCoordinator::sync_scroll(&mut state);

        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::MenuToggleRequested);
        assert!(state.navigation.menu_open());

        ApplicationCoordinator::handle_interaction(
            &mut state,
            PanelInteraction::NavigateRequested(Section::Contact),
        );
        assert_eq!(state.navigation.active_section(), Some(Section::Contact));
        assert!(!state.navigation.menu_open());
        assert_eq!(
            state.sections.pending_scroll(),
            Some((Section::Contact, ScrollBehavior::Smooth))
        );
    }

    #[test]
    fn test_navigate_before_layout_is_ignored() {
        let mut state = AppState::new(PortfolioContent::default());
        state.navigation.toggle_menu();

        ApplicationCoordinator::navigate(&mut state, Section::Projects);
        assert_eq!(state.navigation.active_section(), Some(Section::Home));
        assert!(state.navigation.menu_open());
    }

    #[test]
    fn test_theme_toggle_interaction() {
        let mut state = AppState::default();
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::ThemeToggleRequested);
        ApplicationCoordinator::handle_interaction(&mut state, PanelInteraction::ThemeToggleRequested);
        assert_eq!(state.navigation.theme(), folio::Theme::Dark);
    }
}
