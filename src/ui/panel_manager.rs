//! Panel orchestration and layout management.
//!
//! Lays out the navigation bar, the optional mobile menu and the scrolling
//! page, and folds their interactions into a single [`PanelInteraction`].

use crate::app::AppState;
use crate::ui::{layout, mobile_menu, nav_bar, sections};
use folio::Section;

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInteraction {
    /// User asked to jump to a section
    NavigateRequested(Section),
    /// User clicked the theme toggle
    ThemeToggleRequested,
    /// User clicked the hamburger button
    MenuToggleRequested,
    /// User clicked "Send Message"
    ContactSubmitted,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Records the page scroll viewport and section rects into
    /// `state.sections` as a side effect.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let colors = state.navigation.theme_colors();
        let window_width = ctx.content_rect().width();
        let compact = layout::is_compact(window_width);

        egui::TopBottomPanel::top("nav_bar")
            .frame(
                egui::Frame::new()
                    .fill(colors.nav_background)
                    .inner_margin(egui::Margin::symmetric(16, 12)),
            )
            .show(ctx, |ui| {
                let brand = state.content.owner.as_str();
                if let Some(nav) = nav_bar::render_nav_bar(ui, &state.navigation, brand, compact) {
                    interaction = Some(match nav {
                        nav_bar::NavBarInteraction::SectionClicked(section) => {
                            PanelInteraction::NavigateRequested(section)
                        }
                        nav_bar::NavBarInteraction::ThemeToggleClicked => {
                            PanelInteraction::ThemeToggleRequested
                        }
                        nav_bar::NavBarInteraction::MenuToggleClicked => {
                            PanelInteraction::MenuToggleRequested
                        }
                    });
                }
            });

        if compact && state.navigation.menu_open() {
            egui::TopBottomPanel::top("mobile_menu")
                .frame(
                    egui::Frame::new()
                        .fill(colors.nav_background)
                        .inner_margin(egui::Margin::symmetric(16, 12)),
                )
                .show(ctx, |ui| {
                    if let Some(section) = mobile_menu::render_mobile_menu(ui, &state.navigation) {
                        interaction = Some(PanelInteraction::NavigateRequested(section));
                    }
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors.page_background))
            .show(ctx, |ui| {
                let viewport_height = ui.available_height();
                let AppState {
                    content,
                    sections: registry,
                    particles,
                    contact_form,
                    ..
                } = state;
                let mut page = sections::PageContext {
                    content: &*content,
                    colors,
                    particles: particles.as_slice(),
                    registry,
                    contact_form,
                    viewport_height,
                    window_width,
                };

                let output = egui::ScrollArea::vertical()
                    .id_salt("page")
                    .auto_shrink([false, false])
                    .show(ui, |ui| sections::render_page(ui, &mut page));

                page.registry.set_viewport(output.inner_rect, output.state.offset.y);

                if let Some(page_interaction) = output.inner {
                    interaction = Some(match page_interaction {
                        sections::SectionInteraction::Navigate(section) => {
                            PanelInteraction::NavigateRequested(section)
                        }
                        sections::SectionInteraction::ContactSubmitted => {
                            PanelInteraction::ContactSubmitted
                        }
                    });
                }
            });

        interaction
    }
}
