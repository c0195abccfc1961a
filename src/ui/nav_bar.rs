//! Navigation bar UI rendering
//!
//! Fixed bar at the top of the window: brand on the left, section links (or
//! the hamburger in compact layout) and the theme toggle on the right.

use egui::RichText;
use folio::{NavigationController, Section, Theme, ThemeColors};

use crate::presentation::styling;

/// Result of user interaction with the navigation bar
pub enum NavBarInteraction {
    /// User clicked a section link
    SectionClicked(Section),
    /// User clicked the theme toggle
    ThemeToggleClicked,
    /// User clicked the hamburger button
    MenuToggleClicked,
}

/// Renders the navigation bar
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `navigation` - Current navigation state (read only)
/// * `brand` - Text of the brand link
/// * `compact` - Whether the compact layout is active
///
/// # Returns
/// * `Option<NavBarInteraction>` - User interaction result
pub fn render_nav_bar(
    ui: &mut egui::Ui,
    navigation: &NavigationController,
    brand: &str,
    compact: bool,
) -> Option<NavBarInteraction> {
    let colors = navigation.theme_colors();
    let mut interaction = None;

    ui.horizontal(|ui| {
        let brand_text = RichText::new(brand).size(24.0).strong().color(colors.accent);
        if ui.add(egui::Button::new(brand_text).frame(false)).clicked() {
            interaction = Some(NavBarInteraction::SectionClicked(Section::Home));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add(egui::Button::new(theme_toggle_label(navigation.theme(), &colors)).frame(false))
                .on_hover_text("Toggle theme")
                .clicked()
            {
                interaction = Some(NavBarInteraction::ThemeToggleClicked);
            }

            if compact {
                let icon = if navigation.menu_open() { "✕" } else { "☰" };
                if ui
                    .add(egui::Button::new(RichText::new(icon).size(22.0).color(colors.text)).frame(false))
                    .clicked()
                {
                    interaction = Some(NavBarInteraction::MenuToggleClicked);
                }
                return;
            }

            ui.add_space(12.0);
            // Right-to-left layout: add links in reverse to keep document order
            for section in Section::ALL.into_iter().rev() {
                let text = styling::nav_link_text(section, navigation.is_active(section), &colors);
                if ui.add(egui::Button::new(text).frame(false)).clicked() {
                    interaction = Some(NavBarInteraction::SectionClicked(section));
                }
                ui.add_space(8.0);
            }
        });
    });

    interaction
}

fn theme_toggle_label(theme: Theme, colors: &ThemeColors) -> RichText {
    let icon = match theme {
        Theme::Dark => "☀",
        Theme::Light => "🌙",
    };
    RichText::new(icon).size(20.0).color(colors.text)
}
