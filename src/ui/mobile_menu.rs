//! Compact-layout navigation menu.

use folio::{NavigationController, Section};

use crate::presentation::styling;

/// Renders the vertical section list shown while the mobile menu is open.
///
/// Returns the section the user picked, if any.
pub fn render_mobile_menu(ui: &mut egui::Ui, navigation: &NavigationController) -> Option<Section> {
    let colors = navigation.theme_colors();
    let mut picked = None;

    ui.vertical_centered(|ui| {
        for section in Section::ALL {
            let text = styling::nav_link_text(section, navigation.is_active(section), &colors);
            if ui.add(egui::Button::new(text).frame(false)).clicked() {
                picked = Some(section);
            }
            ui.add_space(6.0);
        }
    });

    picked
}
