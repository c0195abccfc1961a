//! Style helpers derived from the theme palette.
//!
//! Sections alternate between the page background and the surface color, and
//! cards use whichever of the two their section does not.

use egui::{Color32, RichText};
use folio::{Section, ThemeColors};

pub const HEADING_SIZE: f32 = 40.0;
pub const HERO_SIZE: f32 = 52.0;
pub const BODY_SIZE: f32 = 17.0;
pub const NAV_SIZE: f32 = 17.0;

/// Background fill of a section.
pub fn section_fill(section: Section, colors: &ThemeColors) -> Color32 {
    match section {
        Section::About | Section::Projects => colors.surface,
        Section::Home | Section::Skills | Section::Contact => colors.page_background,
    }
}

/// Fill for cards placed on a background of `on`.
pub fn card_fill(on: Color32, colors: &ThemeColors) -> Color32 {
    if on == colors.surface {
        colors.page_background
    } else {
        colors.surface
    }
}

/// Outer frame of a full-width section.
pub fn section_frame(section: Section, colors: &ThemeColors) -> egui::Frame {
    egui::Frame::new()
        .fill(section_fill(section, colors))
        .inner_margin(egui::Margin::symmetric(16, 80))
}

/// Frame of a card (skill tile, project, contact form).
pub fn card_frame(on: Color32, colors: &ThemeColors) -> egui::Frame {
    egui::Frame::new()
        .fill(card_fill(on, colors))
        .stroke(egui::Stroke::new(1.0, colors.border))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(24))
}

pub fn section_heading(text: &str, colors: &ThemeColors) -> RichText {
    RichText::new(text)
        .size(HEADING_SIZE)
        .strong()
        .color(colors.accent)
}

pub fn body_text(text: &str, colors: &ThemeColors) -> RichText {
    RichText::new(text).size(BODY_SIZE).color(colors.text)
}

pub fn title_text(text: &str, size: f32, colors: &ThemeColors) -> RichText {
    RichText::new(text).size(size).strong().color(colors.text_strong)
}

/// Label of a navigation link; the active one is accented and underlined.
pub fn nav_link_text(section: Section, active: bool, colors: &ThemeColors) -> RichText {
    let text = RichText::new(section.label()).size(NAV_SIZE);
    if active {
        text.color(colors.accent).underline()
    } else {
        text.color(colors.text)
    }
}

/// Filled call-to-action button.
pub fn accent_button(text: &str, colors: &ThemeColors) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text).size(BODY_SIZE).strong().color(Color32::WHITE))
        .fill(colors.accent_hover)
        .corner_radius(egui::CornerRadius::same(20))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio::Theme;

    #[test]
    fn test_sections_alternate_backgrounds() {
        let colors = Theme::Dark.colors();
        let fills: Vec<_> = Section::ALL.iter().map(|&s| section_fill(s, &colors)).collect();
        for pair in fills.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_card_contrasts_with_section() {
        for theme in [Theme::Dark, Theme::Light] {
            let colors = theme.colors();
            for section in Section::ALL {
                let on = section_fill(section, &colors);
                assert_ne!(card_fill(on, &colors), on);
            }
        }
    }
}
