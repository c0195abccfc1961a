//! Theme application.
//!
//! Maps the current theme's palette onto egui's visuals. The theme itself is
//! never persisted; every launch starts dark.

use folio::{Theme, ThemeColors};

/// Coordinates theme application.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the theme to the egui context.
    ///
    /// Called every frame so a toggle takes effect on the next paint.
    pub fn apply_current_theme(ctx: &egui::Context, theme: Theme) {
        ctx.set_visuals(Self::visuals_for(theme));
    }

    /// Builds egui visuals for a theme.
    pub fn visuals_for(theme: Theme) -> egui::Visuals {
        let mut visuals = if theme.is_dark() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        Self::apply_colors(&theme.colors(), &mut visuals);
        visuals
    }

    fn apply_colors(colors: &ThemeColors, visuals: &mut egui::Visuals) {
        // Backgrounds
        visuals.panel_fill = colors.page_background;
        visuals.window_fill = colors.surface;
        visuals.extreme_bg_color = colors.input_background;
        visuals.faint_bg_color = colors.surface;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.accent_hover;
        visuals.selection.stroke.color = colors.accent;

        // Widgets
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.weak_bg_fill = colors.input_background;
        visuals.widgets.hovered.weak_bg_fill = colors.border;
        visuals.widgets.active.weak_bg_fill = colors.accent_hover;

        visuals.hyperlink_color = colors.accent;
    }
}
