//! Theme support for the portfolio viewer.
//!
//! The page has two display modes. Every theme-dependent color is derived from
//! [`Theme`] through one mapping, [`theme_colors`], so the two variants can
//! never drift apart across widgets.
//!
//! # Examples
//!
//! ```
//! use folio::theme::{Theme, theme_colors};
//!
//! let mut theme = Theme::default();
//! assert_eq!(theme, Theme::Dark);
//! theme = theme.toggled();
//! println!("Light page background: {:?}", theme_colors(theme).page_background);
//! ```

use std::fmt;

use egui::Color32;

/// Display mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Shorthand for [`theme_colors`].
    pub fn colors(self) -> ThemeColors {
        theme_colors(self)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bundle of every color the page derives from the theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    // Backgrounds
    pub page_background: Color32,
    pub nav_background: Color32,
    pub surface: Color32,
    pub input_background: Color32,

    // Foreground
    pub text: Color32,
    pub text_strong: Color32,
    pub text_dim: Color32,

    // Accents
    pub accent: Color32,
    pub accent_hover: Color32,
    pub border: Color32,
}

/// Maps a theme to its color bundle.
pub fn theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
    }
}

fn dark_colors() -> ThemeColors {
    let accent = hex_to_color32("#2dd4bf"); // teal-400
    ThemeColors {
        page_background: hex_to_color32("#111827"), // gray-900
        nav_background: with_alpha(hex_to_color32("#111827"), 230),
        surface: hex_to_color32("#1f2937"), // gray-800
        input_background: hex_to_color32("#374151"),
        text: hex_to_color32("#d1d5db"),
        text_strong: Color32::WHITE,
        text_dim: hex_to_color32("#9ca3af"),
        accent,
        accent_hover: adjust_brightness(accent, 0.8),
        border: hex_to_color32("#4b5563"),
    }
}

fn light_colors() -> ThemeColors {
    let accent = hex_to_color32("#0d9488"); // teal-600
    ThemeColors {
        page_background: hex_to_color32("#f9fafb"),
        nav_background: with_alpha(hex_to_color32("#ffffff"), 230),
        surface: hex_to_color32("#ffffff"),
        input_background: hex_to_color32("#f3f4f6"),
        text: hex_to_color32("#374151"),
        text_strong: hex_to_color32("#111827"),
        text_dim: hex_to_color32("#6b7280"),
        accent,
        accent_hover: adjust_brightness(accent, 0.8),
        border: hex_to_color32("#d1d5db"),
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Returns the color with its alpha replaced (unmultiplied).
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
