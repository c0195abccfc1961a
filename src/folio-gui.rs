//! Folio portfolio viewer GUI application
//!
//! Renders a single-page personal portfolio with the egui framework:
//! - Fixed navigation bar highlighting the section currently in view
//! - Smooth scrolling to a section from the navigation links
//! - Dark/light theme toggle
//! - Collapsible navigation menu on narrow windows

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordination
//! - `presentation/` - Visual styling derived from the theme palette
//! - `ui/` - Panel rendering, layout and section measurement
//!
//! Navigation state, scroll tracking, theming and content loading live in the
//! `folio` library.

use eframe::egui;
use std::path::PathBuf;

mod app;
mod presentation;
mod ui;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator};
use folio::PortfolioContent;
use ui::panel_manager::PanelManager;

/// Main application entry point that initializes and launches the portfolio viewer.
fn main() -> eframe::Result {
    if let Err(e) = folio::logging::init() {
        eprintln!("{e}");
    }

    // First command-line argument is an optional content file
    let content_path = std::env::args().nth(1).map(PathBuf::from);
    let content = PortfolioContent::load_or_default(content_path.as_deref());
    let title = format!("{} | Portfolio", content.owner);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(FolioApp::new(content)))),
    )
}

/// The portfolio viewer application.
///
/// Delegates to coordinators:
/// - `ThemeCoordinator` applies the current theme to egui visuals
/// - `PanelManager` renders the panels and measures the sections
/// - `ApplicationCoordinator` tracks scrolling and applies interactions
struct FolioApp {
    state: AppState,
}

impl FolioApp {
    fn new(content: PortfolioContent) -> Self {
        Self {
            state: AppState::new(content),
        }
    }
}

impl eframe::App for FolioApp {
    /// Main update loop.
    ///
    /// 1. Apply theme
    /// 2. Render all panels (measures sections and the scroll viewport)
    /// 3. Feed the scroll position to the section tracker
    /// 4. Handle the frame's interaction
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, self.state.navigation.theme());

        let interaction = PanelManager::render_all_panels(ctx, &mut self.state);

        if ApplicationCoordinator::sync_scroll(&mut self.state) {
            ctx.request_repaint();
        }

        if let Some(interaction) = interaction {
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction);
            // Parked scroll requests are carried out during the next layout pass
            ctx.request_repaint();
        }
    }
}
