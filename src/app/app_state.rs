//! Centralized application state for the portfolio viewer.
//!
//! The navigation controller owns all behavioral UI state. Everything else
//! here is either configuration (content), measurement plumbing (registry and
//! scroll hub) or purely local widget state.

use folio::domain::particles::{self, Particle, PARTICLE_COUNT};
use folio::{NavigationController, PortfolioContent, ScrollHub};

use crate::ui::section_registry::MeasuredSectionRegistry;

/// Text typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Main application state.
pub struct AppState {
    /// Active section, theme and menu state
    pub navigation: NavigationController,

    /// Copy displayed on the page
    pub content: PortfolioContent,

    /// Rects of the sections laid out this frame
    pub sections: MeasuredSectionRegistry,

    /// Scroll observations of the page scroll area
    pub scroll_hub: ScrollHub,

    /// Home backdrop particles
    pub particles: Vec<Particle>,

    pub contact_form: ContactForm,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PortfolioContent::default())
    }
}

impl AppState {
    /// Creates a new application state displaying `content`.
    pub fn new(content: PortfolioContent) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            navigation: NavigationController::new(),
            content,
            sections: MeasuredSectionRegistry::new(),
            scroll_hub: ScrollHub::new(),
            particles: particles::generate_field(&mut rng, PARTICLE_COUNT),
            contact_form: ContactForm::default(),
        }
    }
}
