//! UI panel rendering subsystem
//!
//! This module contains all UI rendering for the portfolio page:
//! - Navigation bar (brand, section links, theme toggle, hamburger)
//! - Mobile menu (compact-layout section list)
//! - Page sections (home, about, skills, projects, contact, footer)
//! - Section registry (measured section rects and parked scroll requests)
//! - Layout breakpoints
//! - Panel manager (panel orchestration)

pub mod layout;
pub mod nav_bar;
pub mod mobile_menu;
pub mod sections;
pub mod section_registry;
pub mod panel_manager;
