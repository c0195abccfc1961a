//! Domain logic for the portfolio viewer.
//!
//! Pure functions with no UI concerns:
//! - Section tracking (viewport midpoint sampling over section bounds)
//! - Particle motion for the home backdrop

pub mod section_tracking;
pub mod particles;
