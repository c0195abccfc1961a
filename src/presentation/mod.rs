//! Presentation layer for visual styling.
//!
//! Builds egui frames and rich text from the theme palette so panels never
//! branch on the theme themselves.

pub mod styling;
