//! Error types for the portfolio viewer.

use std::path::PathBuf;

use thiserror::Error;

use crate::section::Section;

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Raised when a navigation target cannot be located in the view.
///
/// Navigation aborts without touching any state when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no element registered for section '{0}'")]
    MissingElement(Section),

    #[error("unknown section identifier '{0}'")]
    UnknownSection(String),
}

/// Errors from the ambient layers (content loading, logging setup).
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Content file not found: {path}")]
    ContentNotFound { path: PathBuf },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
