//! Crate error type
//!
//! The simulation itself never fails; only the edges that touch the outside
//! world (settings parsing, host element lookup) return errors.

use thiserror::Error;

/// Errors raised at the crate's fallible edges.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings JSON could not be parsed.
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_json::Error),
    /// Settings file could not be read.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    /// A required host element (window, document, canvas) is missing.
    #[error("missing host element: {0}")]
    MissingElement(&'static str),
    /// The host refused to hand out a 2D drawing context.
    #[error("2d drawing context unavailable")]
    ContextUnavailable,
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
