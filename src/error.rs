//! Error types for Roster.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Errors that can occur in Roster.
#[derive(Debug, Error)]
pub enum RosterError {
    /// No usable display surface, or terminal setup failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

impl RosterError {
    /// Create a Terminal error.
    pub fn terminal(reason: impl Into<String>) -> Self {
        Self::Terminal(reason.into())
    }
}
