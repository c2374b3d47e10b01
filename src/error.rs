//! Top-level errors surfaced by the fivestar binary.

use thiserror::Error;

use crate::rating::RatingError;

/// Errors surfaced while loading configuration or running the TUI host.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FivestarError {
    /// Loading or merging configuration failed.
    #[error("configuration error: {message}")]
    Configuration {
        /// Error detail from ortho-config.
        message: String,
    },

    /// The configured initial rating is outside the selectable range.
    #[error("invalid initial rating: {source}")]
    InvalidInitialRating {
        /// The range rejection from the rating widget.
        source: RatingError,
    },

    /// The terminal UI failed to start or crashed.
    #[error("terminal UI error: {message}")]
    Tui {
        /// Error detail from bubbletea-rs.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the standard library.
        message: String,
    },
}
