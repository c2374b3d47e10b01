//! Error types for binding and selecting star ratings.

use thiserror::Error;

use super::widget::STAR_COUNT;

/// Errors returned while binding a widget to its star controls.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindError {
    /// The host supplied a control sequence that is not exactly five long.
    #[error("expected exactly {STAR_COUNT} star controls, found {found}")]
    ControlCount {
        /// Number of controls the host actually supplied.
        found: usize,
    },
}

/// Errors returned while selecting a rating.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingError {
    /// The requested rating falls outside the selectable range 1–5.
    ///
    /// Out-of-range selections are rejected rather than clamped; the widget
    /// state is left untouched.
    #[error("rating must be between 1 and {STAR_COUNT}, got {value}")]
    OutOfRange {
        /// The rejected rating value.
        value: u8,
    },
}
