//! Terminal user interface hosting the star rating widget.
//!
//! This module is the widget's host: it supplies the five controls,
//! translates key presses into selections, and displays the current rating
//! using the bubbletea-rs framework.
//!
//! # Architecture
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: Application state in [`app::RatingApp`]
//! - **View**: Rendering logic in each component's `view()` method
//! - **Update**: Message-driven state transitions in `update()`
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, an optional pre-selected rating is passed through module-level
//! storage: call [`set_initial_rating`] before starting the program, and
//! `RatingApp::init()` will pick it up.

use std::sync::OnceLock;

use crate::rating::Rating;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;

pub use app::RatingApp;

/// Global storage for the optional pre-selected rating.
///
/// Set before the TUI program starts and read by `RatingApp::init()`.
static INITIAL_RATING: OnceLock<Rating> = OnceLock::new();

/// Sets the rating the TUI starts with.
///
/// This must be called before starting the bubbletea-rs program.
///
/// # Returns
///
/// `true` if the rating was set, `false` if one was already set.
pub fn set_initial_rating(rating: Rating) -> bool {
    INITIAL_RATING.set(rating).is_ok()
}

/// Gets the pre-selected rating from storage, if one was set.
///
/// Called internally by `RatingApp::init()`.
pub(crate) fn get_initial_rating() -> Option<Rating> {
    INITIAL_RATING.get().copied()
}
