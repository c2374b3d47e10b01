//! Fivestar library crate providing a five-star rating selector.
//!
//! The core widget repaints the labels of five bound star controls on every
//! selection and exposes the last-selected value as the current rating. The
//! crate also ships a terminal host built on bubbletea-rs and a layered
//! configuration loader for the binary.

pub mod config;
pub mod error;
pub mod rating;
pub mod tui;

pub use config::FivestarConfig;
pub use error::FivestarError;
pub use rating::{
    BindError, NEUTRAL_LABEL, Rating, RatingError, RatingWidget, STAR_COUNT, StarControl,
    TextControl, WordForm, selected_label,
};
