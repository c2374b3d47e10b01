//! Core five-star rating widget, independent of any rendering environment.
//!
//! The widget binds to exactly five label-bearing controls supplied by a
//! host, repaints their labels on every selection using the reset-then-paint
//! scheme, and tracks the last-selected position as the current rating. The
//! host surface is abstracted behind the [`StarControl`] capability trait so
//! the selection logic can be exercised with plain strings.

mod control;
mod error;
mod model;
mod widget;

pub use control::{StarControl, TextControl};
pub use error::{BindError, RatingError};
pub use model::{NEUTRAL_LABEL, Rating, WordForm, selected_label};
pub use widget::{RatingWidget, STAR_COUNT};
