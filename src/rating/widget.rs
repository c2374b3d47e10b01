//! The rating widget: reset-then-paint selection over five bound controls.

use tracing::{debug, warn};

use super::control::StarControl;
use super::error::{BindError, RatingError};
use super::model::{NEUTRAL_LABEL, Rating, WordForm, selected_label};

/// Number of star controls a host must supply.
pub const STAR_COUNT: usize = 5;

/// A five-star rating selector bound to a fixed sequence of controls.
///
/// The widget owns the current rating and repaints control labels on every
/// selection; it never creates or destroys controls. Controls are ordered
/// first-to-fifth, matching the host's visual left-to-right order.
#[derive(Debug, Clone)]
pub struct RatingWidget<C: StarControl> {
    controls: [C; STAR_COUNT],
    current: Rating,
}

impl<C: StarControl> RatingWidget<C> {
    /// Binds the widget to an exact five-control sequence.
    ///
    /// Binding resets every control to the neutral label so the initial
    /// no-selection invariant holds regardless of the labels the host
    /// passed in.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::ControlCount`] when the host supplies fewer or
    /// more than five controls. The structural check happens once here, so
    /// selection can never index out of bounds later.
    pub fn bind(controls: Vec<C>) -> Result<Self, BindError> {
        let array: [C; STAR_COUNT] = controls
            .try_into()
            .map_err(|rejected: Vec<C>| BindError::ControlCount {
                found: rejected.len(),
            })?;
        Ok(Self::from_controls(array))
    }

    /// Binds the widget to exactly five controls, infallibly.
    #[must_use]
    pub fn from_controls(mut controls: [C; STAR_COUNT]) -> Self {
        for control in &mut controls {
            control.set_label(NEUTRAL_LABEL.to_owned());
        }
        debug!("bound {STAR_COUNT} star controls");
        Self {
            controls,
            current: Rating::UNRATED,
        }
    }

    /// Selects a rating by star count, repainting all five controls.
    ///
    /// Runs reset-then-paint: every control is first reset to the neutral
    /// label, then the first `stars` controls each receive the neutral
    /// label plus the word-form suffix of `stars` itself. All selected
    /// controls share the one suffix named after the total count; this
    /// mirrors the observed behaviour of the widget being reimplemented.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] for values outside 1–5; the
    /// widget state is left untouched.
    pub fn select(&mut self, stars: u8) -> Result<Rating, RatingError> {
        let rating = match Rating::new(stars) {
            Ok(rating) => rating,
            Err(error) => {
                warn!(stars, "rejected out-of-range rating selection");
                return Err(error);
            }
        };
        self.apply(rating);
        Ok(rating)
    }

    /// Applies a validated rating, repainting all five controls.
    ///
    /// Applying [`Rating::UNRATED`] clears the selection back to the
    /// initial state.
    pub fn apply(&mut self, rating: Rating) {
        for control in &mut self.controls {
            control.set_label(NEUTRAL_LABEL.to_owned());
        }
        if let Some(word) = WordForm::for_rating(rating) {
            let label = selected_label(word);
            for control in self.controls.iter_mut().take(rating.value() as usize) {
                control.set_label(label.clone());
            }
        }
        self.current = rating;
        debug!(stars = rating.value(), "rating applied");
    }

    /// Returns the last selected rating, or [`Rating::UNRATED`] before any
    /// successful selection. Pure read, no side effects.
    #[must_use]
    pub const fn current_rating(&self) -> Rating {
        self.current
    }

    /// Read access to the bound controls, first-to-fifth order.
    #[must_use]
    pub const fn controls(&self) -> &[C] {
        &self.controls
    }
}
