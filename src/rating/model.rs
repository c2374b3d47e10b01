//! Rating value and word-form label vocabulary.
//!
//! A rating is an integer in the closed range [0, 5], where 0 means "no
//! rating selected yet". Selected controls carry the neutral label plus the
//! English word for the rating value.

use std::fmt;

use super::error::RatingError;

/// Label carried by a control with no selection applied.
pub const NEUTRAL_LABEL: &str = "star";

/// The number of stars a user can select, in [0, 5].
///
/// `Rating::UNRATED` (zero) is the initial state; selectable values are
/// constructed fallibly through [`Rating::new`] so an in-range invariant
/// holds everywhere a `Rating` is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    /// The initial "no rating selected yet" state.
    pub const UNRATED: Self = Self(0);

    /// Lowest selectable rating.
    pub const MIN_STARS: u8 = 1;

    /// Highest selectable rating.
    pub const MAX_STARS: u8 = 5;

    /// Creates a rating from a star count in the selectable range 1–5.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] for 0 and for values above 5.
    pub const fn new(stars: u8) -> Result<Self, RatingError> {
        if stars >= Self::MIN_STARS && stars <= Self::MAX_STARS {
            Ok(Self(stars))
        } else {
            Err(RatingError::OutOfRange { value: stars })
        }
    }

    /// Returns the numeric star count (0 when unrated).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` once a selection has been made.
    #[must_use]
    pub const fn is_rated(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// English word-form for a selectable rating value.
///
/// Every selected control carries the word for the *total* selected count,
/// not its own ordinal position; this mirrors the observed behaviour of the
/// widget being reimplemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordForm {
    /// Word-form of rating 1.
    One,
    /// Word-form of rating 2.
    Two,
    /// Word-form of rating 3.
    Three,
    /// Word-form of rating 4.
    Four,
    /// Word-form of rating 5.
    Five,
}

impl WordForm {
    /// Returns the lowercase English word.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::One => "one",
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Five => "five",
        }
    }

    /// Returns the word-form for a rating, or `None` when unrated.
    #[must_use]
    pub const fn for_rating(rating: Rating) -> Option<Self> {
        match rating.value() {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            _ => None,
        }
    }
}

/// Builds the label carried by a selected control: the neutral label plus
/// the word-form suffix of the total selected count.
#[must_use]
pub fn selected_label(word: WordForm) -> String {
    format!("{NEUTRAL_LABEL} {}", word.as_str())
}
