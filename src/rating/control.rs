//! Capability interface over the host's star controls.
//!
//! The widget never owns a rendering environment; it only needs to read and
//! write the presentational label on each of the five controls the host
//! binds it to. Keeping that capability behind a trait lets the selection
//! logic run against plain strings in tests and against whatever surface a
//! host provides in production.

use super::model::NEUTRAL_LABEL;

/// A single star control supplied by the host.
///
/// Implementations hold whatever presentation state the host uses; the
/// widget only reads and rewrites the label.
#[cfg_attr(test, mockall::automock)]
pub trait StarControl {
    /// Replaces the control's presentational label.
    fn set_label(&mut self, label: String);

    /// Returns the control's current presentational label.
    fn label(&self) -> &str;
}

/// A star control backed by an owned label string.
///
/// This is the control type used by the terminal host; it is also convenient
/// in tests that want to observe painted labels directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextControl {
    label: String,
}

impl TextControl {
    /// Creates a control carrying the neutral label.
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: NEUTRAL_LABEL.to_owned(),
        }
    }
}

impl Default for TextControl {
    fn default() -> Self {
        Self::new()
    }
}

impl StarControl for TextControl {
    fn set_label(&mut self, label: String) {
        self.label = label;
    }

    fn label(&self) -> &str {
        &self.label
    }
}
