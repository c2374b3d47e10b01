//! Star row component rendering the five controls.
//!
//! Renders each control from its presentational label: a filled glyph for a
//! selected control, a hollow glyph for a neutral one, plus the label text
//! itself so the painted class names stay visible to the user.

use crate::rating::NEUTRAL_LABEL;

/// Glyph rendered for a selected control.
const SELECTED_GLYPH: &str = "★";

/// Glyph rendered for a neutral control.
const NEUTRAL_GLYPH: &str = "☆";

/// Context for rendering the star row view.
///
/// Borrows the control labels so rendering does not allocate per frame
/// beyond the output string.
#[derive(Debug, Clone)]
pub struct StarRowViewContext<'a> {
    /// Labels of the five controls, first-to-fifth order.
    pub labels: &'a [&'a str],
}

/// Component for displaying the row of star controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarRowComponent;

impl StarRowComponent {
    /// Creates a new star row component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the star row as two lines: glyphs, then labels.
    #[must_use]
    pub fn view(&self, ctx: &StarRowViewContext<'_>) -> String {
        let glyphs = ctx
            .labels
            .iter()
            .map(|&label| Self::glyph_for(label))
            .collect::<Vec<_>>()
            .join("  ");
        let captions = ctx
            .labels
            .iter()
            .map(|&label| format!("[{label}]"))
            .collect::<Vec<_>>()
            .join(" ");
        format!("  {glyphs}\n  {captions}\n")
    }

    /// Picks the glyph for a control label: any suffix beyond the neutral
    /// label marks the control as selected.
    fn glyph_for(label: &str) -> &'static str {
        if label == NEUTRAL_LABEL {
            NEUTRAL_GLYPH
        } else {
            SELECTED_GLYPH
        }
    }
}
