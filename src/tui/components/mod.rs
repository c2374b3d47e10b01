//! UI components for the star rating TUI.
//!
//! Components follow the bubbletea-rs Model-View pattern: each renders a
//! string from a borrowed view context and holds no application state.

mod star_row;

pub use star_row::{StarRowComponent, StarRowViewContext};
