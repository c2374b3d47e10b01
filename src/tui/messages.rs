//! Message types for the TUI update loop.
//!
//! Messages represent user actions routed through the host's update
//! function; the bubbletea-rs event loop serialises them, so the widget
//! only ever sees one selection at a time.

/// Messages for the star rating TUI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    /// The user activated the k-th star control (1-based star count).
    StarSelected(u8),
    /// Toggle the help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,
}
