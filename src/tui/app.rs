//! Main TUI application model implementing the MVU pattern.
//!
//! The model plays the role of the widget's host page: it owns the five
//! star controls, routes user input on the k-th control into a selection
//! of k stars, and renders an output line with the current rating.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::rating::{Rating, RatingWidget, STAR_COUNT, StarControl, TextControl};

use super::components::{StarRowComponent, StarRowViewContext};
use super::input::map_key_to_message;
use super::messages::AppMsg;

/// Main application model for the star rating TUI.
#[derive(Debug, Clone)]
pub struct RatingApp {
    /// The rating widget bound to five text controls.
    widget: RatingWidget<TextControl>,
    /// Star row component.
    star_row: StarRowComponent,
    /// Current error message, if any.
    error: Option<String>,
    /// Whether the help overlay is visible.
    show_help: bool,
}

impl RatingApp {
    /// Creates an application with no rating selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            widget: RatingWidget::from_controls(std::array::from_fn(|_| TextControl::new())),
            star_row: StarRowComponent::new(),
            error: None,
            show_help: false,
        }
    }

    /// Creates an application with an optional pre-selected rating.
    #[must_use]
    pub fn with_initial_rating(initial: Option<Rating>) -> Self {
        let mut app = Self::new();
        if let Some(rating) = initial {
            app.widget.apply(rating);
        }
        app
    }

    /// Returns the current rating.
    #[must_use]
    pub const fn current_rating(&self) -> Rating {
        self.widget.current_rating()
    }

    /// Handles an application message, returning an optional command.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::StarSelected(stars) => {
                match self.widget.select(*stars) {
                    Ok(_) => self.error = None,
                    Err(error) => self.error = Some(error.to_string()),
                }
                None
            }
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::Quit => Some(bubbletea_rs::quit()),
        }
    }

    /// Renders the header line.
    fn render_header() -> String {
        format!("fivestar — rate from 1 to {STAR_COUNT}\n\n")
    }

    /// Renders the output line with the current rating.
    fn render_output(&self) -> String {
        let rating = self.widget.current_rating();
        if rating.is_rated() {
            format!("\n  Current rating: {rating}/{STAR_COUNT}\n")
        } else {
            "\n  No rating selected yet.\n".to_owned()
        }
    }

    /// Renders the status bar with key hints.
    fn render_status_bar(&self) -> String {
        let error_line = self
            .error
            .as_ref()
            .map_or_else(String::new, |message| format!("  error: {message}\n"));
        format!("{error_line}\n  1-{STAR_COUNT} select  ? help  q quit\n")
    }

    /// Renders the help overlay shown instead of the main view.
    fn render_help_overlay() -> String {
        concat!(
            "fivestar help\n",
            "\n",
            "  1-5    select that many stars\n",
            "  ?      close this help\n",
            "  q/Esc  quit and report the rating\n",
        )
        .to_owned()
    }
}

impl Default for RatingApp {
    fn default() -> Self {
        Self::new()
    }
}

impl Model for RatingApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve the optional pre-selected rating from module-level storage
        let model = Self::with_initial_rating(super::get_initial_rating());
        (model, None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if let Some(mapped) = map_key_to_message(key_msg) {
                return self.handle_message(&mapped);
            }
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return Self::render_help_overlay();
        }

        let labels: Vec<&str> = self
            .widget
            .controls()
            .iter()
            .map(StarControl::label)
            .collect();
        let ctx = StarRowViewContext { labels: &labels };

        let mut output = String::new();
        output.push_str(&Self::render_header());
        output.push_str(&self.star_row.view(&ctx));
        output.push_str(&self.render_output());
        output.push_str(&self.render_status_bar());
        output
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
