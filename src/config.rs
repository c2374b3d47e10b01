//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.fivestar.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `FIVESTAR_INITIAL_RATING`
//! 4. **Command-line arguments** – `--initial-rating`/`-i`
//!
//! # Configuration File
//!
//! Place `.fivestar.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! initial_rating = 3
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::FivestarError;
use crate::rating::Rating;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `FIVESTAR_INITIAL_RATING` or `--initial-rating`: star count the TUI
///   starts with
///
/// # Example
///
/// ```no_run
/// use fivestar::FivestarConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = FivestarConfig::load().expect("failed to load configuration");
/// let initial = config.validate_initial_rating().expect("rating in range");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "FIVESTAR",
    discovery(
        dotfile_name = ".fivestar.toml",
        config_file_name = "fivestar.toml",
        app_name = "fivestar"
    )
)]
pub struct FivestarConfig {
    /// Star count to pre-select before the TUI starts.
    ///
    /// Can be provided via:
    /// - CLI: `--initial-rating <N>` or `-i <N>`
    /// - Environment: `FIVESTAR_INITIAL_RATING`
    /// - Config file: `initial_rating = N`
    #[ortho_config(cli_short = 'i')]
    pub initial_rating: Option<u8>,
}

impl Default for FivestarConfig {
    fn default() -> Self {
        Self {
            initial_rating: None,
        }
    }
}

impl FivestarConfig {
    /// Validates the configured initial rating against the widget's range
    /// policy.
    ///
    /// Returns `None` when no initial rating was configured.
    ///
    /// # Errors
    ///
    /// Returns [`FivestarError::InvalidInitialRating`] when the configured
    /// value falls outside 1–5; out-of-range values are rejected here rather
    /// than clamped, matching the widget's selection policy.
    pub fn validate_initial_rating(&self) -> Result<Option<Rating>, FivestarError> {
        self.initial_rating
            .map(Rating::new)
            .transpose()
            .map_err(|source| FivestarError::InvalidInitialRating { source })
    }
}
