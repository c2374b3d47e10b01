//! Fivestar CLI entrypoint for the interactive star rating host.

use std::io::{self, Write};
use std::process::ExitCode;

use bubbletea_rs::Program;
use fivestar::tui::{RatingApp, set_initial_rating};
use fivestar::{FivestarConfig, FivestarError, STAR_COUNT};
use ortho_config::OrthoConfig;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FivestarError> {
    let config = load_config()?;

    if let Some(rating) = config.validate_initial_rating()? {
        // If already set (e.g. re-running in the same process), keep the
        // existing value.
        let _ = set_initial_rating(rating);
    }

    let final_app = run_tui().await.map_err(|error| FivestarError::Tui {
        message: error.to_string(),
    })?;

    write_rating_summary(&final_app)?;
    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`FivestarError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<FivestarConfig, FivestarError> {
    FivestarConfig::load().map_err(|error| FivestarError::Configuration {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `RatingApp` model and returns the
/// final model state.
async fn run_tui() -> Result<RatingApp, bubbletea_rs::Error> {
    // RatingApp::init() reads the pre-selected rating from module storage.
    let program = Program::<RatingApp>::builder().alt_screen(true).build()?;

    let final_app = program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(final_app)
}

/// Reports the rating the user left selected, the host-side read of the
/// widget's current rating.
fn write_rating_summary(app: &RatingApp) -> Result<(), FivestarError> {
    let mut stdout = io::stdout().lock();
    let rating = app.current_rating();
    let message = if rating.is_rated() {
        format!("Selected rating: {rating}/{STAR_COUNT}")
    } else {
        "No rating selected.".to_owned()
    };

    writeln!(stdout, "{message}").map_err(|error| FivestarError::Io {
        message: error.to_string(),
    })
}
