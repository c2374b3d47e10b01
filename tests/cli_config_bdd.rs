//! Behavioural tests for CLI configuration loading.

use fivestar::{FivestarConfig, FivestarError, Rating, RatingError};
use ortho_config::MergeComposer;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::{Value, json};

/// State for CLI configuration scenarios.
///
/// Uses JSON values to represent configuration layers since `MergeComposer`
/// doesn't implement Clone. The composer is built fresh in `build_config`.
#[derive(ScenarioState, Default)]
struct ConfigState {
    defaults_layer: Slot<Value>,
    env_layer: Slot<Value>,
    cli_layer: Slot<Value>,
    config: Slot<FivestarConfig>,
}

#[fixture]
fn config_state() -> ConfigState {
    ConfigState::default()
}

/// Merges two JSON values, with `overlay` values taking precedence over `base`.
fn merge_json(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                base_map.insert(key, value);
            }
            Value::Object(base_map)
        }
        (_, other) => other,
    }
}

/// Parses a numeric placeholder captured from the feature text.
fn parse_stars(raw: &str) -> u8 {
    raw.trim_matches('"')
        .parse()
        .unwrap_or_else(|error| panic!("step placeholder must be numeric: {error}"))
}

// --- Given steps ---

#[given("a configuration with no initial rating set")]
fn no_initial_rating_set(config_state: &ConfigState) {
    config_state.defaults_layer.set(json!({}));
}

#[given("a configuration with environment initial rating {stars}")]
fn env_initial_rating(config_state: &ConfigState, stars: String) {
    config_state
        .env_layer
        .set(json!({"initial_rating": parse_stars(&stars)}));
}

#[given("a configuration with CLI initial rating {stars}")]
fn cli_initial_rating(config_state: &ConfigState, stars: String) {
    config_state
        .cli_layer
        .set(json!({"initial_rating": parse_stars(&stars)}));
}

// --- When steps ---

#[when("the configuration layers are merged")]
fn merge_layers(config_state: &ConfigState) {
    let mut composer = MergeComposer::new();

    // Always push base defaults with explicit null values to ensure merge
    // succeeds. The struct needs at least one valid layer with its shape.
    let base_defaults = json!({"initial_rating": null});
    let defaults = config_state
        .defaults_layer
        .get()
        .unwrap_or_else(|| base_defaults.clone());
    let merged_defaults = merge_json(base_defaults, defaults);
    composer.push_defaults(merged_defaults);

    if let Some(env) = config_state.env_layer.get() {
        composer.push_environment(env);
    }

    if let Some(cli) = config_state.cli_layer.get() {
        composer.push_cli(cli);
    }

    match FivestarConfig::merge_from_layers(composer.layers()) {
        Ok(config) => {
            config_state.config.set(config);
        }
        Err(error) => {
            panic!("failed to merge configuration: {error}");
        }
    }
}

// --- Then steps ---

#[then("the validated initial rating is {stars}")]
fn assert_initial_rating(config_state: &ConfigState, stars: String) {
    let expected = parse_stars(&stars);
    let config = config_state
        .config
        .get()
        .unwrap_or_else(|| panic!("configuration not built"));

    let rating = config
        .validate_initial_rating()
        .unwrap_or_else(|error| panic!("initial rating should validate: {error}"));

    assert_eq!(
        rating.map(Rating::value),
        Some(expected),
        "initial rating mismatch"
    );
}

#[then("no initial rating is configured")]
fn assert_no_initial_rating(config_state: &ConfigState) {
    let config = config_state
        .config
        .get()
        .unwrap_or_else(|| panic!("configuration not built"));

    let rating = config
        .validate_initial_rating()
        .unwrap_or_else(|error| panic!("empty configuration should validate: {error}"));

    assert_eq!(rating, None, "expected no initial rating");
}

#[then("validating the initial rating fails with value {stars}")]
fn assert_validation_fails(config_state: &ConfigState, stars: String) {
    let rejected = parse_stars(&stars);
    let config = config_state
        .config
        .get()
        .unwrap_or_else(|| panic!("configuration not built"));

    assert_eq!(
        config.validate_initial_rating(),
        Err(FivestarError::InvalidInitialRating {
            source: RatingError::OutOfRange { value: rejected }
        })
    );
}

// --- Scenario bindings ---

#[scenario(path = "tests/features/cli_config.feature", index = 0)]
fn cli_initial_rating_overrides_env(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 1)]
fn env_initial_rating_used_when_cli_not_provided(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 2)]
fn no_initial_rating_configured(config_state: ConfigState) {
    let _ = config_state;
}

#[scenario(path = "tests/features/cli_config.feature", index = 3)]
fn out_of_range_initial_rating_fails_validation(config_state: ConfigState) {
    let _ = config_state;
}
