//! Unit tests for configuration loading and precedence.

use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::{Value, json};

use super::{OperationMode, WerentConfig, resolve_session_dir_from, split_paths};
use crate::error::AppError;

/// Applies a configuration layer to the composer based on the layer type.
fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"api_url": "http://default"})), ("file", json!({"api_url": "http://file"}))],
    "api_url",
    "http://file",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"email": "file@example.com"})), ("environment", json!({"email": "env@example.com"}))],
    "email",
    "env@example.com",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"api_url": "http://env"})), ("cli", json!({"api_url": "http://cli"}))],
    "api_url",
    "http://cli",
    "CLI should override environment"
)]
fn layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] field: &str,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value);
    }

    let config = WerentConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

    let actual = match field {
        "api_url" => config.api_url.as_deref(),
        "email" => config.email.as_deref(),
        _ => panic!("unknown field: {field}"),
    };

    assert_eq!(actual, Some(expected), "{message}");
}

#[rstest]
fn partial_overrides_preserve_lower_values() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({"api_url": "http://file", "email": "file@example.com"}),
        None,
    );
    composer.push_cli(json!({"email": "cli@example.com"}));

    let config = WerentConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

    assert_eq!(config.api_url.as_deref(), Some("http://file"));
    assert_eq!(config.email.as_deref(), Some("cli@example.com"));
}

#[rstest]
#[case::status(WerentConfig::default(), OperationMode::Status)]
#[case::review(WerentConfig { review: true, ..Default::default() }, OperationMode::Review)]
#[case::logout_over_review(
    WerentConfig { logout: true, review: true, ..Default::default() },
    OperationMode::Logout
)]
#[case::login_over_everything(
    WerentConfig { login: true, logout: true, review: true, ..Default::default() },
    OperationMode::Login
)]
fn operation_mode_follows_flag_priority(
    #[case] config: WerentConfig,
    #[case] expected: OperationMode,
) {
    assert_eq!(config.operation_mode(), expected);
}

#[rstest]
#[case::missing(None)]
#[case::blank(Some("  "))]
#[case::relative(Some("api.werent.example"))]
fn require_api_url_rejects_unusable_values(#[case] api_url: Option<&str>) {
    let config = WerentConfig {
        api_url: api_url.map(str::to_owned),
        ..Default::default()
    };

    let result = config.require_api_url();

    assert!(
        matches!(result, Err(AppError::Configuration { .. })),
        "expected Configuration error, got {result:?}"
    );
}

#[rstest]
fn require_api_url_parses_absolute_url() {
    let config = WerentConfig {
        api_url: Some("https://api.werent.example/api".to_owned()),
        ..Default::default()
    };

    let url = config.require_api_url().expect("URL should parse");

    assert_eq!(url.as_str(), "https://api.werent.example/api");
}

#[rstest]
#[case::missing_email(None, Some("pw"), "email is required")]
#[case::empty_email(Some(""), Some("pw"), "email is required")]
#[case::missing_password(Some("ayu@example.com"), None, "password is required")]
fn require_credentials_names_missing_value(
    #[case] email: Option<&str>,
    #[case] password: Option<&str>,
    #[case] expected: &str,
) {
    let config = WerentConfig {
        email: email.map(str::to_owned),
        password: password.map(str::to_owned),
        ..Default::default()
    };

    let error = config
        .require_credentials()
        .expect_err("credentials should be incomplete");

    assert!(
        error.to_string().contains(expected),
        "expected '{expected}' in '{error}'"
    );
}

#[rstest]
fn require_credentials_returns_both_values() {
    let config = WerentConfig {
        email: Some("ayu@example.com".to_owned()),
        password: Some("hunter2".to_owned()),
        ..Default::default()
    };

    let credentials = config
        .require_credentials()
        .expect("credentials should be present");

    assert_eq!(credentials.email(), "ayu@example.com");
}

#[rstest]
fn login_gateway_config_applies_timeout() {
    let config = WerentConfig {
        api_url: Some("http://localhost:3000".to_owned()),
        request_timeout_seconds: Some(15),
        ..Default::default()
    };

    let gateway_config = config
        .login_gateway_config()
        .expect("gateway config should build");

    assert_eq!(gateway_config.timeout, Some(Duration::from_secs(15)));
}

#[rstest]
fn media_paths_are_split_and_trimmed() {
    assert_eq!(
        split_paths(" a.jpg, ,clips/b.mp4 ,"),
        vec![Utf8PathBuf::from("a.jpg"), Utf8PathBuf::from("clips/b.mp4")]
    );
    assert!(WerentConfig::default().media_paths().is_empty());
}

#[rstest]
#[case::xdg_wins(Some("/state"), Some("/home/ayu"), "/state/werent/session")]
#[case::empty_xdg_falls_back(Some(""), Some("/home/ayu"), "/home/ayu/.local/state/werent/session")]
#[case::home_only(None, Some("/home/ayu"), "/home/ayu/.local/state/werent/session")]
fn session_dir_fallbacks(
    #[case] xdg: Option<&str>,
    #[case] home: Option<&str>,
    #[case] expected: &str,
) {
    let dir = resolve_session_dir_from(xdg, home).expect("directory should resolve");

    assert_eq!(dir, Utf8PathBuf::from(expected));
}

#[rstest]
fn session_dir_requires_some_base() {
    let result = resolve_session_dir_from(None, None);

    assert!(matches!(result, Err(AppError::Configuration { .. })));
}

#[rstest]
fn configured_session_dir_wins_over_environment() {
    let _guard = env_lock::lock_env([
        ("XDG_STATE_HOME", Some("/state")),
        ("HOME", Some("/home/ayu")),
    ]);
    let config = WerentConfig {
        session_dir: Some("/tmp/werent-session".to_owned()),
        ..Default::default()
    };

    let dir = config.resolve_session_dir().expect("directory should resolve");

    assert_eq!(dir, Utf8PathBuf::from("/tmp/werent-session"));
}

#[rstest]
fn session_dir_reads_environment() {
    let _guard = env_lock::lock_env([
        ("XDG_STATE_HOME", None::<&str>),
        ("HOME", Some("/home/ayu")),
    ]);

    let dir = WerentConfig::default()
        .resolve_session_dir()
        .expect("directory should resolve");

    assert_eq!(dir, Utf8PathBuf::from("/home/ayu/.local/state/werent/session"));
}
