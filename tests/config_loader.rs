use clap::Parser;
use std::fs;
use tally::cli::Cli;
use tally::config::{Config, ConfigError};
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.effects.delay_ms, 1000);
    assert_eq!(config.effects.fail_every, 0);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.history_limit, 25);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("tally/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[effects]\ndelay_ms = 200\n").expect("write config");

    let config = Config::load_from(&path).expect("valid config");
    assert_eq!(config.effects.delay_ms, 200);
    assert_eq!(config.effects.fail_every, 0);
    assert_eq!(config.ui.history_limit, 25);
}

#[test]
fn test_parse_error_reports_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[effects\ndelay_ms = ").expect("write config");

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_zero_tick_rate() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntick_rate_ms = 0\n").expect("write config");

    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("tick_rate_ms"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_cli_overrides_file_values() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[effects]\ndelay_ms = 200\nfail_every = 4\n\n[ui]\nhistory_limit = 10\n",
    )
    .expect("write config");

    let cli = Cli::parse_from([
        "tally",
        "--config",
        path.to_str().expect("utf-8 path"),
        "--fail-every",
        "0",
    ]);
    let config = cli.resolve_config().expect("valid config");
    assert_eq!(config.effects.delay_ms, 200);
    assert_eq!(config.effects.fail_every, 0);
    assert_eq!(config.ui.history_limit, 10);
}
