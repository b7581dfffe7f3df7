use super::data::{Config, DEFAULT_SERVICE_URL};
use super::io::ConfigError;
use super::settings::{ServiceSettings, SettingOverrides};
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
}

#[test]
fn test_config_persistence_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let config = Config {
        service_url: Some("http://warehouse.internal:9000".to_string()),
        top_k: Some(5),
        request_timeout_secs: None,
    };
    config
        .save_to_path(&config_path)
        .expect("Failed to save config");
    let loaded = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded, config);

    let mut config = loaded;
    config.top_k = None;
    config.request_timeout_secs = Some(0);
    config
        .save_to_path(&config_path)
        .expect("Failed to save config");
    let reloaded = Config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(reloaded.top_k, None);
    assert_eq!(reloaded.request_timeout_secs, Some(0));
}

#[test]
fn test_invalid_toml_reports_parse_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "service_url = [not toml").expect("write config");

    match Config::load_from_path(&config_path) {
        Err(ConfigError::Parse { path, .. }) => assert_eq!(path, config_path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn resolve_uses_default_when_nothing_is_configured() {
    let settings = ServiceSettings::resolve(&SettingOverrides::default(), None, &Config::default());
    assert_eq!(settings.base_url, DEFAULT_SERVICE_URL);
    assert_eq!(settings.top_k, None);
    assert_eq!(settings.request_timeout, Some(Duration::from_secs(60)));
}

#[test]
fn resolve_prefers_cli_then_env_then_file() {
    let config = Config {
        service_url: Some("http://from-file".to_string()),
        ..Default::default()
    };
    let cli = SettingOverrides {
        service_url: Some("http://from-cli/".to_string()),
        ..Default::default()
    };

    let settings = ServiceSettings::resolve(&cli, Some("http://from-env"), &config);
    assert_eq!(settings.base_url, "http://from-cli");

    let settings =
        ServiceSettings::resolve(&SettingOverrides::default(), Some("http://from-env"), &config);
    assert_eq!(settings.base_url, "http://from-env");

    let settings = ServiceSettings::resolve(&SettingOverrides::default(), None, &config);
    assert_eq!(settings.base_url, "http://from-file");
}

#[test]
fn resolve_skips_blank_addresses() {
    let config = Config {
        service_url: Some("  ".to_string()),
        ..Default::default()
    };
    let settings = ServiceSettings::resolve(&SettingOverrides::default(), Some(""), &config);
    assert_eq!(settings.base_url, DEFAULT_SERVICE_URL);
}

#[test]
fn resolve_zero_timeout_disables_bound() {
    let config = Config {
        request_timeout_secs: Some(15),
        top_k: Some(8),
        ..Default::default()
    };
    let settings = ServiceSettings::resolve(&SettingOverrides::default(), None, &config);
    assert_eq!(settings.request_timeout, Some(Duration::from_secs(15)));
    assert_eq!(settings.top_k, Some(8));

    let cli = SettingOverrides {
        request_timeout_secs: Some(0),
        top_k: Some(3),
        ..Default::default()
    };
    let settings = ServiceSettings::resolve(&cli, None, &config);
    assert_eq!(settings.request_timeout, None);
    assert_eq!(settings.top_k, Some(3));
}

#[test]
fn summary_lines_describe_defaults() {
    let lines = Config::default().summary_lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains(DEFAULT_SERVICE_URL));
    assert!(lines[1].contains("null"));
    assert!(lines[2].contains("60s"));
}
