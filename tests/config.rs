use std::time::Duration;

use log::LevelFilter;
use todoist_log::app::load_config;
use todoist_log::config::Config;
use todoist_log::constants::COMPLETED_GET_ALL_URL;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.endpoint, COMPLETED_GET_ALL_URL);
    assert_eq!(config.retry.delay_seconds, 5);
    assert_eq!(config.retry.delay(), Duration::from_secs(5));
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Warn);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Non-http endpoint should fail
    config.api.endpoint = "ftp://api.todoist.com".to_string();
    assert!(config.validate().is_err());

    // Reset and test an excessive retry delay
    config.api.endpoint = "http://localhost:8080/completed".to_string();
    assert!(config.validate().is_ok());
    config.retry.delay_seconds = 7200;
    assert!(config.validate().is_err());

    // Reset and test an unknown log level
    config.retry.delay_seconds = 0;
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("delay_seconds = 5"));
    assert!(toml_str.contains("level = \"warn\""));
    assert!(toml_str.contains(COMPLETED_GET_ALL_URL));
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[retry]
delay_seconds = 30

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.retry.delay_seconds, 30);
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert_eq!(config.api.endpoint, COMPLETED_GET_ALL_URL);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.api.endpoint, default_config.api.endpoint);
    assert_eq!(config.retry.delay_seconds, default_config.retry.delay_seconds);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todoist-log.toml");
    std::fs::write(&path, "[retry]\ndelay_seconds = 1\n\n[logging]\nlevel = \"debug\"\n").unwrap();

    let config = load_config(Some(path.as_path())).unwrap();
    assert_eq!(config.retry.delay_seconds, 1);
    assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Debug);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[api]\nendpoint = \"not a url\"\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("endpoint"));
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_generate_config_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&config_path).unwrap();

    assert!(config_path.exists());
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.starts_with("# todoist-log Configuration File"));
    assert!(content.contains("delay_seconds = 5"));
    assert!(content.contains("# [retry] delay_seconds overrides the default 5-second pause"));

    // The generated file loads back as the defaults
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.retry.delay_seconds, 5);
    assert_eq!(loaded.api.endpoint, COMPLETED_GET_ALL_URL);
}

#[test]
fn test_default_config_path() {
    if let Ok(path) = Config::get_default_config_path() {
        assert!(path.ends_with("todoist-log/config.toml"));
    }
}
