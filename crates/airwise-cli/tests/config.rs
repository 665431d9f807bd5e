use std::time::Duration;

use airwise_cli::config::{
    AirwiseConfig, CURRENT_VERSION, DEFAULT_CACHE_TTL_SECS, DEFAULT_HTTP_TIMEOUT_SECS,
    load_config_from, migrate, save_config_in,
};
use airwise_core::models::location::Location;

#[test]
fn new_config_uses_defaults() {
    let config = AirwiseConfig::new(Location::default());
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.default_location, Location::LONDON);
    assert_eq!(config.http_timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
    assert_eq!(config.cache_ttl_secs, DEFAULT_CACHE_TTL_SECS);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = AirwiseConfig::new(Location::new(53.4808, -2.2426).unwrap());
    config.cache_ttl_secs = 120;
    config.config_version = 0;

    let path = save_config_in(dir.path(), &config).unwrap();
    assert_eq!(path, dir.path().join("config.json"));
    assert!(!dir.path().join("config.json.tmp").exists());

    let loaded = load_config_from(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.default_location, config.default_location);
    assert_eq!(loaded.cache_ttl_secs, 120);
    assert_eq!(loaded.created_at, config.created_at);
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = save_config_in(dir.path(), &AirwiseConfig::new(Location::default())).unwrap();
    let mode = std::fs::metadata(path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn minimal_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "default_location": {"latitude": 55.9533, "longitude": -3.1883},
            "created_at": "2025-03-01T09:30:00Z"
        }"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.cache_ttl_secs, DEFAULT_CACHE_TTL_SECS);
    assert_eq!(config.http_timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
    assert_eq!(config.default_location.latitude, 55.9533);
}

#[test]
fn current_version_passes_through_unchanged() {
    let json = serde_json::json!({ "config_version": 1, "cache_ttl_secs": 30 });
    let migrated = migrate(json.clone(), CURRENT_VERSION).unwrap();
    assert_eq!(migrated, json);
}

#[test]
fn zero_timeout_falls_back_to_default() {
    let mut config = AirwiseConfig::new(Location::default());
    config.http_timeout_secs = 0;
    assert_eq!(
        config.http_timeout(),
        Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)
    );

    config.http_timeout_secs = 25;
    assert_eq!(config.http_timeout(), Duration::from_secs(25));
    assert_eq!(config.cache_ttl(), Duration::from_secs(DEFAULT_CACHE_TTL_SECS));
}

#[test]
fn newer_config_version_is_rejected() {
    let err = migrate(serde_json::json!({}), CURRENT_VERSION + 1).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}
