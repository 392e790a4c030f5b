use std::fs;
use tempfile::TempDir;
use vault_core::types::{AppConfig, SearchSettings};

/// Verify a missing config file yields the defaults instead of an error.
#[test]
fn test_load_missing_file_returns_defaults() {
    let temp = TempDir::new().unwrap();

    let config = AppConfig::load(&AppConfig::path(temp.path())).unwrap();

    assert_eq!(config, AppConfig::default());
    assert_eq!(config.search.result_limit, 10);
    assert_eq!(config.search.debounce_interval_ms, 0);
}

/// Verify save followed by load preserves every search setting.
#[test]
fn test_save_then_load() {
    let temp = TempDir::new().unwrap();
    let path = AppConfig::path(temp.path());
    let config = AppConfig {
        search: SearchSettings {
            result_limit: 25,
            debounce_interval_ms: 150,
        },
    };

    config.save(&path).unwrap();

    assert_eq!(AppConfig::load(&path).unwrap(), config);
}

/// Verify omitted keys fall back to their defaults.
#[test]
fn test_partial_file_fills_defaults() {
    let temp = TempDir::new().unwrap();
    let path = AppConfig::path(temp.path());
    fs::write(&path, "[search]\ndebounce_interval_ms = 80\n").unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.search.result_limit, 10);
    assert_eq!(config.search.debounce_interval_ms, 80);
}

/// Verify malformed TOML is reported, not silently replaced.
#[test]
fn test_malformed_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = AppConfig::path(temp.path());
    fs::write(&path, "[search\nresult_limit = ").unwrap();

    AppConfig::load(&path).unwrap_err();
}

/// Verify a zero result limit is flagged and replaced by the default.
#[test]
fn test_zero_result_limit_is_invalid() {
    let config = AppConfig {
        search: SearchSettings {
            result_limit: 0,
            debounce_interval_ms: 40,
        },
    };

    assert_eq!(config.validate().len(), 1);

    let fixed = config.with_defaults_for_invalid();
    assert!(fixed.validate().is_empty());
    assert_eq!(fixed.search.result_limit, 10);
    assert_eq!(fixed.search.debounce_interval_ms, 40);
}
