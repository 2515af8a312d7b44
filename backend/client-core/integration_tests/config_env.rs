use client_core::config::{AppConfig, SERVER_URL_ENV};
use client_core::error::config::ConfigError;

use serial_test::serial;

// ============================================================================
// Environment override tests
// Serialized: they mutate process-wide environment variables
// ============================================================================

#[test]
#[serial]
fn given_server_url_env_when_applying_overrides_then_base_url_is_replaced() {
    // GIVEN: An override in the environment
    // SAFETY: serialized with every other test touching the environment
    unsafe { std::env::set_var(SERVER_URL_ENV, "http://10.0.0.5:8000") };
    let mut config = AppConfig::default();

    // WHEN: Applying overrides
    let result = config.apply_env_overrides();

    // THEN: Base URL comes from the environment
    unsafe { std::env::remove_var(SERVER_URL_ENV) };
    assert!(result.is_ok());
    assert_eq!(config.server.base_url, "http://10.0.0.5:8000");
}

#[test]
#[serial]
fn given_blank_server_url_env_when_applying_overrides_then_config_is_unchanged() {
    unsafe { std::env::set_var(SERVER_URL_ENV, "   ") };
    let mut config = AppConfig::default();

    let result = config.apply_env_overrides();

    unsafe { std::env::remove_var(SERVER_URL_ENV) };
    assert!(result.is_ok());
    assert_eq!(config, AppConfig::default());
}

/// **VALUE**: An override goes through the same validation as the config file.
///
/// **BUG THIS CATCHES**: Would catch an override path that skips validation and hands
/// a schemeless URL to the HTTP client.
#[test]
#[serial]
fn given_invalid_server_url_env_when_applying_overrides_then_returns_validation_error() {
    unsafe { std::env::set_var(SERVER_URL_ENV, "localhost:8000") };
    let mut config = AppConfig::default();

    let result = config.apply_env_overrides();

    unsafe { std::env::remove_var(SERVER_URL_ENV) };
    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
}
