use crypto_tracker::application::config::{Config, RateLimiterConfig, RestApiConfig, TrackerConfig};
use crypto_tracker::constants::{DEFAULT_BASE_URL, DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS};
use std::time::Duration;

#[test]
fn test_rest_api_defaults() {
    let config = RestApiConfig::default();
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert!(config.default_headers.is_empty());
    assert!(!config.debug_logging);
}

#[test]
fn test_with_base_url_keeps_other_defaults() {
    let config = RestApiConfig::with_base_url("http://localhost:1234");
    assert_eq!(config.base_url, "http://localhost:1234");
    assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_tracker_interval_has_a_floor() {
    let config = TrackerConfig::default();
    assert_eq!(
        config.refresh_interval(),
        Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS)
    );
    assert!(config.preferences_path.is_none());

    let zero = TrackerConfig {
        refresh_interval_secs: 0,
        preferences_path: None,
    };
    assert_eq!(zero.refresh_interval(), Duration::from_secs(1));
}

#[test]
fn test_rate_limiter_defaults() {
    let config = RateLimiterConfig::default();
    assert_eq!(config.max_requests, 30);
    assert_eq!(config.period_seconds, 60);
    assert_eq!(config.burst_size, 10);
}

#[test]
fn test_config_serializes() {
    let config = Config {
        rest_api: RestApiConfig::default(),
        rate_limiter: None,
        tracker: TrackerConfig::default(),
    };
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["rest_api"]["base_url"], DEFAULT_BASE_URL);
    assert!(json["rate_limiter"].is_null());
    assert_eq!(json["tracker"]["refresh_interval_secs"], 60);
}
