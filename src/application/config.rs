/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_RATE_LIMIT_BURST_SIZE, DEFAULT_RATE_LIMIT_MAX_REQUESTS,
    DEFAULT_RATE_LIMIT_PERIOD_SECONDS, DEFAULT_REFRESH_INTERVAL_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_path};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the price tracker
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Client-side request throttling, `None` disables it
    pub rate_limiter: Option<RateLimiterConfig>,
    /// Price refresh and persistence settings
    pub tracker: TrackerConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the market-data API, without trailing slash
    pub base_url: String,
    /// Timeout in seconds applied to connect and to the whole transfer
    pub timeout: u64,
    /// Extra headers merged into the client defaults
    #[serde(default)]
    pub default_headers: HashMap<String, String>,
    /// Emits request and response dumps through `tracing`
    pub debug_logging: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration of the state manager
pub struct TrackerConfig {
    /// Seconds between two price refresh ticks
    pub refresh_interval_secs: u64,
    /// Location of the preference file, `None` uses the platform config dir
    pub preferences_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment (and `.env` if present)
    ///
    /// # Environment
    /// * `CRYPTO_REST_BASE_URL` - base address, defaults to CoinGecko v3
    /// * `CRYPTO_REST_TIMEOUT` - seconds, defaults to 30
    /// * `CRYPTO_DEBUG_LOGGING` - request/response dumps, defaults to off
    /// * `CRYPTO_RATE_LIMIT_ENABLED` - defaults to on
    /// * `CRYPTO_RATE_LIMIT_MAX_REQUESTS`, `CRYPTO_RATE_LIMIT_PERIOD_SECONDS`,
    ///   `CRYPTO_RATE_LIMIT_BURST_SIZE`
    /// * `CRYPTO_REFRESH_INTERVAL_SECS` - defaults to 60
    /// * `CRYPTO_PREFERENCES_PATH` - preference file location
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let rate_limiter = get_env_flag("CRYPTO_RATE_LIMIT_ENABLED", true).then(|| {
            RateLimiterConfig {
                max_requests: get_env_or_default(
                    "CRYPTO_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "CRYPTO_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "CRYPTO_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            }
        });

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "CRYPTO_REST_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("CRYPTO_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
                default_headers: HashMap::new(),
                debug_logging: get_env_flag("CRYPTO_DEBUG_LOGGING", false),
            },
            rate_limiter,
            tracker: TrackerConfig {
                refresh_interval_secs: get_env_or_default(
                    "CRYPTO_REFRESH_INTERVAL_SECS",
                    DEFAULT_REFRESH_INTERVAL_SECS,
                ),
                preferences_path: get_env_path("CRYPTO_PREFERENCES_PATH"),
            },
        }
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout: DEFAULT_TIMEOUT_SECS,
            default_headers: HashMap::new(),
            debug_logging: false,
        }
    }
}

impl RestApiConfig {
    /// REST configuration pointing at `base_url` with every other field defaulted
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Timeout as a [`Duration`]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
            burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            preferences_path: None,
        }
    }
}

impl TrackerConfig {
    /// Refresh interval as a [`Duration`], never shorter than one second
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }
}
