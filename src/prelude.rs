/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Crypto Tracker Prelude
//!
//! The types needed for most uses of the crate in one import.
//!
//! ```rust
//! use crypto_tracker::prelude::*;
//!
//! let asset = CryptoAsset::new("bitcoin", "Bitcoin").with_price(65000.5);
//! assert_eq!(asset.current_price, Some(65000.5));
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the tracker
pub use crate::application::config::{Config, RateLimiterConfig, RestApiConfig, TrackerConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// SERVICES
// ============================================================================

/// Market service trait and its CoinGecko implementation
pub use crate::application::client::Client;
pub use crate::application::interfaces::market::MarketService;

/// State manager and refresh driver
pub use crate::application::refresher::PriceRefresher;
pub use crate::application::tracker::{MarketSnapshot, PriceTracker};

/// Alert seam
pub use crate::application::alert::{AlertPresenter, LogAlertPresenter};

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP client and its models
pub use crate::model::http::HttpClient;
pub use crate::model::requests::HttpMethod;
pub use crate::model::responses::ApiResponse;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::presentation::{AppTheme, CryptoAsset, SimplePrices};

// ============================================================================
// STORAGE
// ============================================================================

pub use crate::storage::{JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for snapshot timestamps
pub use chrono::{DateTime, Utc};
