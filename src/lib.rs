/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Crypto Tracker
//!
//! A client for the CoinGecko market-data API with a persisted watchlist.
//!
//! - [`model::http::HttpClient`]: generic JSON-over-HTTPS client with
//!   default headers, auth token, multipart uploads and debug dumps
//! - [`application::client::Client`]: the listing and price endpoints
//! - [`application::tracker::PriceTracker`]: listing/watchlist state,
//!   price patching and snapshot publication
//! - [`application::refresher::PriceRefresher`]: the 60 second refresh tick
//! - [`storage`]: preference stores for the watchlist and theme
//!
//! ## Example
//!
//! ```no_run
//! use crypto_tracker::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! setup_logger();
//! let config = Config::new();
//! let client = Arc::new(Client::new(&config)?);
//! let store = Arc::new(JsonFilePreferenceStore::open_default()?);
//! let tracker = Arc::new(PriceTracker::new(client, store));
//!
//! if tracker.fetch_listing().await {
//!     tracker.load_watchlist().await;
//! }
//! let _refresher = PriceRefresher::spawn(tracker.clone(), config.tracker.refresh_interval());
//! # Ok(())
//! # }
//! ```

/// Application layer: configuration, services, state manager
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// HTTP transport and request/response models
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Domain models
pub mod presentation;
/// Preference persistence
pub mod storage;
/// Configuration, id and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
