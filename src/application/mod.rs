/// User-facing alert seam
pub mod alert;
/// CoinGecko market service client
pub mod client;
/// Application configuration module
pub mod config;
/// Module containing service interfaces and traits
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Periodic price refresh task
pub mod refresher;
/// Listing and watchlist state manager
pub mod tracker;

pub use interfaces::market::*;
