/// User agent string sent with every request
pub const USER_AGENT: &str = "crypto-tracker/0.1.0";
/// Default base address of the CoinGecko v3 REST API
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";
/// Default timeout in seconds applied to connect and to the whole transfer
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Interval between two price refresh ticks
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;
/// Path of the market listing endpoint
pub const MARKETS_ENDPOINT: &str = "/coins/markets";
/// Path of the lightweight price endpoint
pub const SIMPLE_PRICE_ENDPOINT: &str = "/simple/price";
/// Quote currency used for every price
pub const VS_CURRENCY: &str = "usd";
/// Listing order requested from the provider
pub const LISTING_ORDER: &str = "market_cap_desc";
/// Number of assets requested for the listing
pub const LISTING_PAGE_SIZE: u32 = 20;
/// Page requested for the listing
pub const LISTING_PAGE: u32 = 0;
/// Preference key holding the watchlist identifiers
pub const WATCHLIST_KEY: &str = "WatchlistCoins";
/// Preference key holding the theme flag
pub const THEME_KEY: &str = "appTheme";
/// Message shown when the listing cannot be reached
pub const CONNECTION_ALERT_MESSAGE: &str =
    "Getting difficulty to connect to server. Please try again later.";
/// Title of the connection alert
pub const CONNECTION_ALERT_TITLE: &str = "Error";
/// Replacement shown in logs for credential-bearing header values
pub const HIDDEN_HEADER_VALUE: &str = "[HIDDEN]";
/// Default JPEG quality used by image uploads
pub const DEFAULT_JPEG_QUALITY: u8 = 80;
/// CoinGecko public tier allows roughly 30 calls per minute
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 30;
/// Period in seconds of the default rate limit
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Burst size of the default rate limit
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 10;
