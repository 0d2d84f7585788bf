use crate::error::AppError;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;

/// Interface for the market-data service.
///
/// Both calls hand back the raw response: status interpretation and
/// decoding belong to the caller.
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Gets the market listing (top assets by market cap, quoted in USD)
    async fn get_market_listing(&self) -> Result<ApiResponse, AppError>;

    /// Gets the current USD price of each asset in `ids`
    ///
    /// The identifiers are sent as one comma-separated list in a single
    /// request. The provider silently omits unknown identifiers.
    ///
    /// # Arguments
    /// * `ids` - Provider identifiers (e.g. `bitcoin`, `ethereum`)
    async fn get_simple_prices(&self, ids: &[String]) -> Result<ApiResponse, AppError>;
}
