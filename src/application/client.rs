/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::market::MarketService;
use crate::constants::{MARKETS_ENDPOINT, SIMPLE_PRICE_ENDPOINT};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{MarketListingQuery, SimplePriceQuery};
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// CoinGecko implementation of [`MarketService`]
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
    listing_query: MarketListingQuery,
}

impl Client {
    /// Creates a client and its HTTP transport from `config`
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut http_client = HttpClient::new(&config.rest_api)?;
        if let Some(limits) = &config.rate_limiter {
            http_client = http_client.with_rate_limiter(limits);
        }
        Ok(Self::with_http_client(Arc::new(http_client)))
    }

    /// Wraps an existing transport
    pub fn with_http_client(http_client: Arc<HttpClient>) -> Self {
        Self {
            http_client,
            listing_query: MarketListingQuery::default(),
        }
    }

    /// Underlying HTTP client, for auth tokens or ad-hoc calls
    pub fn http_client(&self) -> &Arc<HttpClient> {
        &self.http_client
    }

    /// Query sent by [`MarketService::get_market_listing`]
    pub fn listing_query(&self) -> &MarketListingQuery {
        &self.listing_query
    }
}

#[async_trait]
impl MarketService for Client {
    async fn get_market_listing(&self) -> Result<ApiResponse, AppError> {
        info!("Getting market listing");
        let response = self
            .http_client
            .get_with_query(MARKETS_ENDPOINT, &self.listing_query)
            .await?;
        debug!(
            "Market listing answered {} with {} bytes",
            response.status_code,
            response.len()
        );
        Ok(response)
    }

    async fn get_simple_prices(&self, ids: &[String]) -> Result<ApiResponse, AppError> {
        let query = SimplePriceQuery::new(ids);
        debug!("Getting prices for {} assets", ids.len());
        self.http_client
            .get_with_query(SIMPLE_PRICE_ENDPOINT, &query)
            .await
    }
}
