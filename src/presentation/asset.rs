/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::{AppError, AppResult};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// One cryptocurrency as returned by the market listing.
///
/// Equality is value equality over every field; watchlist containment
/// relies on it.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CryptoAsset {
    /// Provider identifier, unique per provider (e.g. `bitcoin`)
    pub id: String,
    /// Ticker symbol (e.g. `btc`)
    pub symbol: Option<String>,
    /// Display name (e.g. `Bitcoin`)
    pub name: String,
    /// Last known USD price, `None` until fetched
    pub current_price: Option<f64>,
    /// Logo URL
    pub image: Option<String>,
}

impl CryptoAsset {
    /// Creates an asset with only identifier and name set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the price
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.current_price = Some(price);
        self
    }

    /// Sets the symbol
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Case-insensitive substring match on the display name
    #[must_use]
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Decodes a market listing body.
///
/// All-or-nothing: one malformed record fails the whole decode.
pub fn decode_listing(data: &[u8]) -> AppResult<Vec<CryptoAsset>> {
    serde_json::from_slice(data).map_err(|e| AppError::Deserialization(e.to_string()))
}
