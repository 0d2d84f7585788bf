/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::VS_CURRENCY;
use crate::error::{AppError, AppResult};
use crate::presentation::asset::CryptoAsset;
use serde_json::Value;
use std::collections::HashMap;

/// Prices keyed by asset identifier, from the lightweight price endpoint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimplePrices {
    prices: HashMap<String, f64>,
}

impl SimplePrices {
    /// Parses `{"<id>": {"usd": <number>}, ...}`.
    ///
    /// Entries without a numeric `usd` field are skipped; only a body that
    /// is not a JSON object is an error.
    pub fn parse(data: &[u8]) -> AppResult<Self> {
        Self::parse_for(data, VS_CURRENCY)
    }

    /// Same as [`SimplePrices::parse`] for another quote currency
    pub fn parse_for(data: &[u8], currency: &str) -> AppResult<Self> {
        let json: Value = serde_json::from_slice(data)
            .map_err(|e| AppError::Deserialization(e.to_string()))?;
        let Value::Object(entries) = json else {
            return Err(AppError::Deserialization(
                "price response is not a JSON object".to_string(),
            ));
        };

        let prices = entries
            .iter()
            .filter_map(|(id, quote)| {
                quote
                    .get(currency)
                    .and_then(Value::as_f64)
                    .map(|price| (id.clone(), price))
            })
            .collect();
        Ok(Self { prices })
    }

    /// Price for `id`, if present
    #[must_use]
    pub fn get(&self, id: &str) -> Option<f64> {
        self.prices.get(id).copied()
    }

    /// Number of priced identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// True when no identifier is priced
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Patches `current_price` of every listed asset present here and
    /// returns how many were patched; the others are left untouched
    pub fn apply(&self, listing: &mut [CryptoAsset]) -> usize {
        let mut patched = 0;
        for asset in listing.iter_mut() {
            if let Some(price) = self.get(&asset.id) {
                asset.current_price = Some(price);
                patched += 1;
            }
        }
        patched
    }
}

impl FromIterator<(String, f64)> for SimplePrices {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}
