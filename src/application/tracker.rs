/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Listing and watchlist state
//!
//! [`PriceTracker`] merges market-data responses into an in-memory listing,
//! keeps the watchlist derived from persisted identifiers and publishes a
//! [`MarketSnapshot`] after every change. Every mutation goes through one
//! write lock, so completions of concurrent requests are applied one at a
//! time; price patches are keyed by identifier and converge to the last
//! applied value.

use crate::application::alert::{AlertPresenter, LogAlertPresenter};
use crate::application::interfaces::market::MarketService;
use crate::constants::{CONNECTION_ALERT_MESSAGE, CONNECTION_ALERT_TITLE};
use crate::error::AppResult;
use crate::presentation::asset::{CryptoAsset, decode_listing};
use crate::presentation::price::SimplePrices;
use crate::presentation::theme::AppTheme;
use crate::storage::preferences::PreferenceStore;
use crate::storage::utils::{load_theme, load_watchlist_ids, save_theme, save_watchlist_ids};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::{RwLock, watch};
use tracing::{debug, error, info, warn};

/// Immutable copy of the tracker state handed to subscribers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketSnapshot {
    /// Every fetched asset, in provider order
    pub listing: Vec<CryptoAsset>,
    /// Watched assets, in the order they were added
    pub watchlist: Vec<CryptoAsset>,
    /// Time of the last successful fetch or refresh
    pub last_updated: Option<DateTime<Utc>>,
}

/// Rebuilds the watchlist from persisted `ids` against `listing`.
///
/// Keeps the order of `ids`; identifiers missing from the listing are dropped.
pub fn derive_watchlist(listing: &[CryptoAsset], ids: &[String]) -> Vec<CryptoAsset> {
    ids.iter()
        .filter_map(|id| listing.iter().find(|asset| &asset.id == id).cloned())
        .collect()
}

/// Price and watchlist state manager
pub struct PriceTracker<S: MarketService> {
    service: Arc<S>,
    store: Arc<dyn PreferenceStore>,
    alerts: Arc<dyn AlertPresenter>,
    state: RwLock<MarketSnapshot>,
    updates: watch::Sender<MarketSnapshot>,
}

impl<S: MarketService> PriceTracker<S> {
    /// Creates a tracker with an empty listing; alerts go to the log
    pub fn new(service: Arc<S>, store: Arc<dyn PreferenceStore>) -> Self {
        let (updates, _) = watch::channel(MarketSnapshot::default());
        Self {
            service,
            store,
            alerts: Arc::new(LogAlertPresenter),
            state: RwLock::new(MarketSnapshot::default()),
            updates,
        }
    }

    /// Routes connection alerts to `alerts`
    #[must_use]
    pub fn with_alert_presenter(mut self, alerts: Arc<dyn AlertPresenter>) -> Self {
        self.alerts = alerts;
        self
    }

    /// Underlying market service
    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    /// Fetches the market listing and replaces the in-memory one.
    ///
    /// # Returns
    /// * `true` - The listing was decoded and replaced
    /// * `false` - Decode failure or non-success status (state untouched),
    ///   or transport failure (state untouched, alert shown)
    pub async fn fetch_listing(&self) -> bool {
        let response = match self.service.get_market_listing().await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to fetch market listing: {}", e);
                self.alerts
                    .show_alert(CONNECTION_ALERT_TITLE, CONNECTION_ALERT_MESSAGE);
                return false;
            }
        };

        if !response.is_success() {
            warn!(
                "Market listing answered status {}: {}",
                response.status_code,
                response.text()
            );
            return false;
        }

        let listing = match decode_listing(&response.data) {
            Ok(listing) => listing,
            Err(e) => {
                error!("Failed to decode market listing: {}", e);
                return false;
            }
        };

        let mut state = self.state.write().await;
        info!("Market listing loaded with {} assets", listing.len());
        state.listing = listing;
        state.last_updated = Some(Utc::now());
        self.publish(&state);
        true
    }

    /// Refreshes the price of every listed asset.
    ///
    /// Only `current_price` changes, and only for identifiers present in
    /// the response. The watchlist is then re-derived from the persisted
    /// identifiers. An empty listing is a no-op without network call.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of patched assets
    /// * `Err(AppError)` - Transport failure, error status or unreadable body
    pub async fn refresh_prices(&self) -> AppResult<usize> {
        let ids: Vec<String> = self
            .state
            .read()
            .await
            .listing
            .iter()
            .map(|asset| asset.id.clone())
            .collect();
        if ids.is_empty() {
            debug!("Empty listing, skipping price refresh");
            return Ok(0);
        }

        let response = self
            .service
            .get_simple_prices(&ids)
            .await
            .and_then(|response| response.error_for_status())
            .inspect_err(|e| warn!("Price refresh failed: {}", e))?;
        let prices = SimplePrices::parse(&response.data)
            .inspect_err(|e| warn!("Price refresh returned an unreadable body: {}", e))?;

        let mut state = self.state.write().await;
        // Read under the guard so a concurrent watchlist edit is not lost
        let persisted = load_watchlist_ids(self.store.as_ref());
        let patched = prices.apply(&mut state.listing);
        state.watchlist = derive_watchlist(&state.listing, &persisted);
        state.last_updated = Some(Utc::now());
        debug!("Patched {} of {} prices", patched, state.listing.len());
        self.publish(&state);
        Ok(patched)
    }

    /// Rebuilds the watchlist from the persisted identifiers
    pub async fn load_watchlist(&self) {
        let mut state = self.state.write().await;
        let persisted = load_watchlist_ids(self.store.as_ref());
        state.watchlist = derive_watchlist(&state.listing, &persisted);
        debug!(
            "Watchlist loaded: {} of {} persisted assets",
            state.watchlist.len(),
            persisted.len()
        );
        self.publish(&state);
    }

    /// Appends `asset` unless an equal entry is already watched
    ///
    /// # Returns
    /// `true` if the watchlist changed
    pub async fn add_to_watchlist(&self, asset: &CryptoAsset) -> bool {
        let mut state = self.state.write().await;
        if state.watchlist.contains(asset) {
            return false;
        }
        state.watchlist.push(asset.clone());
        self.persist_watchlist(&state.watchlist);
        self.publish(&state);
        true
    }

    /// Removes every watched entry with the identifier of `asset`
    ///
    /// # Returns
    /// Number of removed entries
    pub async fn remove_from_watchlist(&self, asset: &CryptoAsset) -> usize {
        let mut state = self.state.write().await;
        let before = state.watchlist.len();
        state.watchlist.retain(|watched| watched.id != asset.id);
        let removed = before - state.watchlist.len();
        self.persist_watchlist(&state.watchlist);
        self.publish(&state);
        removed
    }

    /// Empties the watchlist
    pub async fn clear_watchlist(&self) {
        let mut state = self.state.write().await;
        state.watchlist.clear();
        self.persist_watchlist(&state.watchlist);
        self.publish(&state);
    }

    /// Current listing
    pub async fn listing(&self) -> Vec<CryptoAsset> {
        self.state.read().await.listing.clone()
    }

    /// Current watchlist
    pub async fn watchlist(&self) -> Vec<CryptoAsset> {
        self.state.read().await.watchlist.clone()
    }

    /// Copy of the whole state
    pub async fn snapshot(&self) -> MarketSnapshot {
        self.state.read().await.clone()
    }

    /// Receiver of a fresh snapshot after every change
    pub fn subscribe(&self) -> watch::Receiver<MarketSnapshot> {
        self.updates.subscribe()
    }

    /// Listed assets whose name contains `query`, ignoring case.
    /// An empty query returns the whole listing.
    pub async fn search(&self, query: &str) -> Vec<CryptoAsset> {
        let query = query.trim();
        let state = self.state.read().await;
        if query.is_empty() {
            return state.listing.clone();
        }
        state
            .listing
            .iter()
            .filter(|asset| asset.name_matches(query))
            .cloned()
            .collect()
    }

    /// True if an entry with identifier `id` is watched
    pub async fn is_watched(&self, id: &str) -> bool {
        self.state
            .read()
            .await
            .watchlist
            .iter()
            .any(|asset| asset.id == id)
    }

    /// Persisted theme
    pub fn theme(&self) -> AppTheme {
        load_theme(self.store.as_ref())
    }

    /// Persists `theme`
    pub fn set_theme(&self, theme: AppTheme) -> AppResult<()> {
        save_theme(self.store.as_ref(), theme)?;
        info!("Theme set to {}", theme);
        Ok(())
    }

    /// Switches between light and dark and returns the new theme
    pub fn toggle_theme(&self) -> AppResult<AppTheme> {
        let theme = self.theme().toggle();
        self.set_theme(theme)?;
        Ok(theme)
    }

    fn persist_watchlist(&self, watchlist: &[CryptoAsset]) {
        if let Err(e) = save_watchlist_ids(self.store.as_ref(), watchlist) {
            error!("Failed to persist watchlist: {}", e);
        }
    }

    fn publish(&self, state: &MarketSnapshot) {
        self.updates.send_replace(state.clone());
    }
}
