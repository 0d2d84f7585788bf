/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{THEME_KEY, WATCHLIST_KEY};
use crate::error::AppResult;
use crate::presentation::asset::CryptoAsset;
use crate::presentation::theme::AppTheme;
use crate::storage::preferences::PreferenceStore;
use tracing::warn;

/// Persisted watchlist identifiers, empty when nothing was saved
pub fn load_watchlist_ids(store: &dyn PreferenceStore) -> Vec<String> {
    store.get_list(WATCHLIST_KEY).unwrap_or_default()
}

/// Persists the identifiers of `watchlist`, in order
pub fn save_watchlist_ids(store: &dyn PreferenceStore, watchlist: &[CryptoAsset]) -> AppResult<()> {
    let ids: Vec<String> = watchlist.iter().map(|asset| asset.id.clone()).collect();
    store.set_list(WATCHLIST_KEY, &ids)
}

/// Persisted theme, [`AppTheme::Dark`] when absent or unreadable
pub fn load_theme(store: &dyn PreferenceStore) -> AppTheme {
    match store.get_string(THEME_KEY) {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Ignoring stored theme: {}", e);
            AppTheme::default()
        }),
        None => AppTheme::default(),
    }
}

/// Persists `theme`
pub fn save_theme(store: &dyn PreferenceStore, theme: AppTheme) -> AppResult<()> {
    store.set_string(THEME_KEY, theme.as_str())
}
