use crypto_tracker::application::client::Client;
use crypto_tracker::application::config::Config;
use crypto_tracker::application::refresher::PriceRefresher;
use crypto_tracker::application::tracker::PriceTracker;
use crypto_tracker::storage::file_store::JsonFilePreferenceStore;
use crypto_tracker::storage::preferences::PreferenceStore;
use crypto_tracker::utils::logger::setup_logger;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    info!("=== Crypto Price Tracker ===");
    info!("  Base URL: {}", config.rest_api.base_url);
    info!("  Refresh every: {:?}", config.tracker.refresh_interval());

    let store: Arc<dyn PreferenceStore> = match &config.tracker.preferences_path {
        Some(path) => Arc::new(JsonFilePreferenceStore::open(path)?),
        None => Arc::new(JsonFilePreferenceStore::open_default()?),
    };
    let client = Arc::new(Client::new(&config)?);
    let tracker = Arc::new(PriceTracker::new(client, store));
    info!("Theme: {}", tracker.theme());

    if !tracker.fetch_listing().await {
        error!("Could not load the market listing");
        return Err("market listing unavailable".into());
    }
    tracker.load_watchlist().await;

    let listing = tracker.listing().await;
    if tracker.watchlist().await.is_empty() {
        if let Some(first) = listing.first() {
            info!("Watchlist empty, watching {}", first.name);
            tracker.add_to_watchlist(first).await;
        }
    }

    for asset in &listing {
        info!(
            "{:<12} {:>6} {:>14}",
            asset.name,
            asset.symbol.as_deref().unwrap_or("-"),
            asset
                .current_price
                .map(|p| format!("${p:.2}"))
                .unwrap_or_else(|| "n/a".to_string())
        );
    }

    let mut updates = tracker.subscribe();
    let refresher = PriceRefresher::spawn(tracker.clone(), config.tracker.refresh_interval());
    info!("Press Ctrl+C to stop");

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                for asset in &snapshot.watchlist {
                    info!(
                        "Watched {}: {}",
                        asset.name,
                        asset.current_price.map(|p| format!("${p:.2}")).unwrap_or_else(|| "n/a".to_string())
                    );
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Stopping");
                break;
            }
        }
    }

    refresher.stop();
    Ok(())
}
