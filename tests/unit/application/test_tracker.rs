use super::fake::{FakeMarketService, LISTING, RecordingAlerts, SlowPreferenceStore, ok, status};
use crypto_tracker::application::tracker::{PriceTracker, derive_watchlist};
use crypto_tracker::constants::{CONNECTION_ALERT_MESSAGE, CONNECTION_ALERT_TITLE, WATCHLIST_KEY};
use crypto_tracker::error::AppError;
use crypto_tracker::presentation::asset::CryptoAsset;
use crypto_tracker::presentation::theme::AppTheme;
use crypto_tracker::storage::preferences::{MemoryPreferenceStore, PreferenceStore};
use std::sync::Arc;
use std::time::Duration;

fn tracker_with(
    service: FakeMarketService,
    store: Arc<MemoryPreferenceStore>,
) -> PriceTracker<FakeMarketService> {
    PriceTracker::new(Arc::new(service), store)
}

async fn loaded_tracker(store: Arc<MemoryPreferenceStore>) -> PriceTracker<FakeMarketService> {
    let tracker = tracker_with(FakeMarketService::new().with_listing(ok(LISTING)), store);
    assert!(tracker.fetch_listing().await);
    tracker
}

fn ids(assets: &[CryptoAsset]) -> Vec<&str> {
    assets.iter().map(|asset| asset.id.as_str()).collect()
}

#[tokio::test]
async fn test_fetch_listing_replaces_state() {
    let tracker = loaded_tracker(Arc::new(MemoryPreferenceStore::new())).await;

    let snapshot = tracker.snapshot().await;
    assert_eq!(ids(&snapshot.listing), vec!["bitcoin", "ethereum", "solana"]);
    assert_eq!(snapshot.listing[0].current_price, Some(64000.0));
    assert_eq!(snapshot.listing[2].image, None);
    assert!(snapshot.watchlist.is_empty());
    assert!(snapshot.last_updated.is_some());
}

#[tokio::test]
async fn test_fetch_listing_decode_failure_keeps_state() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let tracker = loaded_tracker(store).await;
    let before = tracker.snapshot().await;

    tracker.service().push_listing(ok(r#"[{"id":"broken"}]"#));
    assert!(!tracker.fetch_listing().await);
    assert_eq!(tracker.snapshot().await, before);
}

#[tokio::test]
async fn test_fetch_listing_error_status_keeps_state() {
    let service = FakeMarketService::new().with_listing(status(r#"{"error":"rate limited"}"#, 429));
    let alerts = Arc::new(RecordingAlerts::default());
    let tracker = PriceTracker::new(Arc::new(service), Arc::new(MemoryPreferenceStore::new()))
        .with_alert_presenter(alerts.clone());

    assert!(!tracker.fetch_listing().await);
    assert!(tracker.listing().await.is_empty());
    assert!(alerts.alerts().is_empty());
}

#[tokio::test]
async fn test_fetch_listing_transport_failure_shows_alert() {
    let service = FakeMarketService::new().with_listing(Err(AppError::NoInternetConnection));
    let alerts = Arc::new(RecordingAlerts::default());
    let tracker = PriceTracker::new(Arc::new(service), Arc::new(MemoryPreferenceStore::new()))
        .with_alert_presenter(alerts.clone());

    assert!(!tracker.fetch_listing().await);
    assert!(tracker.listing().await.is_empty());
    assert_eq!(
        alerts.alerts(),
        vec![(
            CONNECTION_ALERT_TITLE.to_string(),
            CONNECTION_ALERT_MESSAGE.to_string()
        )]
    );
}

#[tokio::test]
async fn test_refresh_patches_listing_and_watchlist() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let tracker = loaded_tracker(store.clone()).await;
    let bitcoin = tracker.listing().await[0].clone();
    assert!(tracker.add_to_watchlist(&bitcoin).await);

    tracker
        .service()
        .push_prices(ok(r#"{"bitcoin":{"usd":65000.5}}"#));
    assert_eq!(tracker.refresh_prices().await.unwrap(), 1);

    let snapshot = tracker.snapshot().await;
    assert_eq!(snapshot.listing[0].current_price, Some(65000.5));
    assert_eq!(snapshot.watchlist.len(), 1);
    assert_eq!(snapshot.watchlist[0].current_price, Some(65000.5));
    assert_eq!(
        tracker.service().price_requests(),
        vec![vec![
            "bitcoin".to_string(),
            "ethereum".to_string(),
            "solana".to_string()
        ]]
    );
}

#[tokio::test]
async fn test_refresh_partial_response_only_touches_listed_ids() {
    let tracker = loaded_tracker(Arc::new(MemoryPreferenceStore::new())).await;

    tracker
        .service()
        .push_prices(ok(r#"{"ethereum":{"usd":3100.0},"dogecoin":{"usd":0.1}}"#));
    assert_eq!(tracker.refresh_prices().await.unwrap(), 1);

    let listing = tracker.listing().await;
    assert_eq!(listing.len(), 3);
    assert_eq!(listing[0].current_price, Some(64000.0));
    assert_eq!(listing[1].current_price, Some(3100.0));
    assert_eq!(listing[2].current_price, Some(150.0));
    assert_eq!(listing[1].symbol.as_deref(), Some("eth"));
}

#[tokio::test]
async fn test_refresh_with_empty_listing_makes_no_request() {
    let tracker = tracker_with(
        FakeMarketService::new(),
        Arc::new(MemoryPreferenceStore::new()),
    );

    assert_eq!(tracker.refresh_prices().await.unwrap(), 0);
    assert_eq!(tracker.service().price_calls(), 0);
}

#[tokio::test]
async fn test_refresh_failures_leave_prices_untouched() {
    let tracker = loaded_tracker(Arc::new(MemoryPreferenceStore::new())).await;
    let before = tracker.listing().await;

    tracker.service().push_prices(Err(AppError::Timeout));
    assert!(matches!(
        tracker.refresh_prices().await,
        Err(AppError::Timeout)
    ));

    tracker.service().push_prices(status("oops", 500));
    assert!(matches!(
        tracker.refresh_prices().await,
        Err(AppError::ServerError { status: 500, .. })
    ));

    tracker.service().push_prices(ok("[1,2,3]"));
    assert!(matches!(
        tracker.refresh_prices().await,
        Err(AppError::Deserialization(_))
    ));

    assert_eq!(tracker.listing().await, before);
}

#[tokio::test]
async fn test_add_to_watchlist_is_idempotent() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let tracker = loaded_tracker(store.clone()).await;
    let listing = tracker.listing().await;

    assert!(tracker.add_to_watchlist(&listing[1]).await);
    assert!(!tracker.add_to_watchlist(&listing[1]).await);
    assert!(tracker.add_to_watchlist(&listing[0]).await);

    assert_eq!(ids(&tracker.watchlist().await), vec!["ethereum", "bitcoin"]);
    assert_eq!(
        store.get_list(WATCHLIST_KEY),
        Some(vec!["ethereum".to_string(), "bitcoin".to_string()])
    );
    assert!(tracker.is_watched("bitcoin").await);
    assert!(!tracker.is_watched("solana").await);
}

#[tokio::test]
async fn test_remove_and_clear_watchlist() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let tracker = loaded_tracker(store.clone()).await;
    let listing = tracker.listing().await;
    for asset in &listing {
        tracker.add_to_watchlist(asset).await;
    }

    assert_eq!(tracker.remove_from_watchlist(&listing[1]).await, 1);
    assert_eq!(tracker.remove_from_watchlist(&listing[1]).await, 0);
    assert_eq!(ids(&tracker.watchlist().await), vec!["bitcoin", "solana"]);
    assert_eq!(
        store.get_list(WATCHLIST_KEY),
        Some(vec!["bitcoin".to_string(), "solana".to_string()])
    );

    tracker.clear_watchlist().await;
    assert!(tracker.watchlist().await.is_empty());
    assert_eq!(store.get_list(WATCHLIST_KEY), Some(vec![]));
}

#[tokio::test]
async fn test_remove_matches_by_identifier() {
    let tracker = loaded_tracker(Arc::new(MemoryPreferenceStore::new())).await;
    let bitcoin = tracker.listing().await[0].clone();
    tracker.add_to_watchlist(&bitcoin).await;

    let stale = bitcoin.clone().with_price(1.0);
    assert_eq!(tracker.remove_from_watchlist(&stale).await, 1);
    assert!(tracker.watchlist().await.is_empty());
}

#[tokio::test]
async fn test_watchlist_survives_restart() {
    let store = Arc::new(MemoryPreferenceStore::new());
    {
        let tracker = loaded_tracker(store.clone()).await;
        let listing = tracker.listing().await;
        tracker.add_to_watchlist(&listing[2]).await;
        tracker.add_to_watchlist(&listing[0]).await;
    }

    let tracker = loaded_tracker(store).await;
    assert!(tracker.watchlist().await.is_empty());
    tracker.load_watchlist().await;
    assert_eq!(ids(&tracker.watchlist().await), vec!["solana", "bitcoin"]);
}

#[tokio::test]
async fn test_unknown_persisted_ids_are_skipped() {
    let store = Arc::new(MemoryPreferenceStore::new());
    store
        .set_list(WATCHLIST_KEY, &["bitcoin".to_string(), "doge".to_string()])
        .unwrap();

    let tracker = loaded_tracker(store.clone()).await;
    tracker.load_watchlist().await;

    assert_eq!(ids(&tracker.watchlist().await), vec!["bitcoin"]);
    assert_eq!(
        store.get_list(WATCHLIST_KEY),
        Some(vec!["bitcoin".to_string(), "doge".to_string()])
    );
}

#[tokio::test]
async fn test_load_watchlist_before_fetch_is_empty() {
    let store = Arc::new(MemoryPreferenceStore::new());
    store
        .set_list(WATCHLIST_KEY, &["bitcoin".to_string()])
        .unwrap();
    let tracker = tracker_with(FakeMarketService::new(), store);

    tracker.load_watchlist().await;
    assert!(tracker.watchlist().await.is_empty());
}

#[test]
fn test_derive_watchlist_keeps_persisted_order() {
    let listing = vec![
        CryptoAsset::new("bitcoin", "Bitcoin"),
        CryptoAsset::new("ethereum", "Ethereum"),
    ];
    let derived = derive_watchlist(
        &listing,
        &["ethereum".to_string(), "ghost".to_string(), "bitcoin".to_string()],
    );
    assert_eq!(ids(&derived), vec!["ethereum", "bitcoin"]);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let tracker = loaded_tracker(Arc::new(MemoryPreferenceStore::new())).await;

    assert_eq!(ids(&tracker.search("BIT").await), vec!["bitcoin"]);
    assert_eq!(ids(&tracker.search("an").await), vec!["solana"]);
    assert_eq!(tracker.search("").await.len(), 3);
    assert!(tracker.search("zzz").await.is_empty());
}

#[tokio::test]
async fn test_subscribers_see_every_change() {
    let tracker = tracker_with(
        FakeMarketService::new().with_listing(ok(LISTING)),
        Arc::new(MemoryPreferenceStore::new()),
    );
    let mut updates = tracker.subscribe();
    assert!(updates.borrow().listing.is_empty());

    assert!(tracker.fetch_listing().await);
    assert!(updates.has_changed().unwrap());
    assert_eq!(updates.borrow_and_update().listing.len(), 3);

    let solana = tracker.listing().await[2].clone();
    tracker.add_to_watchlist(&solana).await;
    assert!(updates.has_changed().unwrap());
    assert_eq!(ids(&updates.borrow_and_update().watchlist), vec!["solana"]);
}

#[tokio::test]
async fn test_theme_defaults_dark_and_toggles() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let tracker = tracker_with(FakeMarketService::new(), store.clone());

    assert_eq!(tracker.theme(), AppTheme::Dark);
    assert_eq!(tracker.toggle_theme().unwrap(), AppTheme::Light);
    assert_eq!(tracker.theme(), AppTheme::Light);
    assert_eq!(store.get_string("appTheme").as_deref(), Some("light"));

    tracker.set_theme(AppTheme::Dark).unwrap();
    assert_eq!(tracker.theme(), AppTheme::Dark);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_refresh_keeps_watchlist_edit_made_while_waiting() {
    let store = Arc::new(SlowPreferenceStore::new(Duration::from_millis(200)));
    let service = FakeMarketService::new()
        .with_listing(ok(LISTING))
        .with_price_delay(Duration::from_millis(100));
    let tracker = Arc::new(PriceTracker::new(Arc::new(service), store.clone()));
    assert!(tracker.fetch_listing().await);
    let bitcoin = tracker.listing().await[0].clone();

    tracker
        .service()
        .push_prices(ok(r#"{"bitcoin":{"usd":65000.5}}"#));
    let refreshing = {
        let tracker = tracker.clone();
        tokio::spawn(async move { tracker.refresh_prices().await })
    };
    // The refresh is now waiting for prices; the add commits after they arrive
    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(tracker.add_to_watchlist(&bitcoin).await);
    assert_eq!(refreshing.await.unwrap().unwrap(), 1);

    let watchlist = tracker.watchlist().await;
    assert_eq!(ids(&watchlist), vec!["bitcoin"]);
    assert_eq!(watchlist[0].current_price, Some(65000.5));
    assert_eq!(
        store.get_list(WATCHLIST_KEY),
        Some(vec!["bitcoin".to_string()])
    );
}
