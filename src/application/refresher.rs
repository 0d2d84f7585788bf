/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::interfaces::market::MarketService;
use crate::application::tracker::PriceTracker;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};

/// Periodic driver of [`PriceTracker::refresh_prices`].
///
/// The first tick fires one interval after spawning. Each tick runs in its
/// own task, so a slow refresh does not delay the next one and two
/// refreshes may overlap. Dropping the refresher stops it.
#[derive(Debug)]
pub struct PriceRefresher {
    handle: JoinHandle<()>,
    period: Duration,
}

impl PriceRefresher {
    /// Starts ticking every `period` on the current tokio runtime
    pub fn spawn<S: MarketService + 'static>(tracker: Arc<PriceTracker<S>>, period: Duration) -> Self {
        info!("Starting price refresh every {:?}", period);
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let tracker = tracker.clone();
                tokio::spawn(async move {
                    match tracker.refresh_prices().await {
                        Ok(patched) => debug!("Refresh tick patched {} prices", patched),
                        Err(e) => warn!("Refresh tick failed: {}", e),
                    }
                });
            }
        });
        Self { handle, period }
    }

    /// Tick period
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// False once the loop has been aborted and torn down
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stops ticking; refreshes already in flight complete on their own
    pub fn stop(&self) {
        self.handle.abort();
        debug!("Price refresh stopped");
    }
}

impl Drop for PriceRefresher {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
