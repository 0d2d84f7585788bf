/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client-side throttling for the public market-data API
//!
//! A token bucket from the `governor` crate. The HTTP client waits on it
//! before sending; it never turns a request into a failure.

use crate::application::config::RateLimiterConfig;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

const FALLBACK_BURST: NonZeroU32 = NonZeroU32::MIN.saturating_add(9);
const FALLBACK_PER_MINUTE: NonZeroU32 = NonZeroU32::MIN.saturating_add(29);

/// Token-bucket limiter shared by every clone of the HTTP client
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a limiter replenishing `max_requests` cells every
    /// `period_seconds`, allowing up to `burst_size` back-to-back requests
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota_for(config))),
        }
    }

    /// Waits until the bucket holds a cell for the next request
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Takes a cell if one is available right now
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

fn quota_for(config: &RateLimiterConfig) -> Quota {
    let burst = NonZeroU32::new(config.burst_size).unwrap_or(FALLBACK_BURST);
    let per_request = NonZeroU32::new(config.max_requests)
        .map(|n| Duration::from_secs(config.period_seconds) / n.get());

    match per_request.and_then(Quota::with_period) {
        Some(quota) => quota.allow_burst(burst),
        None => {
            warn!(
                "Unusable rate limit {} requests / {}s, using {} per minute",
                config.max_requests, config.period_seconds, FALLBACK_PER_MINUTE
            );
            Quota::per_minute(FALLBACK_PER_MINUTE).allow_burst(burst)
        }
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
