//! Single-slot TTL cache over the aggregation pipeline.
//!
//! The slot always holds the full unfiltered merged list; category
//! filtering happens at the HTTP boundary after retrieval. The refresh
//! runs under the slot's async mutex, so simultaneous requests at TTL
//! expiry trigger exactly one upstream pass instead of a stampede.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use mookka_core::NewsItem;

/// Time source, injectable so TTL expiry is testable without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

struct CacheSlot {
    items: Vec<NewsItem>,
    fetched_at: DateTime<Utc>,
}

/// Process-wide cache of the aggregated news list.
pub struct NewsCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    slot: Mutex<Option<CacheSlot>>,
}

impl NewsCache {
    #[must_use]
    pub fn new(ttl_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl: Duration::seconds(i64::try_from(ttl_secs).unwrap_or(i64::MAX)),
            clock,
            slot: Mutex::new(None),
        }
    }

    /// Returns the cached list, refreshing first when the slot is empty
    /// or older than the TTL. The slot is wholesale-replaced on refresh,
    /// never merged.
    pub async fn get_or_refresh<F, Fut>(&self, refresh: F) -> Vec<NewsItem>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Vec<NewsItem>>,
    {
        let mut slot = self.slot.lock().await;
        let now = self.clock.now();

        let fresh = slot
            .as_ref()
            .is_some_and(|cached| now - cached.fetched_at <= self.ttl);

        if !fresh {
            let items = refresh().await;
            tracing::debug!(count = items.len(), "news cache refreshed");
            *slot = Some(CacheSlot {
                items,
                fetched_at: now,
            });
        }

        slot.as_ref().map(|cached| cached.items.clone()).unwrap_or_default()
    }
}
