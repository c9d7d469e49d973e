//! Aggregation: concurrent fan-out over the source registry, merge,
//! advertisement filtering, date sort, and total-failure fallback.

use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};

use mookka_core::{NewsItem, Source};

use crate::client::FeedClient;
use crate::fallback::fallback_items;
use crate::{rss, scrape};

/// Lowercase title markers for advertisement/sponsorship content.
const AD_MARKERS: &[&str] = &[
    "sponsor",
    "sponsorisé",
    "publicité",
    "publireportage",
    "partenaire",
    "partenariat",
];

/// Run one full aggregation pass.
///
/// All sources are fetched concurrently (bounded by `max_concurrent`),
/// each wrapped in `fetch_timeout` so one hung connection cannot stall
/// the batch. A source failure of any kind degrades to an empty
/// contribution from that source only. If every source came back empty,
/// the synthetic fallback set is substituted before filtering, so the
/// result is never empty.
pub async fn collect_news(
    client: &FeedClient,
    sources: &[Source],
    fetch_timeout: Duration,
    max_concurrent: usize,
    now: DateTime<Utc>,
) -> Vec<NewsItem> {
    // Futures are built up front (they stay lazy until polled) so the
    // borrow of each `Source` is a concrete lifetime; mapping inside the
    // stream trips a rustc higher-ranked lifetime limitation when the
    // resulting future must prove `Send` for the HTTP handler.
    let fetches: Vec<_> = sources
        .iter()
        .map(|source| fetch_source(client, source, fetch_timeout, now))
        .collect();
    let per_source: Vec<Vec<NewsItem>> = stream::iter(fetches)
        .buffer_unordered(max_concurrent.max(1))
        .collect()
        .await;

    let mut items: Vec<NewsItem> = per_source.into_iter().flatten().collect();

    if items.is_empty() {
        tracing::warn!("all sources returned empty; serving fallback dataset");
        items = fallback_items(now);
    }

    items.retain(|item| !is_advertisement(&item.title));
    items.sort_by(|a, b| b.date.cmp(&a.date));
    items
}

/// Fetch and parse one source. Never fails: network errors, non-2xx
/// statuses, timeouts, and parse failures all log a warning and yield an
/// empty list for this source.
async fn fetch_source(
    client: &FeedClient,
    source: &Source,
    fetch_timeout: Duration,
    now: DateTime<Utc>,
) -> Vec<NewsItem> {
    let url = source.rss_url.unwrap_or(source.base_url);

    let body = match tokio::time::timeout(fetch_timeout, client.fetch_text(url)).await {
        Ok(Ok(body)) => body,
        Ok(Err(e)) => {
            tracing::warn!(source = source.name, url, error = %e, "source fetch failed");
            return Vec::new();
        }
        Err(_) => {
            tracing::warn!(source = source.name, url, "source fetch timed out");
            return Vec::new();
        }
    };

    let items = if source.rss_url.is_some() {
        match rss::parse_feed(&body, source, now) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(source = source.name, error = %e, "feed parse failed");
                return Vec::new();
            }
        }
    } else {
        scrape::scrape_listing(&body, source, now)
    };

    tracing::debug!(source = source.name, count = items.len(), "collected items");
    items
}

fn is_advertisement(title: &str) -> bool {
    let lower = title.to_lowercase();
    AD_MARKERS.iter().any(|marker| lower.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ad_markers_match_case_insensitively() {
        assert!(is_advertisement("Article SPONSORISÉ : notre sélection"));
        assert!(is_advertisement("En partenariat avec la marque"));
        assert!(is_advertisement("Publicité"));
    }

    #[test]
    fn regular_titles_are_kept() {
        assert!(!is_advertisement("La saison 2 arrive en septembre"));
        assert!(!is_advertisement("Un roman événement à la rentrée"));
    }
}
