//! News aggregation pipeline for Mookka.
//!
//! Fetches the registered sources concurrently, parses RSS feeds with a
//! tolerant event reader, scrapes listing pages for sources without a
//! feed, classifies items into the fixed category set, and serves the
//! merged result through a TTL cache. External flakiness (dead feeds,
//! markup drift, timeouts) degrades to empty per-source contributions,
//! never to a caller-visible error.

pub mod aggregate;
pub mod article;
pub mod cache;
pub mod classify;
pub mod client;
pub mod error;
pub mod fallback;
pub mod rss;
pub mod scrape;
pub mod text;

pub use aggregate::collect_news;
pub use article::{extract_content, fetch_article, ArticleContent};
pub use cache::{Clock, NewsCache, SystemClock};
pub use classify::classify;
pub use client::FeedClient;
pub use error::NewsError;
