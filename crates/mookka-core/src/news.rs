use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed category set for aggregated news items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Film,
    Serie,
    Book,
    Game,
    General,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Film => write!(f, "film"),
            Category::Serie => write!(f, "serie"),
            Category::Book => write!(f, "book"),
            Category::Game => write!(f, "game"),
            Category::General => write!(f, "general"),
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "film" => Ok(Category::Film),
            "serie" => Ok(Category::Serie),
            "book" => Ok(Category::Book),
            "game" => Ok(Category::Game),
            "general" => Ok(Category::General),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized category string.
///
/// Callers at the HTTP boundary treat this as "no filter" rather than
/// rejecting the request.
#[derive(Debug, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// One aggregated news article.
///
/// Instances are built fresh on every aggregation cycle and never mutated
/// afterwards. `id` is positional (`{source}-{index}` within one parse
/// pass) and is not stable across cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    /// Absolute URL to the article.
    pub link: String,
    /// Registered source name this item came from.
    pub source: String,
    /// Publish date from the feed, or the scrape-time clock for sources
    /// without a feed.
    pub date: DateTime<Utc>,
    /// Absolute image URL, or empty when no image was found.
    pub image: String,
    pub category: Category,
    pub description: String,
}
