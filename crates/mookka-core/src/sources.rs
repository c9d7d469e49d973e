//! Static registry of external news sources.
//!
//! Hand-maintained configuration data: adding an outlet is a data edit
//! here, never a new code path in the pipeline. Selector tables for
//! sources without a feed live next to the scraper that consumes them.

use crate::news::Category;

/// One external outlet the aggregator pulls from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    /// Display name, also used as the `source` field on items and as the
    /// key into the scraper's selector table.
    pub name: &'static str,
    /// Site origin, used to resolve relative links from scraped markup.
    pub base_url: &'static str,
    /// Default category when keyword scoring is inconclusive.
    pub category: Category,
    /// RSS endpoint; sources without one are scraped from `base_url`.
    pub rss_url: Option<&'static str>,
    /// Outlets that publish across several categories (e.g. a cinema site
    /// that also covers series). Their items go through keyword scoring
    /// instead of taking the declared category directly.
    pub mixed_content: bool,
}

const SOURCES: &[Source] = &[
    Source {
        name: "AlloCiné",
        base_url: "https://www.allocine.fr",
        category: Category::Film,
        rss_url: Some("https://www.allocine.fr/rss/news.xml"),
        mixed_content: true,
    },
    Source {
        name: "Première",
        base_url: "https://www.premiere.fr",
        category: Category::Film,
        rss_url: Some("https://www.premiere.fr/rss"),
        mixed_content: true,
    },
    Source {
        name: "Critictoo",
        base_url: "https://www.critictoo.com",
        category: Category::Serie,
        rss_url: Some("https://www.critictoo.com/feed/"),
        mixed_content: false,
    },
    Source {
        name: "ActuaLitté",
        base_url: "https://actualitte.com",
        category: Category::Book,
        rss_url: Some("https://actualitte.com/flux/rss"),
        mixed_content: false,
    },
    Source {
        name: "Babelio",
        base_url: "https://www.babelio.com",
        category: Category::Book,
        rss_url: None,
        mixed_content: false,
    },
    Source {
        name: "jeuxvideo.com",
        base_url: "https://www.jeuxvideo.com",
        category: Category::Game,
        rss_url: Some("https://www.jeuxvideo.com/rss/rss-news.xml"),
        mixed_content: false,
    },
    Source {
        name: "Gamekult",
        base_url: "https://www.gamekult.com",
        category: Category::Game,
        rss_url: Some("https://www.gamekult.com/feed.xml"),
        mixed_content: false,
    },
];

/// The ordered list of registered sources.
#[must_use]
pub fn sources() -> &'static [Source] {
    SOURCES
}

/// Look up a source descriptor by its registered name.
#[must_use]
pub fn source_by_name(name: &str) -> Option<&'static Source> {
    SOURCES.iter().find(|s| s.name == name)
}
