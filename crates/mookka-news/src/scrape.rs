//! HTML listing scraper for sources without an RSS feed.
//!
//! Per-source structural patterns live in a declarative table: adding a
//! scraped outlet is a data entry, not a new code path. Each site's
//! markup differs and will silently drift after redesigns; that fragility
//! is inherent to scraping uncontrolled HTML and is contained per source,
//! not worked around.

use chrono::{DateTime, Utc};
use regex::Regex;

use mookka_core::{NewsItem, Source};

use crate::classify::classify;
use crate::text::{clean_text, resolve_url};

/// Hard cap on article blocks processed per source per pass.
const MAX_BLOCKS: usize = 10;

/// Extraction patterns for one source's listing page. `block` captures
/// the inner HTML of one article container; the field patterns run
/// inside a captured block.
struct ListingSelectors {
    block: &'static str,
    title: &'static str,
    link: &'static str,
    image: &'static str,
    description: &'static str,
}

const GENERIC_SELECTORS: ListingSelectors = ListingSelectors {
    block: r"(?is)<article[^>]*>(.*?)</article>",
    title: r"(?is)<h[1-4][^>]*>(.*?)</h[1-4]>",
    link: r#"(?is)<a[^>]+href\s*=\s*["']([^"']+)["']"#,
    image: r#"(?is)<img[^>]+src\s*=\s*["']([^"']+)["']"#,
    description: r"(?is)<p[^>]*>(.*?)</p>",
};

/// Structural selectors per scraped source, keyed by registry name.
/// Unregistered names fall back to [`GENERIC_SELECTORS`].
const SELECTORS: &[(&str, ListingSelectors)] = &[(
    "Babelio",
    ListingSelectors {
        block: r#"(?is)<div[^>]+class\s*=\s*["'][^"']*actu_bloc[^"']*["'][^>]*>(.*?)</div>"#,
        title: r"(?is)<h2[^>]*>(.*?)</h2>",
        link: r#"(?is)<a[^>]+href\s*=\s*["']([^"']+)["']"#,
        image: r#"(?is)<img[^>]+src\s*=\s*["']([^"']+)["']"#,
        description: r#"(?is)<p[^>]+class\s*=\s*["'][^"']*chapo[^"']*["'][^>]*>(.*?)</p>"#,
    },
)];

fn selectors_for(source_name: &str) -> &'static ListingSelectors {
    SELECTORS
        .iter()
        .find(|(name, _)| *name == source_name)
        .map_or(&GENERIC_SELECTORS, |(_, sel)| sel)
}

/// Scrape a listing page into news items for one source.
///
/// Scraped markup has no reliable publish date, so `date` is the
/// caller's clock value: scraped items always rank freshest in the
/// date-descending merge. Known approximation, kept as-is.
#[must_use]
pub fn scrape_listing(html: &str, source: &Source, now: DateTime<Utc>) -> Vec<NewsItem> {
    let selectors = selectors_for(source.name);
    let block_re = Regex::new(selectors.block).expect("valid block regex");
    let title_re = Regex::new(selectors.title).expect("valid title regex");
    let link_re = Regex::new(selectors.link).expect("valid link regex");
    let image_re = Regex::new(selectors.image).expect("valid image regex");
    let description_re = Regex::new(selectors.description).expect("valid description regex");

    let mut items = Vec::new();

    for cap in block_re.captures_iter(html).take(MAX_BLOCKS) {
        let block = cap.get(1).map_or("", |m| m.as_str());

        let title = first_capture(&title_re, block).map(|t| clean_text(&t)).unwrap_or_default();
        let link = first_capture(&link_re, block)
            .map(|href| resolve_url(&href, source.base_url))
            .unwrap_or_default();
        if title.is_empty() || link.is_empty() {
            continue;
        }

        let image = first_capture(&image_re, block)
            .map(|src| resolve_url(&src, source.base_url))
            .unwrap_or_default();
        let description = first_capture(&description_re, block)
            .map(|d| clean_text(&d))
            .unwrap_or_default();
        let category = classify(&title, &description, source);

        items.push(NewsItem {
            id: format!("{}-{}", source.name, items.len()),
            title,
            link,
            source: source.name.to_string(),
            date: now,
            image,
            category,
            description,
        });
    }

    items
}

fn first_capture(re: &Regex, block: &str) -> Option<String> {
    re.captures(block)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
#[path = "scrape_test.rs"]
mod tests;
