//! Article content extraction for the reader view.
//!
//! Same resilient-scraping philosophy as the listing pipeline: try the
//! most specific container first, degrade step by step, and filter out
//! navigational noise rather than failing on unexpected markup.

use regex::Regex;

use crate::client::FeedClient;
use crate::error::NewsError;
use crate::text::clean_text;

/// Paragraphs shorter than this are navigation, captions, or cruft.
const MIN_PARAGRAPH_LEN: usize = 40;

/// Lowercase markers for boilerplate paragraphs (cookie notices,
/// newsletter prompts, share bars).
const NOISE_MARKERS: &[&str] = &[
    "cookie",
    "newsletter",
    "abonnez-vous",
    "inscrivez-vous",
    "tous droits réservés",
    "partager cet article",
    "lire aussi",
    "javascript",
];

/// Article container patterns, most specific first. The final pattern is
/// a whole-document fallback so pages with unrecognized structure still
/// produce whatever paragraph text they contain.
const CONTAINER_PATTERNS: &[&str] = &[
    r"(?is)<article[^>]*>(.*?)</article>",
    r#"(?is)<div[^>]+(?:id|class)\s*=\s*["'][^"']*(?:article-content|article-body|post-content|entry-content|content-body)[^"']*["'][^>]*>(.*?)</div>"#,
    r"(?is)<main[^>]*>(.*?)</main>",
    r"(?is)<body[^>]*>(.*?)</body>",
];

/// Extracted reader-view content for one article page.
#[derive(Debug, Clone)]
pub struct ArticleContent {
    /// One entry per retained paragraph, in document order.
    pub content: Vec<String>,
    pub url: String,
}

/// Fetch one article page and extract its readable paragraphs.
///
/// # Errors
///
/// Returns [`NewsError`] when the page itself cannot be fetched; an
/// unrecognized page structure is not an error, just empty content.
pub async fn fetch_article(client: &FeedClient, url: &str) -> Result<ArticleContent, NewsError> {
    let html = client.fetch_text(url).await?;
    Ok(ArticleContent {
        content: extract_content(&html),
        url: url.to_string(),
    })
}

/// Extract paragraph-like text from an article page.
///
/// Picks the first container pattern that yields at least one retained
/// paragraph, so a sparse `<article>` wrapper does not mask a richer
/// content div further down the priority list.
#[must_use]
pub fn extract_content(html: &str) -> Vec<String> {
    for pattern in CONTAINER_PATTERNS {
        let re = Regex::new(pattern).expect("valid container regex");
        let Some(cap) = re.captures(html) else {
            continue;
        };
        let container = cap.get(1).map_or("", |m| m.as_str());
        let paragraphs = extract_paragraphs(container);
        if !paragraphs.is_empty() {
            return paragraphs;
        }
    }
    Vec::new()
}

fn extract_paragraphs(container: &str) -> Vec<String> {
    let re = Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("valid paragraph regex");
    re.captures_iter(container)
        .filter_map(|cap| cap.get(1).map(|m| clean_text(m.as_str())))
        .filter(|text| is_content_paragraph(text))
        .collect()
}

fn is_content_paragraph(text: &str) -> bool {
    if text.chars().count() < MIN_PARAGRAPH_LEN {
        return false;
    }
    let lower = text.to_lowercase();
    !NOISE_MARKERS.iter().any(|marker| lower.contains(marker))
}
