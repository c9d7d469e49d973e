//! Tolerant RSS feed parsing.
//!
//! Event-based extraction of `<item>` blocks: no schema validation, no
//! namespace resolution beyond literal prefixed names. Feeds in the wild
//! are routinely non-compliant; anything that cannot be interpreted is
//! skipped item by item, never escalated to a whole-feed failure by this
//! module's caller.

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;

use mookka_core::{NewsItem, Source};

use crate::classify::classify;
use crate::error::NewsError;
use crate::text::clean_text;

/// Accumulated fields for one `<item>` block.
#[derive(Default)]
struct ItemFields {
    title: String,
    link: String,
    pub_date: String,
    description: String,
    content_encoded: String,
    enclosure_image: String,
    media_image: String,
}

/// Parse an RSS XML document into news items for one source.
///
/// Items with an empty title or link after cleaning are discarded here,
/// not downstream. A feed with no `<item>` blocks yields an empty vec.
///
/// # Errors
///
/// Returns [`NewsError::Xml`] if the reader hits malformed XML. The
/// aggregator treats that as an empty contribution from this source.
pub fn parse_feed(
    xml: &str,
    source: &Source,
    now: DateTime<Utc>,
) -> Result<Vec<NewsItem>, NewsError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut fields = ItemFields::default();
    let mut in_item = false;
    let mut in_description = false;
    let mut in_content_encoded = false;
    let mut current_tag = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("").to_string();
                match name.as_str() {
                    "item" => {
                        in_item = true;
                        in_description = false;
                        in_content_encoded = false;
                        fields = ItemFields::default();
                    }
                    "description" if in_item => in_description = true,
                    "content:encoded" if in_item => in_content_encoded = true,
                    "enclosure" | "media:content" if in_item => {
                        record_media_attrs(&e, &name, &mut fields);
                    }
                    _ => {}
                }
                current_tag = name;
            }
            Ok(Event::Empty(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("");
                if in_item && (name == "enclosure" || name == "media:content") {
                    record_media_attrs(&e, name, &mut fields);
                }
            }
            Ok(Event::End(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("");
                match name {
                    "description" => in_description = false,
                    "content:encoded" => in_content_encoded = false,
                    "item" if in_item => {
                        in_item = false;
                        if let Some(item) = build_item(&fields, source, items.len(), now) {
                            items.push(item);
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                if in_item {
                    let text = unescape_or_raw(&e);
                    if in_description {
                        // Accumulate all text nodes inside <description>,
                        // including those after nested inline tags.
                        if !fields.description.is_empty() {
                            fields.description.push(' ');
                        }
                        fields.description.push_str(&text);
                    } else if in_content_encoded {
                        fields.content_encoded.push_str(&text);
                    } else {
                        match current_tag.as_str() {
                            "title" => fields.title = text,
                            "link" => fields.link = text,
                            "pubDate" => fields.pub_date = text,
                            _ => {}
                        }
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if in_item {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    if in_description {
                        fields.description.push_str(&text);
                    } else if in_content_encoded {
                        fields.content_encoded.push_str(&text);
                    } else {
                        match current_tag.as_str() {
                            "title" => fields.title = text,
                            "link" => fields.link = text,
                            _ => {}
                        }
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(NewsError::Xml(e)),
            _ => {}
        }
    }

    Ok(items)
}

/// Unescape a text node, keeping the raw bytes when the escape is not
/// valid XML. Feeds routinely carry HTML-only named entities (`&nbsp;`,
/// `&eacute;`) and bare ampersands; the raw text goes through
/// [`clean_text`] later, which decodes what it recognizes.
fn unescape_or_raw(e: &quick_xml::events::BytesText<'_>) -> String {
    match e.unescape() {
        Ok(text) => text.into_owned(),
        Err(_) => String::from_utf8_lossy(e.as_ref()).into_owned(),
    }
}

/// Pull `url`/`type` attributes off `<enclosure>` and `<media:content>`.
fn record_media_attrs(e: &quick_xml::events::BytesStart<'_>, name: &str, fields: &mut ItemFields) {
    let mut url = String::new();
    let mut media_type = String::new();
    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref()).unwrap_or("");
        // Same tolerance as text nodes: an unescapable attribute value
        // (bare `&` in a query string) keeps its raw form.
        let value = match attr.unescape_value() {
            Ok(v) => v.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        };
        match key {
            "url" => url = value,
            "type" => media_type = value,
            _ => {}
        }
    }
    if url.is_empty() {
        return;
    }
    if name == "enclosure" {
        if media_type.starts_with("image") {
            fields.enclosure_image = url;
        }
    } else if fields.media_image.is_empty() {
        fields.media_image = url;
    }
}

fn build_item(
    fields: &ItemFields,
    source: &Source,
    index: usize,
    now: DateTime<Utc>,
) -> Option<NewsItem> {
    let title = clean_text(&fields.title);
    let link = fields.link.trim().to_string();
    if title.is_empty() || link.is_empty() {
        return None;
    }

    let description = clean_text(&fields.description);
    let category = classify(&title, &description, source);

    Some(NewsItem {
        id: format!("{}-{index}", source.name),
        title,
        link,
        source: source.name.to_string(),
        date: parse_pub_date(&fields.pub_date, now),
        image: pick_image(fields),
        category,
        description,
    })
}

/// Parse a feed publish date, falling back to "now" when the field is
/// absent or unreadable.
fn parse_pub_date(raw: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    let raw = raw.trim();
    if raw.is_empty() {
        return now;
    }
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map_or(now, |d| d.with_timezone(&Utc))
}

/// Image extraction priority: image-typed `<enclosure>`, then an inline
/// `<img>` in `<content:encoded>` or the description body (covers
/// `<figure>`-wrapped images too), then `<media:content url=...>`.
fn pick_image(fields: &ItemFields) -> String {
    if !fields.enclosure_image.is_empty() {
        return fields.enclosure_image.clone();
    }
    if let Some(src) = extract_img_src(&fields.content_encoded) {
        return src;
    }
    if let Some(src) = extract_img_src(&fields.description) {
        return src;
    }
    fields.media_image.clone()
}

fn extract_img_src(html: &str) -> Option<String> {
    if html.is_empty() {
        return None;
    }
    let re = Regex::new(r#"(?is)<img[^>]+src\s*=\s*["']([^"']+)["']"#).expect("valid img regex");
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
#[path = "rss_test.rs"]
mod tests;
