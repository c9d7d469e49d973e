//! Shared text cleanup: tag stripping, entity decoding, URL resolution.
//!
//! Used by the RSS parser, the listing scraper, and the article extractor.

/// Strip a `<![CDATA[...]]>` wrapper if present.
#[must_use]
pub fn strip_cdata(text: &str) -> &str {
    text.trim()
        .strip_prefix("<![CDATA[")
        .and_then(|rest| rest.strip_suffix("]]>"))
        .unwrap_or_else(|| text.trim())
}

/// Strip HTML tags from a string and normalize whitespace.
#[must_use]
pub fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Decode named and numeric HTML entities.
///
/// Feeds routinely double-encode (`&amp;amp;` for a literal `&`), so the
/// decode pass repeats until the text stops changing, capped at three
/// rounds.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    let mut current = text.to_string();
    for _ in 0..3 {
        let next = decode_entities_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn decode_entities_once(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];

        // An entity is "&...;" with a short body; anything else is a bare
        // ampersand.
        let semi = candidate[1..].find(';').map(|i| i + 1);
        match semi {
            Some(semi) if semi <= 10 => {
                let body = &candidate[1..semi];
                match decode_entity_body(body) {
                    Some(decoded) => out.push(decoded),
                    None => out.push_str(&candidate[..=semi]),
                }
                rest = &candidate[semi + 1..];
            }
            _ => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity_body(body: &str) -> Option<char> {
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let digits = body.strip_prefix('#')?;
            let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                digits.parse::<u32>().ok()?
            };
            char::from_u32(code)
        }
    }
}

/// Full cleanup for a feed/markup text field: CDATA unwrap, tag stripping,
/// entity decoding, whitespace normalization.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    decode_entities(&strip_html(strip_cdata(raw)))
        .trim()
        .to_string()
}

/// Resolve a possibly-relative URL against a source origin.
///
/// Absolute URLs pass through unchanged; protocol-relative URLs get
/// `https:`; everything else is joined onto `base`.
#[must_use]
pub fn resolve_url(href: &str, base: &str) -> String {
    let href = href.trim();
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if let Some(rest) = href.strip_prefix("//") {
        return format!("https://{rest}");
    }

    match reqwest::Url::parse(base).and_then(|b| b.join(href)) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            tracing::warn!(href, base, error = %e, "could not resolve relative URL");
            format!("{}/{}", base.trim_end_matches('/'), href.trim_start_matches('/'))
        }
    }
}
