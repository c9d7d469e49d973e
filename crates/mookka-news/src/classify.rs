//! Keyword-based category classification.
//!
//! Sources with a single editorial focus take their declared category
//! directly. Mixed-content outlets (a cinema site that also covers
//! series, say) go through keyword-frequency scoring over the item text.

use mookka_core::{Category, Source};

/// Keyword sets per category. Matching is lowercase substring
/// containment, not word-boundary aware: false positives on substrings
/// are tolerated in exchange for catching inflected French forms.
const BOOK_KEYWORDS: &[&str] = &[
    "livre", "roman", "auteur", "autrice", "lecture", "littérature", "librairie", "éditeur",
    "manga", "bande dessinée", "prix goncourt", "book",
];

const FILM_KEYWORDS: &[&str] = &[
    "film", "cinéma", "réalisateur", "réalisatrice", "long-métrage", "box-office", "salle obscure",
    "acteur", "actrice", "bande-annonce", "movie",
];

const SERIE_KEYWORDS: &[&str] = &[
    "série", "saison", "épisode", "showrunner", "netflix", "hbo", "prime video", "mini-série",
    "spin-off", "series",
];

const GAME_KEYWORDS: &[&str] = &[
    "jeu vidéo", "jeux vidéo", "gameplay", "console", "playstation", "xbox", "nintendo", "ps5",
    "manette", "dlc", "studio de développement", "game",
];

/// Assigns a category to an item.
///
/// Non-mixed sources return their declared category immediately. For
/// mixed or general sources, each keyword set is scored by counting how
/// many of its distinct keywords occur in the lowercased title +
/// description; the strictly highest count wins. Ties and all-zero
/// scores fall back to the source's declared category.
#[must_use]
pub fn classify(title: &str, description: &str, source: &Source) -> Category {
    if !source.mixed_content {
        return source.category;
    }

    let text = format!("{} {}", title.to_lowercase(), description.to_lowercase());

    let scored = [
        (Category::Book, keyword_hits(&text, BOOK_KEYWORDS)),
        (Category::Film, keyword_hits(&text, FILM_KEYWORDS)),
        (Category::Serie, keyword_hits(&text, SERIE_KEYWORDS)),
        (Category::Game, keyword_hits(&text, GAME_KEYWORDS)),
    ];

    let best = scored.iter().map(|&(_, n)| n).max().unwrap_or(0);
    if best == 0 {
        return source.category;
    }

    let mut winners = scored.iter().filter(|&&(_, n)| n == best);
    let first = winners.next().map(|&(cat, _)| cat);
    if winners.next().is_some() {
        // Tie between categories: inconclusive.
        return source.category;
    }

    first.unwrap_or(source.category)
}

fn keyword_hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text.contains(*kw)).count()
}
