//! Synthetic placeholder dataset served when every source failed.
//!
//! The boundary contract guarantees a non-empty, well-formed response
//! even during a total upstream outage; consumers show placeholder
//! content instead of an error screen.

use chrono::{DateTime, Duration, Utc};

use mookka_core::{Category, NewsItem};

const PLACEHOLDERS: &[(Category, &str, &str)] = &[
    (
        Category::Film,
        "Les sorties cinéma de la semaine",
        "Le tour d'horizon des films à l'affiche cette semaine.",
    ),
    (
        Category::Serie,
        "Les séries à suivre ce mois-ci",
        "Nouvelles saisons et nouveautés à ne pas manquer.",
    ),
    (
        Category::Book,
        "La sélection lecture du moment",
        "Romans et essais qui font parler d'eux en librairie.",
    ),
    (
        Category::Game,
        "Les jeux attendus cette saison",
        "Le point sur les sorties jeu vidéo à venir.",
    ),
    (
        Category::Film,
        "Retour sur les classiques du grand écran",
        "Une rétrospective des films qui ont marqué le cinéma.",
    ),
    (
        Category::Serie,
        "Ces séries qui reviennent bientôt",
        "Le calendrier des reprises de tournage et des diffusions.",
    ),
    (
        Category::Book,
        "Prix littéraires : les favoris",
        "Les titres les plus cités avant la saison des prix.",
    ),
    (
        Category::Game,
        "Le récap de l'actualité jeu vidéo",
        "Annonces, mises à jour et studios à suivre.",
    ),
];

/// Deterministic fabricated items, round-robin across categories, dated
/// a minute apart so the date-descending sort stays stable.
#[must_use]
pub fn fallback_items(now: DateTime<Utc>) -> Vec<NewsItem> {
    PLACEHOLDERS
        .iter()
        .enumerate()
        .map(|(index, &(category, title, description))| NewsItem {
            id: format!("fallback-{index}"),
            title: title.to_string(),
            link: format!("https://example.com/mookka/fallback/{index}"),
            source: "Mookka".to_string(),
            date: now - Duration::minutes(i64::try_from(index).unwrap_or(0)),
            image: String::new(),
            category,
            description: description.to_string(),
        })
        .collect()
}
