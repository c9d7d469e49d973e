use chrono::TimeZone;

use super::*;
use mookka_core::{source_by_name, Category};

fn game_source() -> &'static Source {
    source_by_name("Gamekult").expect("registered source")
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).single().expect("valid timestamp")
}

const WELL_FORMED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <title>Gamekult</title>
    <item>
      <title>Un nouveau studio annonce son premier jeu</title>
      <link>https://www.gamekult.com/actualite/studio-1.html</link>
      <pubDate>Wed, 26 Aug 2026 10:30:00 +0200</pubDate>
      <description>Le studio pr&#233;sente un premier trailer.</description>
      <enclosure url="https://cdn.gamekult.com/a.jpg" type="image/jpeg" length="1234"/>
    </item>
    <item>
      <title><![CDATA[Test &amp; verdict de la manette]]></title>
      <link>https://www.gamekult.com/actualite/manette.html</link>
      <pubDate>Tue, 25 Aug 2026 09:00:00 GMT</pubDate>
      <description><![CDATA[<p>Un test complet avec <img src="https://cdn.gamekult.com/b.png"> photos.</p>]]></description>
    </item>
    <item>
      <title>Sortie surprise ce soir</title>
      <link>https://www.gamekult.com/actualite/sortie.html</link>
      <media:content url="https://cdn.gamekult.com/c.webp" medium="image"/>
    </item>
  </channel>
</rss>"#;

#[test]
fn well_formed_feed_yields_one_item_per_block() {
    let items = parse_feed(WELL_FORMED, game_source(), now()).expect("parse");
    assert_eq!(items.len(), 3);
}

#[test]
fn titles_are_cleaned_and_entities_decoded() {
    let items = parse_feed(WELL_FORMED, game_source(), now()).expect("parse");
    assert_eq!(items[0].title, "Un nouveau studio annonce son premier jeu");
    assert_eq!(items[1].title, "Test & verdict de la manette");
    assert_eq!(items[0].description, "Le studio présente un premier trailer.");
}

#[test]
fn title_with_html_only_entity_keeps_item() {
    let xml = r#"<rss><channel><item>
        <title>Dossier&nbsp;: les sorties de la semaine</title>
        <link>https://www.gamekult.com/dossier.html</link>
    </item></channel></rss>"#;
    let items = parse_feed(xml, game_source(), now()).expect("parse");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Dossier : les sorties de la semaine");
}

#[test]
fn bare_ampersand_in_title_keeps_item() {
    let xml = r#"<rss><channel><item>
        <title>Mario & Luigi de retour</title>
        <link>https://www.gamekult.com/mario.html</link>
    </item></channel></rss>"#;
    let items = parse_feed(xml, game_source(), now()).expect("parse");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Mario & Luigi de retour");
}

#[test]
fn unknown_named_entity_stays_literal_without_dropping_item() {
    let xml = r#"<rss><channel><item>
        <title>Cin&eacute;ma de minuit</title>
        <link>https://www.gamekult.com/minuit.html</link>
    </item></channel></rss>"#;
    let items = parse_feed(xml, game_source(), now()).expect("parse");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Cin&eacute;ma de minuit");
}

#[test]
fn enclosure_url_with_bare_ampersand_is_kept_raw() {
    let xml = r#"<rss><channel><item>
        <title>Aperçu en images</title>
        <link>https://www.gamekult.com/apercu.html</link>
        <enclosure url="https://cdn.gamekult.com/a.jpg?w=400&h=300" type="image/jpeg"/>
    </item></channel></rss>"#;
    let items = parse_feed(xml, game_source(), now()).expect("parse");
    assert_eq!(items[0].image, "https://cdn.gamekult.com/a.jpg?w=400&h=300");
}

#[test]
fn descriptions_are_tag_stripped() {
    let items = parse_feed(WELL_FORMED, game_source(), now()).expect("parse");
    assert_eq!(items[1].description, "Un test complet avec photos.");
}

#[test]
fn pub_dates_parse_rfc2822_with_offset_and_gmt() {
    let items = parse_feed(WELL_FORMED, game_source(), now()).expect("parse");
    assert_eq!(
        items[0].date,
        Utc.with_ymd_and_hms(2026, 8, 26, 8, 30, 0).single().expect("valid")
    );
    assert_eq!(
        items[1].date,
        Utc.with_ymd_and_hms(2026, 8, 25, 9, 0, 0).single().expect("valid")
    );
}

#[test]
fn missing_pub_date_falls_back_to_now() {
    let items = parse_feed(WELL_FORMED, game_source(), now()).expect("parse");
    assert_eq!(items[2].date, now());
}

#[test]
fn image_priority_enclosure_then_inline_img_then_media_content() {
    let items = parse_feed(WELL_FORMED, game_source(), now()).expect("parse");
    assert_eq!(items[0].image, "https://cdn.gamekult.com/a.jpg");
    assert_eq!(items[1].image, "https://cdn.gamekult.com/b.png");
    assert_eq!(items[2].image, "https://cdn.gamekult.com/c.webp");
}

#[test]
fn non_image_enclosure_is_ignored() {
    let xml = r#"<rss><channel><item>
        <title>Podcast du jour</title>
        <link>https://www.gamekult.com/podcast.html</link>
        <enclosure url="https://cdn.gamekult.com/ep.mp3" type="audio/mpeg"/>
    </item></channel></rss>"#;
    let items = parse_feed(xml, game_source(), now()).expect("parse");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].image, "");
}

#[test]
fn ids_are_positional_per_source() {
    let items = parse_feed(WELL_FORMED, game_source(), now()).expect("parse");
    assert_eq!(items[0].id, "Gamekult-0");
    assert_eq!(items[1].id, "Gamekult-1");
    assert_eq!(items[2].id, "Gamekult-2");
}

#[test]
fn category_is_always_assigned() {
    let items = parse_feed(WELL_FORMED, game_source(), now()).expect("parse");
    for item in &items {
        assert_eq!(item.category, Category::Game);
    }
}

#[test]
fn mixed_source_items_are_keyword_classified() {
    let xml = r#"<rss><channel><item>
        <title>La saison 2 de la série arrive sur Netflix</title>
        <link>https://www.allocine.fr/article/serie-2.html</link>
        <description>Dix épisodes et un nouveau showrunner.</description>
    </item></channel></rss>"#;
    let source = source_by_name("AlloCiné").expect("registered source");
    let items = parse_feed(xml, source, now()).expect("parse");
    assert_eq!(items[0].category, Category::Serie);
}

#[test]
fn item_with_empty_title_is_discarded() {
    let xml = r#"<rss><channel>
      <item>
        <title><![CDATA[<b></b>]]></title>
        <link>https://www.gamekult.com/x.html</link>
      </item>
      <item>
        <title>Titre valide</title>
        <link>https://www.gamekult.com/y.html</link>
      </item>
    </channel></rss>"#;
    let items = parse_feed(xml, game_source(), now()).expect("parse");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Titre valide");
    assert_eq!(items[0].id, "Gamekult-0");
}

#[test]
fn item_without_link_is_discarded() {
    let xml = r#"<rss><channel><item>
        <title>Sans lien</title>
    </item></channel></rss>"#;
    let items = parse_feed(xml, game_source(), now()).expect("parse");
    assert!(items.is_empty());
}

#[test]
fn feed_without_items_yields_empty_vec() {
    let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel><title>vide</title></channel></rss>"#;
    let items = parse_feed(xml, game_source(), now()).expect("parse");
    assert!(items.is_empty());
}

#[test]
fn malformed_xml_is_an_error_or_empty_never_a_panic() {
    let xml = "<rss><channel><item><title>Tronqu";
    match parse_feed(xml, game_source(), now()) {
        Ok(items) => assert!(items.is_empty()),
        Err(NewsError::Xml(_)) => {}
        Err(e) => panic!("unexpected error type: {e}"),
    }
}
