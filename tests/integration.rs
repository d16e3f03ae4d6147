// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end lookups against the standard catalog

use i18n_codes::{Catalog, CodeError};

#[test]
fn test_japan_by_every_code() {
    let catalog = Catalog::standard();
    let japan = catalog.countries().get("JP").expect("JP should exist");
    assert_eq!(japan.name(), "Japan");
    assert_eq!(japan.numeric(), 392);
    assert_eq!(japan.alpha3(), Some("JPN"));

    assert_eq!(catalog.countries().lookup("jp", false), Some(japan));
    assert!(catalog.countries().lookup("jp", true).is_none());
    assert_eq!(catalog.countries().lookup_numeric(392), Some(japan));
    assert_eq!(catalog.countries().lookup_alternate("JPN", true), Some(japan));
}

#[test]
fn test_swiss_currencies() {
    let catalog = Catalog::standard();
    let switzerland = catalog.countries().get("CH").expect("CH should exist");
    let codes: Vec<_> = catalog
        .currencies_of(switzerland)
        .iter()
        .map(|c| c.code())
        .collect();
    assert_eq!(codes, ["CHE", "CHF", "CHW"]);
}

#[test]
fn test_ruble_search() {
    let catalog = Catalog::standard();
    let rubles = catalog
        .currencies()
        .find_by_name_pattern(".*Ruble")
        .expect("pattern should compile");
    let codes: Vec<_> = rubles.iter().map(|c| c.code()).collect();
    assert_eq!(codes, ["BYN", "BYR", "RUB", "RUR"]);

    let none = catalog.currencies().find_by_name_pattern("Ruble").unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_invalid_pattern_is_distinct_from_no_match() {
    let catalog = Catalog::standard();
    let err = catalog.countries().find_by_name_pattern("(Japan").unwrap_err();
    assert!(matches!(err, CodeError::InvalidPattern { .. }));
    assert!(catalog
        .countries()
        .find_by_name_pattern("Atlantis")
        .unwrap()
        .is_empty());
}

#[test]
fn test_legacy_language_codes() {
    let catalog = Catalog::standard();
    let indonesian = catalog.languages().get("id").expect("id should exist");
    assert_eq!(catalog.languages().get("in"), Some(indonesian));
    assert_eq!(catalog.languages().lookup("IN", false), Some(indonesian));
    assert_eq!(indonesian.name(), "Indonesian");
}

#[test]
fn test_euro_users_include_kosovo() {
    let catalog = Catalog::standard();
    let euro = catalog.currencies().get("EUR").expect("EUR should exist");
    let users: Vec<_> = catalog.countries_of(euro).iter().map(|c| c.alpha2()).collect();
    assert!(users.contains(&"DE"));
    assert!(users.contains(&"XK"));
    assert!(!users.contains(&"GB"));
}

#[test]
fn test_locale_round_trip() {
    let catalog = Catalog::standard();
    let locale = catalog.locales().get("pt_BR", true).expect("pt-BR should exist");
    assert_eq!(locale.tag(), "pt-BR");
    assert_eq!(locale.language().name(), "Portuguese");
    assert_eq!(locale.country().map(|c| c.name()), Some("Brazil"));
    assert_eq!(catalog.locale_from_posix(&locale.posix_name()), Some(locale));
}

#[test]
fn test_scripts() {
    let catalog = Catalog::standard();
    let japanese = catalog.scripts().lookup("jpan", false).expect("Jpan should exist");
    assert_eq!(japanese.numeric(), 413);
    assert_eq!(catalog.scripts().lookup_numeric(413), Some(japanese));
}

#[test]
fn test_bibliographic_pair_resolves_to_same_language() {
    let catalog = Catalog::standard();
    let by_b = catalog.language_by_code("chi", true);
    let by_t = catalog.language_by_code("zho", true);
    assert_eq!(by_b.map(|l| l.code()), Some("zh"));
    assert_eq!(by_b, by_t);
}
