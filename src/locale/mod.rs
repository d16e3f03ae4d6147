// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locales: a language optionally narrowed to a country.
//!
//! Unlike the single-code tables a locale is identified by a pair of keys,
//! so it has its own registry. Entries are declared as key pairs and
//! resolved against the language and country registries when the registry
//! is built; the canonical tag (`ja`, `ja-JP`) is computed once then.

mod table;

use crate::country::Country;
use crate::error::{CodeError, Result};
use crate::language::Language;
use crate::record::CodeRecord;
use crate::registry::CodeRegistry;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

pub(crate) use table::LOCALES;

const UNDEFINED_TAG: &str = "undefined";

/// A locale as declared in the literal table, before resolution.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LocaleEntry {
    language: &'static str,
    country: Option<&'static str>,
}

impl LocaleEntry {
    pub(crate) const fn new(language: &'static str, country: Option<&'static str>) -> Self {
        Self { language, country }
    }
}

/// A resolved locale.
#[derive(Debug, Clone, Serialize)]
pub struct Locale {
    tag: String,
    language: &'static Language,
    country: Option<&'static Country>,
}

impl Locale {
    fn new(language: &'static Language, country: Option<&'static Country>) -> Self {
        let tag = match country {
            Some(country) => format!("{}-{}", language.code(), country.alpha2()),
            None => language.code().to_string(),
        };
        Self {
            tag,
            language,
            country,
        }
    }

    /// Canonical tag, `ja` or `ja-JP`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn language(&self) -> &'static Language {
        self.language
    }

    pub fn country(&self) -> Option<&'static Country> {
        self.country
    }

    /// The tag in POSIX form, `ja_JP`.
    pub fn posix_name(&self) -> String {
        self.tag.replace('-', "_")
    }

    /// Display name, `Japanese (Japan)`.
    pub fn name(&self) -> String {
        match self.country {
            Some(country) => format!("{} ({})", self.language.name(), country.name()),
            None => self.language.name().to_string(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for Locale {}

impl Hash for Locale {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
    }
}

/// Registry of locales keyed by their language and country pair.
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    by_tag: HashMap<String, usize>,
    by_language: HashMap<&'static str, Vec<usize>>,
    by_country: HashMap<&'static str, Vec<usize>>,
    undefined: Option<Locale>,
}

impl LocaleRegistry {
    /// Resolve `entries` against the language and country registries.
    pub(crate) fn build(
        entries: &'static [LocaleEntry],
        languages: &CodeRegistry<Language>,
        countries: &CodeRegistry<Country>,
    ) -> Result<Self> {
        let mut locales = Vec::with_capacity(entries.len());
        let mut by_tag = HashMap::with_capacity(entries.len());
        let mut by_language: HashMap<&'static str, Vec<usize>> = HashMap::new();
        let mut by_country: HashMap<&'static str, Vec<usize>> = HashMap::new();

        for entry in entries {
            let language = languages
                .get(entry.language)
                .ok_or_else(|| dangling(entry, Language::DOMAIN, entry.language))?;
            let country = match entry.country {
                Some(key) => Some(
                    countries
                        .get(key)
                        .ok_or_else(|| dangling(entry, Country::DOMAIN, key))?,
                ),
                None => None,
            };

            let locale = Locale::new(language, country);
            let position = locales.len();
            if by_tag.insert(locale.tag.clone(), position).is_some() {
                return Err(CodeError::Duplicate {
                    domain: "locale",
                    field: "tag",
                    value: locale.tag,
                });
            }
            by_language.entry(language.code()).or_default().push(position);
            if let Some(country) = country {
                by_country.entry(country.alpha2()).or_default().push(position);
            }
            locales.push(locale);
        }

        let undefined = languages.undefined().map(|language| Locale {
            tag: UNDEFINED_TAG.to_string(),
            language,
            country: None,
        });

        Ok(Self {
            locales,
            by_tag,
            by_language,
            by_country,
            undefined,
        })
    }

    /// Every locale, in declaration order.
    pub fn all(&self) -> &[Locale] {
        &self.locales
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Lookup by tag, accepting `-` or `_` between language and country.
    ///
    /// Each half goes through its own table's normalization, so legacy
    /// language codes resolve (`iw-IL` finds `he-IL`).
    pub fn get(&self, tag: &str, case_sensitive: bool) -> Option<&Locale> {
        let (language, country) = match tag.split_once(['-', '_']) {
            Some((language, country)) => (language, Some(country)),
            None => (tag, None),
        };

        let language = Language::KEY_RULES.normalize(language, case_sensitive)?;
        let key = match country {
            Some(country) => {
                let country = Country::KEY_RULES.normalize(country, case_sensitive)?;
                format!("{language}-{country}")
            }
            None => language.into_owned(),
        };
        self.by_tag.get(&key).map(|&position| &self.locales[position])
    }

    /// Locales written in `language`, the language-only entry first.
    pub fn by_language(&self, language: &Language) -> Vec<&Locale> {
        self.collect(self.by_language.get(language.code()))
    }

    /// Locales narrowed to `country`.
    pub fn by_country(&self, country: &Country) -> Vec<&Locale> {
        self.collect(self.by_country.get(country.alpha2()))
    }

    /// The language-only entry for `language`, if declared.
    pub fn language_only(&self, language: &Language) -> Option<&Locale> {
        self.by_tag
            .get(language.code())
            .map(|&position| &self.locales[position])
    }

    pub fn undefined(&self) -> Option<&Locale> {
        self.undefined.as_ref()
    }

    fn collect(&self, positions: Option<&Vec<usize>>) -> Vec<&Locale> {
        positions
            .map(|positions| positions.iter().map(|&p| &self.locales[p]).collect())
            .unwrap_or_default()
    }
}

impl fmt::Debug for LocaleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleRegistry")
            .field("locales", &self.locales.len())
            .finish()
    }
}

fn dangling(entry: &LocaleEntry, target: &'static str, related: &str) -> CodeError {
    let key = match entry.country {
        Some(country) => format!("{}-{}", entry.language, country),
        None => entry.language.to_string(),
    };
    CodeError::DanglingReference {
        domain: "locale",
        key,
        target,
        related: related.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::COUNTRIES;
    use crate::language::LANGUAGES;

    fn registry() -> LocaleRegistry {
        let languages = CodeRegistry::build(LANGUAGES).unwrap();
        let countries = CodeRegistry::build(COUNTRIES).unwrap();
        LocaleRegistry::build(LOCALES, &languages, &countries).unwrap()
    }

    #[test]
    fn test_tag_is_cached_with_hyphen() {
        let locales = registry();
        let japanese = locales.get("ja-JP", true).unwrap();
        assert_eq!(japanese.tag(), "ja-JP");
        assert_eq!(japanese.posix_name(), "ja_JP");
        assert_eq!(japanese.name(), "Japanese (Japan)");
        assert_eq!(japanese.country().map(|c| c.alpha2()), Some("JP"));
    }

    #[test]
    fn test_underscore_and_case() {
        let locales = registry();
        let expected = locales.get("ja-JP", true);
        assert_eq!(locales.get("ja_JP", true), expected);
        assert_eq!(locales.get("JA_jp", false), expected);
        assert!(locales.get("JA_jp", true).is_none());
    }

    #[test]
    fn test_language_only_and_legacy_language() {
        let locales = registry();
        let hebrew = locales.get("he", true).unwrap();
        assert!(hebrew.country().is_none());
        assert_eq!(locales.get("iw_IL", true).map(|l| l.tag()), Some("he-IL"));
        assert!(locales.get("", false).is_none());
        assert!(locales.get("ja-", false).is_none());
        assert!(locales.get("xx-YY", false).is_none());
    }

    #[test]
    fn test_by_language_and_country() {
        let languages = CodeRegistry::build(LANGUAGES).unwrap();
        let countries = CodeRegistry::build(COUNTRIES).unwrap();
        let locales = LocaleRegistry::build(LOCALES, &languages, &countries).unwrap();

        let german = languages.get("de").unwrap();
        let tags: Vec<_> = locales.by_language(german).iter().map(|l| l.tag()).collect();
        assert_eq!(tags, ["de", "de-AT", "de-CH", "de-DE", "de-LU"]);

        let switzerland = countries.get("CH").unwrap();
        let tags: Vec<_> = locales.by_country(switzerland).iter().map(|l| l.tag()).collect();
        assert_eq!(tags, ["de-CH", "fr-CH", "it-CH"]);

        assert!(locales.by_country(countries.get("AQ").unwrap()).is_empty());
    }

    #[test]
    fn test_undefined_locale() {
        let locales = registry();
        let undefined = locales.undefined().unwrap();
        assert_eq!(undefined.tag(), "undefined");
        assert!(locales.get("undefined", false).is_none());
    }

    #[test]
    fn test_dangling_country_rejected() {
        static BROKEN: &[LocaleEntry] = &[LocaleEntry::new("en", Some("QQ"))];
        let languages = CodeRegistry::build(LANGUAGES).unwrap();
        let countries = CodeRegistry::build(COUNTRIES).unwrap();
        let err = LocaleRegistry::build(BROKEN, &languages, &countries).unwrap_err();
        assert!(matches!(err, CodeError::DanglingReference { target: "country", .. }));
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        static REPEATED: &[LocaleEntry] = &[
            LocaleEntry::new("en", Some("US")),
            LocaleEntry::new("en", None),
            LocaleEntry::new("en", Some("US")),
        ];
        let languages = CodeRegistry::build(LANGUAGES).unwrap();
        let countries = CodeRegistry::build(COUNTRIES).unwrap();
        let err = LocaleRegistry::build(REPEATED, &languages, &countries).unwrap_err();
        match err {
            CodeError::Duplicate {
                domain,
                field,
                value,
            } => {
                assert_eq!(domain, "locale");
                assert_eq!(field, "tag");
                assert_eq!(value, "en-US");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
