// SPDX-License-Identifier: PMPL-1.0-or-later

//! The full set of code tables and the relations between them.
//!
//! [`Catalog::build`] constructs every registry from the literal tables,
//! then resolves and validates the cross-references in a second pass. Most
//! callers use the lazily built [`Catalog::standard`]; tests and
//! applications that want an isolated user-assigned namespace build their
//! own.

use crate::assigned::{ResolvedCountry, UserAssignedCountry, UserAssignedRegistry};
use crate::country::{Country, COUNTRIES};
use crate::currency::{Currency, CURRENCIES};
use crate::error::{CodeError, Result};
use crate::language::{Language, LanguageAlpha3, LANGUAGES, LANGUAGES_ALPHA3};
use crate::locale::{LocaleRegistry, LOCALES};
use crate::record::CodeRecord;
use crate::registry::CodeRegistry;
use crate::relation::RelationIndex;
use crate::script::{Script, SCRIPTS};
use once_cell::sync::Lazy;
use std::sync::Arc;

static STANDARD: Lazy<Catalog> = Lazy::new(|| match Catalog::build() {
    Ok(catalog) => catalog,
    Err(err) => panic!("built-in code tables are inconsistent: {err}"),
});

pub struct Catalog {
    countries: CodeRegistry<Country>,
    currencies: CodeRegistry<Currency>,
    languages: CodeRegistry<Language>,
    language_alpha3: CodeRegistry<LanguageAlpha3>,
    scripts: CodeRegistry<Script>,
    locales: LocaleRegistry,
    currency_countries: RelationIndex<Currency, Country>,
    user_assigned: UserAssignedRegistry,
}

impl Catalog {
    /// The process-wide catalog, built on first use.
    ///
    /// # Panics
    ///
    /// If the built-in tables fail validation.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Build every registry and validate the links between them.
    pub fn build() -> Result<Self> {
        let countries = CodeRegistry::build(COUNTRIES)?;
        let currencies = CodeRegistry::build(CURRENCIES)?;
        let languages = CodeRegistry::build(LANGUAGES)?;
        let language_alpha3 = CodeRegistry::build(LANGUAGES_ALPHA3)?;
        let scripts = CodeRegistry::build(SCRIPTS)?;

        let currency_countries =
            RelationIndex::build(&currencies, &countries, Currency::country_keys)?;
        let locales = LocaleRegistry::build(LOCALES, &languages, &countries)?;
        validate_languages(&languages, &language_alpha3)?;

        log::debug!(
            "built code catalog: {} countries, {} currencies ({} countries with a currency), \
             {} languages, {} alpha-3 languages, {} scripts, {} locales",
            countries.len(),
            currencies.len(),
            currency_countries.target_count(),
            languages.len(),
            language_alpha3.len(),
            scripts.len(),
            locales.len(),
        );

        Ok(Self {
            countries,
            currencies,
            languages,
            language_alpha3,
            scripts,
            locales,
            currency_countries,
            user_assigned: UserAssignedRegistry::new(),
        })
    }

    pub fn countries(&self) -> &CodeRegistry<Country> {
        &self.countries
    }

    pub fn currencies(&self) -> &CodeRegistry<Currency> {
        &self.currencies
    }

    pub fn languages(&self) -> &CodeRegistry<Language> {
        &self.languages
    }

    pub fn language_alpha3(&self) -> &CodeRegistry<LanguageAlpha3> {
        &self.language_alpha3
    }

    pub fn scripts(&self) -> &CodeRegistry<Script> {
        &self.scripts
    }

    pub fn locales(&self) -> &LocaleRegistry {
        &self.locales
    }

    pub fn user_assigned(&self) -> &UserAssignedRegistry {
        &self.user_assigned
    }

    /// Currencies used in the country with alpha-2 key `alpha2`.
    pub fn currencies_by_country(&self, alpha2: Option<&str>) -> Vec<&'static Currency> {
        self.currency_countries.related_to(alpha2)
    }

    /// Currencies used in `country`.
    pub fn currencies_of(&self, country: &Country) -> Vec<&'static Currency> {
        self.currency_countries.related_to(Some(country.alpha2()))
    }

    /// Countries using `currency`, in the order the currency lists them.
    pub fn countries_of(&self, currency: &Currency) -> Vec<&'static Country> {
        self.currency_countries.targets_of(currency)
    }

    /// Canonical (terminology) alpha-3 entry of `language`.
    pub fn language_alpha3_of(&self, language: &Language) -> Option<&'static LanguageAlpha3> {
        if language.is_undefined() {
            return self.language_alpha3.undefined();
        }
        self.language_alpha3.by_key(language.alpha3_key())
    }

    /// Alpha-2 counterpart of `language`, if it has one.
    pub fn alpha2_of(&self, language: &LanguageAlpha3) -> Option<&'static Language> {
        self.languages.by_key(language.alpha2_key()?)
    }

    /// Other half of a bibliographic/terminology pair.
    pub fn synonym_of(&self, language: &LanguageAlpha3) -> Option<&'static LanguageAlpha3> {
        self.language_alpha3.by_key(language.synonym_key()?)
    }

    /// Language by two- or three-letter code; alpha-3 codes map onto their
    /// alpha-2 counterpart.
    pub fn language_by_code(&self, code: &str, case_sensitive: bool) -> Option<&'static Language> {
        match code.len() {
            2 => self.languages.lookup(code, case_sensitive),
            3 => {
                let alpha3 = self.language_alpha3.lookup(code, case_sensitive)?;
                self.alpha2_of(alpha3)
            }
            _ => None,
        }
    }

    /// ISO 639-2 entry by two- or three-letter code; alpha-2 codes map onto
    /// their terminology counterpart.
    pub fn language_alpha3_by_code(
        &self,
        code: &str,
        case_sensitive: bool,
    ) -> Option<&'static LanguageAlpha3> {
        match code.len() {
            2 => {
                let language = self.languages.lookup(code, case_sensitive)?;
                self.language_alpha3_of(language)
            }
            3 => self.language_alpha3.lookup(code, case_sensitive),
            _ => None,
        }
    }

    /// Standard country by alpha-2, alpha-3 or three-digit numeric code.
    pub fn country_by_code(&self, code: &str, case_sensitive: bool) -> Option<&'static Country> {
        match code.len() {
            2 => self.countries.lookup(code, case_sensitive),
            3 if code.bytes().all(|b| b.is_ascii_digit()) => {
                self.countries.lookup_numeric(code.parse().ok()?)
            }
            3 => self.countries.lookup_alternate(code, case_sensitive),
            _ => None,
        }
    }

    /// Country by any code, falling back to user-assigned registrations.
    pub fn resolve_country(&self, code: &str, case_sensitive: bool) -> Option<ResolvedCountry> {
        if let Some(country) = self.country_by_code(code, case_sensitive) {
            return Some(ResolvedCountry::Standard(country));
        }
        let user_assigned = match code.len() {
            2 => self.user_assigned.get_alpha2(code, case_sensitive),
            3 if code.bytes().all(|b| b.is_ascii_digit()) => {
                self.user_assigned.get_numeric(code.parse().ok()?)
            }
            3 => self.user_assigned.get_alpha3(code, case_sensitive),
            _ => None,
        };
        user_assigned.map(ResolvedCountry::UserAssigned)
    }

    pub fn resolve_country_numeric(&self, numeric: i32) -> Option<ResolvedCountry> {
        match self.countries.lookup_numeric(numeric) {
            Some(country) => Some(ResolvedCountry::Standard(country)),
            None => self
                .user_assigned
                .get_numeric(numeric)
                .map(ResolvedCountry::UserAssigned),
        }
    }

    /// Register a user-assigned country with this catalog.
    pub fn register_country(
        &self,
        country: UserAssignedCountry,
    ) -> Result<Arc<UserAssignedCountry>> {
        self.user_assigned.register(country, &self.countries)
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("countries", &self.countries.len())
            .field("currencies", &self.currencies.len())
            .field("languages", &self.languages.len())
            .field("language_alpha3", &self.language_alpha3.len())
            .field("scripts", &self.scripts.len())
            .field("locales", &self.locales.len())
            .field("user_assigned", &self.user_assigned.len())
            .finish()
    }
}

/// Check the alpha-2/alpha-3 links and bibliographic/terminology pairs.
fn validate_languages(
    languages: &CodeRegistry<Language>,
    alpha3: &CodeRegistry<LanguageAlpha3>,
) -> Result<()> {
    for language in languages.iter().filter(|l| !l.is_undefined()) {
        let target = alpha3
            .by_key(language.alpha3_key())
            .filter(|target| target.is_canonical());
        if target.and_then(LanguageAlpha3::alpha2_key) != Some(language.code()) {
            return Err(CodeError::DanglingReference {
                domain: Language::DOMAIN,
                key: language.code().to_string(),
                target: LanguageAlpha3::DOMAIN,
                related: language.alpha3_key().to_string(),
            });
        }
    }

    for entry in alpha3.iter().filter(|l| !l.is_undefined()) {
        if let Some(key) = entry.alpha2_key() {
            if languages.by_key(key).is_none() {
                return Err(CodeError::DanglingReference {
                    domain: LanguageAlpha3::DOMAIN,
                    key: entry.key().to_string(),
                    target: Language::DOMAIN,
                    related: key.to_string(),
                });
            }
        }
        if let Some(synonym) = entry.synonym_key() {
            let points_back = alpha3
                .by_key(synonym)
                .and_then(LanguageAlpha3::synonym_key)
                == Some(entry.key());
            if !points_back {
                return Err(CodeError::BrokenSynonym {
                    key: entry.key().to_string(),
                    synonym: synonym.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_succeeds() {
        let catalog = Catalog::build().unwrap();
        assert!(catalog.countries().len() > 249);
        assert_eq!(catalog.locales().len(), 152);
        assert!(catalog.user_assigned().is_empty());
    }

    #[test]
    fn test_language_links() {
        let catalog = Catalog::standard();
        let german = catalog.languages().get("de").unwrap();
        let deu = catalog.language_alpha3_of(german).unwrap();
        assert_eq!(deu.code(), "deu");
        assert_eq!(catalog.alpha2_of(deu), Some(german));

        let ger = catalog.synonym_of(deu).unwrap();
        assert_eq!(ger.code(), "ger");
        assert_eq!(catalog.alpha2_of(ger), Some(german));
        assert_eq!(catalog.synonym_of(ger), Some(deu));

        let newari = catalog.language_alpha3().get("new").unwrap();
        assert!(catalog.alpha2_of(newari).is_none());
        assert!(catalog.synonym_of(newari).is_none());
    }

    #[test]
    fn test_undefined_languages_are_linked() {
        let catalog = Catalog::standard();
        let undefined = catalog.languages().undefined().unwrap();
        assert_eq!(
            catalog.language_alpha3_of(undefined),
            catalog.language_alpha3().undefined()
        );
    }

    #[test]
    fn test_language_by_code_dispatch() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.language_by_code("fr", true).map(|l| l.code()), Some("fr"));
        assert_eq!(catalog.language_by_code("fre", true).map(|l| l.code()), Some("fr"));
        assert_eq!(catalog.language_by_code("FRA", false).map(|l| l.code()), Some("fr"));
        assert!(catalog.language_by_code("ast", true).is_none());
        assert!(catalog.language_by_code("f", true).is_none());
    }

    #[test]
    fn test_language_alpha3_by_code_dispatch() {
        let catalog = Catalog::standard();
        let code = |input, case_sensitive| {
            catalog
                .language_alpha3_by_code(input, case_sensitive)
                .map(|l| l.code())
        };
        assert_eq!(code("de", true), Some("deu"));
        assert_eq!(code("IW", false), Some("heb"));
        assert_eq!(code("ger", true), Some("ger"));
        assert_eq!(code("DEU", false), Some("deu"));
        assert_eq!(code("new", true), Some("new"));
        assert_eq!(code("ast", true), Some("ast"));
        assert!(code("DE", true).is_none());
        assert!(code("new_", true).is_none());
        assert!(code("d", false).is_none());
    }

    static GERMAN: &[Language] = &[Language::new("de", "deu", "German")];

    #[test]
    fn test_broken_synonym_rejected() {
        static ALPHA3: &[LanguageAlpha3] = &[
            LanguageAlpha3::terminology("deu", "German", "de", "ger"),
            LanguageAlpha3::bibliographic("ger", "German", "de", "dut"),
            LanguageAlpha3::common("dut", "Dutch", None),
        ];
        let languages = CodeRegistry::build(GERMAN).unwrap();
        let alpha3 = CodeRegistry::build(ALPHA3).unwrap();
        match validate_languages(&languages, &alpha3).unwrap_err() {
            CodeError::BrokenSynonym { key, synonym } => {
                assert_eq!(key, "deu");
                assert_eq!(synonym, "ger");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_alpha2_without_canonical_alpha3_rejected() {
        static BIBLIOGRAPHIC_ONLY: &[LanguageAlpha3] =
            &[LanguageAlpha3::bibliographic("deu", "German", "de", "ger")];
        let languages = CodeRegistry::build(GERMAN).unwrap();

        let missing = CodeRegistry::<LanguageAlpha3>::build(&[]).unwrap();
        let wrong_usage = CodeRegistry::build(BIBLIOGRAPHIC_ONLY).unwrap();
        for alpha3 in [missing, wrong_usage] {
            match validate_languages(&languages, &alpha3).unwrap_err() {
                CodeError::DanglingReference {
                    domain,
                    key,
                    target,
                    related,
                } => {
                    assert_eq!(domain, Language::DOMAIN);
                    assert_eq!(key, "de");
                    assert_eq!(target, LanguageAlpha3::DOMAIN);
                    assert_eq!(related, "deu");
                }
                other => panic!("unexpected error {other:?}"),
            }
        }
    }

    #[test]
    fn test_alpha3_with_unknown_alpha2_rejected() {
        static ALPHA3: &[LanguageAlpha3] = &[
            LanguageAlpha3::terminology("deu", "German", "de", "ger"),
            LanguageAlpha3::bibliographic("ger", "German", "de", "deu"),
            LanguageAlpha3::common("fra", "French", Some("fr")),
        ];
        let languages = CodeRegistry::build(GERMAN).unwrap();
        let alpha3 = CodeRegistry::build(ALPHA3).unwrap();
        match validate_languages(&languages, &alpha3).unwrap_err() {
            CodeError::DanglingReference {
                domain,
                key,
                target,
                related,
            } => {
                assert_eq!(domain, LanguageAlpha3::DOMAIN);
                assert_eq!(key, "fra");
                assert_eq!(target, Language::DOMAIN);
                assert_eq!(related, "fr");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_consistent_language_tables_pass() {
        static ALPHA3: &[LanguageAlpha3] = &[
            LanguageAlpha3::terminology("deu", "German", "de", "ger"),
            LanguageAlpha3::bibliographic("ger", "German", "de", "deu"),
            LanguageAlpha3::common("new_", "Nepal Bhasa", None),
        ];
        let languages = CodeRegistry::build(GERMAN).unwrap();
        let alpha3 = CodeRegistry::build(ALPHA3).unwrap();
        assert!(validate_languages(&languages, &alpha3).is_ok());
    }

    #[test]
    fn test_country_by_code_dispatch() {
        let catalog = Catalog::standard();
        let japan = catalog.countries().get("JP");
        assert_eq!(catalog.country_by_code("JP", true), japan);
        assert_eq!(catalog.country_by_code("jpn", false), japan);
        assert_eq!(catalog.country_by_code("392", true), japan);
        assert!(catalog.country_by_code("999", true).is_none());
        assert!(catalog.country_by_code("Japan", false).is_none());
    }

    #[test]
    fn test_currency_relation() {
        let catalog = Catalog::standard();
        let swiss: Vec<_> = catalog
            .currencies_by_country(Some("CH"))
            .iter()
            .map(|c| c.code())
            .collect();
        assert_eq!(swiss, ["CHE", "CHF", "CHW"]);
        assert!(catalog.currencies_by_country(None).is_empty());

        let franc = catalog.currencies().get("CHF").unwrap();
        let users: Vec<_> = catalog.countries_of(franc).iter().map(|c| c.alpha2()).collect();
        assert_eq!(users, ["CH", "LI"]);
    }

    #[test]
    fn test_user_assigned_fallback() {
        let catalog = Catalog::build().unwrap();
        assert!(catalog.resolve_country("XZ", true).is_none());

        catalog
            .register_country(
                UserAssignedCountry::new("XZ", "Test Zone")
                    .with_alpha3("XZZ")
                    .with_numeric(999),
            )
            .unwrap();

        let by_alpha2 = catalog.resolve_country("xz", false).unwrap();
        assert!(by_alpha2.is_user_assigned());
        assert_eq!(by_alpha2.name(), "Test Zone");
        assert_eq!(catalog.resolve_country("XZZ", true), Some(by_alpha2.clone()));
        assert_eq!(catalog.resolve_country("999", true), Some(by_alpha2.clone()));
        assert_eq!(catalog.resolve_country_numeric(999), Some(by_alpha2));

        let japan = catalog.resolve_country_numeric(392).unwrap();
        assert!(!japan.is_user_assigned());

        // registrations are per catalog
        assert!(Catalog::build().unwrap().resolve_country("XZ", true).is_none());
    }
}
