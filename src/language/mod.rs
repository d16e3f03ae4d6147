// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 and ISO 639-2 language codes.
//!
//! Two tables, cross-referenced by key:
//!
//! * [`Language`]: two-letter ISO 639-1 codes. Each names its alpha-3
//!   counterpart; where ISO 639-2 has separate bibliographic and
//!   terminology codes (`ger`/`deu`) the terminology form is the canonical
//!   target. The withdrawn codes `iw`, `ji` and `in` resolve to `he`, `yi`
//!   and `id`.
//! * [`LanguageAlpha3`]: three-letter ISO 639-2 codes. The twenty
//!   bibliographic/terminology pairs point at each other through
//!   [`LanguageAlpha3::synonym_key`].
//!
//! Keys are resolved through the registries after both tables exist, so
//! entries may refer to rows declared later in either table.

mod alpha2_table;
mod alpha3_table;

use crate::normalize::{CaseConvention, Normalizer};
use crate::record::CodeRecord;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::hash::{Hash, Hasher};

pub(crate) use alpha2_table::LANGUAGES;
pub(crate) use alpha3_table::LANGUAGES_ALPHA3;

const ALPHA3_RULES: Normalizer =
    Normalizer::new(CaseConvention::Lower, &[3]).with_spellings(alpha3_table::SPELLINGS);

/// One ISO 639-1 entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Language {
    code: &'static str,
    alpha3: &'static str,
    name: &'static str,
}

impl Language {
    pub(crate) const fn new(code: &'static str, alpha3: &'static str, name: &'static str) -> Self {
        Self { code, alpha3, name }
    }

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Key of the canonical ISO 639-2 counterpart.
    pub fn alpha3_key(&self) -> &'static str {
        self.alpha3
    }
}

impl CodeRecord for Language {
    const DOMAIN: &'static str = "language";
    const KEY_RULES: Normalizer =
        Normalizer::new(CaseConvention::Lower, &[2]).with_aliases(alpha2_table::LEGACY);
    const ALTERNATE_RULES: Option<Normalizer> = Some(ALPHA3_RULES);

    fn key(&self) -> &'static str {
        self.code
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn alternate(&self) -> Option<&'static str> {
        (!self.is_undefined()).then_some(self.alpha3)
    }

    fn is_undefined(&self) -> bool {
        self.code == alpha2_table::UNDEFINED
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Language {}

impl Hash for Language {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

/// Which ISO 639-2 list a three-letter code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Usage {
    /// Same code in both lists.
    Common,
    /// ISO 639-2/B, derived from the English name (`ger`).
    Bibliographic,
    /// ISO 639-2/T, derived from the native name (`deu`).
    Terminology,
}

/// One ISO 639-2 entry.
#[derive(Debug, Clone, Copy)]
pub struct LanguageAlpha3 {
    key: &'static str,
    name: &'static str,
    alpha2: Option<&'static str>,
    synonym: Option<&'static str>,
    usage: Usage,
}

impl LanguageAlpha3 {
    pub(crate) const fn common(
        key: &'static str,
        name: &'static str,
        alpha2: Option<&'static str>,
    ) -> Self {
        Self {
            key,
            name,
            alpha2,
            synonym: None,
            usage: Usage::Common,
        }
    }

    pub(crate) const fn terminology(
        key: &'static str,
        name: &'static str,
        alpha2: &'static str,
        bibliographic: &'static str,
    ) -> Self {
        Self {
            key,
            name,
            alpha2: Some(alpha2),
            synonym: Some(bibliographic),
            usage: Usage::Terminology,
        }
    }

    pub(crate) const fn bibliographic(
        key: &'static str,
        name: &'static str,
        alpha2: &'static str,
        terminology: &'static str,
    ) -> Self {
        Self {
            key,
            name,
            alpha2: Some(alpha2),
            synonym: Some(terminology),
            usage: Usage::Bibliographic,
        }
    }

    /// The code as written outside this table (`new` for Newari).
    pub fn code(&self) -> &'static str {
        ALPHA3_RULES.external(self.key)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn usage(&self) -> Usage {
        self.usage
    }

    /// Key of the ISO 639-1 counterpart, if the language has one.
    pub fn alpha2_key(&self) -> Option<&'static str> {
        self.alpha2
    }

    /// Key of the other half of a bibliographic/terminology pair.
    pub fn synonym_key(&self) -> Option<&'static str> {
        self.synonym
    }

    /// ISO 639-2/B code for this language.
    pub fn alpha3_b(&self) -> &'static str {
        match (self.usage, self.synonym) {
            (Usage::Terminology, Some(bibliographic)) => bibliographic,
            _ => self.code(),
        }
    }

    /// ISO 639-2/T code for this language.
    pub fn alpha3_t(&self) -> &'static str {
        match (self.usage, self.synonym) {
            (Usage::Bibliographic, Some(terminology)) => terminology,
            _ => self.code(),
        }
    }

    /// Whether alpha-2 → alpha-3 mapping lands on this entry.
    pub fn is_canonical(&self) -> bool {
        self.usage != Usage::Bibliographic
    }
}

/// Written with the external code, so Newari serializes as `new`.
impl Serialize for LanguageAlpha3 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LanguageAlpha3", 5)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("alpha2", &self.alpha2)?;
        state.serialize_field("synonym", &self.synonym.map(|key| ALPHA3_RULES.external(key)))?;
        state.serialize_field("usage", &self.usage)?;
        state.end()
    }
}

impl CodeRecord for LanguageAlpha3 {
    const DOMAIN: &'static str = "language alpha-3";
    const KEY_RULES: Normalizer = ALPHA3_RULES;

    fn key(&self) -> &'static str {
        self.key
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn is_undefined(&self) -> bool {
        self.key == alpha3_table::UNDEFINED
    }
}

impl PartialEq for LanguageAlpha3 {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for LanguageAlpha3 {}

impl Hash for LanguageAlpha3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CodeRegistry;

    #[test]
    fn test_iso639_1_table_is_complete() {
        let standard = LANGUAGES.iter().filter(|l| !l.is_undefined()).count();
        assert_eq!(standard, 184);
    }

    #[test]
    fn test_legacy_aliases() {
        let languages = CodeRegistry::build(LANGUAGES).unwrap();
        let indonesian = languages.get("id").unwrap();
        assert_eq!(languages.get("in"), Some(indonesian));
        assert_eq!(languages.get("iw").map(|l| l.code()), Some("he"));
        assert_eq!(languages.lookup("JI", false).map(|l| l.code()), Some("yi"));
        assert!(languages.get("JI").is_none());
    }

    #[test]
    fn test_alpha3_alternate_is_terminology_form() {
        let languages = CodeRegistry::build(LANGUAGES).unwrap();
        assert_eq!(languages.lookup_alternate("deu", true).map(|l| l.code()), Some("de"));
        assert!(languages.lookup_alternate("ger", true).is_none());
    }

    #[test]
    fn test_bibliographic_and_terminology_forms() {
        let alpha3 = CodeRegistry::build(LANGUAGES_ALPHA3).unwrap();
        let ger = alpha3.get("ger").unwrap();
        let deu = alpha3.get("deu").unwrap();
        assert_eq!(ger.usage(), Usage::Bibliographic);
        assert_eq!(deu.usage(), Usage::Terminology);
        assert_eq!(ger.alpha3_t(), "deu");
        assert_eq!(deu.alpha3_b(), "ger");
        assert_eq!(ger.alpha3_b(), "ger");
        assert!(deu.is_canonical());
        assert!(!ger.is_canonical());

        let eng = alpha3.get("eng").unwrap();
        assert_eq!(eng.alpha3_b(), "eng");
        assert_eq!(eng.alpha3_t(), "eng");
    }

    #[test]
    fn test_newari_irregular_spelling() {
        let alpha3 = CodeRegistry::build(LANGUAGES_ALPHA3).unwrap();
        let newari = alpha3.get("new").unwrap();
        assert_eq!(newari.code(), "new");
        assert_eq!(newari.name(), "Nepal Bhasa");
        assert_eq!(alpha3.lookup("NEW", false), Some(newari));
        assert!(alpha3.get("new_").is_none());
    }

    #[test]
    fn test_serialized_code_uses_external_spelling() {
        let alpha3 = CodeRegistry::build(LANGUAGES_ALPHA3).unwrap();
        let json = serde_json::to_string(alpha3.get("new").unwrap()).unwrap();
        assert!(json.contains(r#""code":"new""#));
        assert!(!json.contains("new_"));

        let value = serde_json::to_value(alpha3.get("ger").unwrap()).unwrap();
        assert_eq!(value["code"], "ger");
        assert_eq!(value["alpha2"], "de");
        assert_eq!(value["synonym"], "deu");
        assert_eq!(value["usage"], "bibliographic");
    }
}
