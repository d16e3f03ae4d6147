// SPDX-License-Identifier: PMPL-1.0-or-later

//! Indexed, immutable registry over one code table.
//!
//! A [`CodeRegistry`] wraps a `static` slice of records and builds its
//! indices once, in a single pass, when it is constructed. Building fails if
//! the table repeats a key, an alternate code or a numeric code; after that
//! every query is a read over immutable maps and is safe to share between
//! threads.

use crate::error::{CodeError, Result};
use crate::record::CodeRecord;
use crate::search::NamePattern;
use std::collections::HashMap;

pub struct CodeRegistry<R: CodeRecord> {
    records: &'static [R],
    by_key: HashMap<&'static str, usize>,
    by_alternate: HashMap<&'static str, usize>,
    by_numeric: HashMap<i32, usize>,
    undefined: Option<usize>,
}

impl<R: CodeRecord> CodeRegistry<R> {
    /// Index `records`, rejecting tables that repeat a code.
    pub fn build(records: &'static [R]) -> Result<Self> {
        let mut by_key = HashMap::with_capacity(records.len());
        let mut by_alternate = HashMap::new();
        let mut by_numeric = HashMap::with_capacity(records.len());
        let mut undefined = None;

        for (index, record) in records.iter().enumerate() {
            if by_key.insert(record.key(), index).is_some() {
                return Err(duplicate::<R>("code", record.key()));
            }
            if let Some(alternate) = record.alternate() {
                if by_alternate.insert(alternate, index).is_some() {
                    return Err(duplicate::<R>("alternate code", alternate));
                }
            }
            if record.numeric() > 0 && by_numeric.insert(record.numeric(), index).is_some() {
                return Err(duplicate::<R>("numeric code", &record.numeric().to_string()));
            }
            if record.is_undefined() {
                if undefined.is_some() {
                    return Err(duplicate::<R>("undefined entry", record.key()));
                }
                undefined = Some(index);
            }
        }

        Ok(Self {
            records,
            by_key,
            by_alternate,
            by_numeric,
            undefined,
        })
    }

    /// Every record, in declaration order.
    pub fn all(&self) -> &'static [R] {
        self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'static, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Exact, case-sensitive lookup by canonical code.
    pub fn get(&self, key: &str) -> Option<&'static R> {
        self.lookup(key, true)
    }

    /// Lookup by canonical code.
    ///
    /// With `case_sensitive` unset the input is folded to the table's case
    /// before the same exact probe. Legacy aliases resolve in both modes.
    pub fn lookup(&self, code: &str, case_sensitive: bool) -> Option<&'static R> {
        let key = R::KEY_RULES.normalize(code, case_sensitive)?;
        self.by_key.get(key.as_ref()).map(|&index| self.record(index))
    }

    /// Lookup by the table's alternate alpha code.
    pub fn lookup_alternate(&self, code: &str, case_sensitive: bool) -> Option<&'static R> {
        let rules = R::ALTERNATE_RULES?;
        let key = rules.normalize(code, case_sensitive)?;
        self.by_alternate
            .get(key.as_ref())
            .map(|&index| self.record(index))
    }

    /// Lookup by numeric code. Zero and negative values never match.
    pub fn lookup_numeric(&self, numeric: i32) -> Option<&'static R> {
        if numeric <= 0 {
            return None;
        }
        self.by_numeric
            .get(&numeric)
            .map(|&index| self.record(index))
    }

    /// The table's non-standard "undefined" entry.
    pub fn undefined(&self) -> Option<&'static R> {
        self.undefined.map(|index| self.record(index))
    }

    /// Probe the key index with a stored key, skipping normalization.
    ///
    /// Cross-references hold table keys (`new_`, not `new`), so they are
    /// resolved through here rather than [`CodeRegistry::get`].
    pub(crate) fn by_key(&self, key: &str) -> Option<&'static R> {
        self.by_key.get(key).map(|&index| self.record(index))
    }

    fn record(&self, index: usize) -> &'static R {
        let records: &'static [R] = self.records;
        &records[index]
    }

    /// Records whose whole display name matches `pattern`.
    pub fn find_by_name(&self, pattern: &NamePattern) -> Vec<&'static R> {
        crate::search::find_by_name(self.records, pattern)
    }

    /// Compile `pattern` and search display names with it.
    ///
    /// A malformed pattern is an error; a pattern matching nothing yields an
    /// empty `Vec`.
    pub fn find_by_name_pattern(&self, pattern: &str) -> Result<Vec<&'static R>> {
        let pattern = NamePattern::new(pattern)?;
        Ok(self.find_by_name(&pattern))
    }
}

impl<R: CodeRecord + std::fmt::Debug> std::fmt::Debug for CodeRegistry<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeRegistry")
            .field("domain", &R::DOMAIN)
            .field("records", &self.records.len())
            .finish()
    }
}

fn duplicate<R: CodeRecord>(field: &'static str, value: &str) -> CodeError {
    CodeError::Duplicate {
        domain: R::DOMAIN,
        field,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{CaseConvention, Normalizer};

    #[derive(Debug)]
    struct Planet {
        code: &'static str,
        long: Option<&'static str>,
        number: i32,
        name: &'static str,
    }

    impl CodeRecord for Planet {
        const DOMAIN: &'static str = "planet";
        const KEY_RULES: Normalizer = Normalizer::new(CaseConvention::Upper, &[2]);
        const ALTERNATE_RULES: Option<Normalizer> =
            Some(Normalizer::new(CaseConvention::Upper, &[3]));

        fn key(&self) -> &'static str {
            self.code
        }
        fn name(&self) -> &'static str {
            self.name
        }
        fn alternate(&self) -> Option<&'static str> {
            self.long
        }
        fn numeric(&self) -> i32 {
            self.number
        }
        fn is_undefined(&self) -> bool {
            self.code == "UNDEFINED"
        }
    }

    const fn planet(
        code: &'static str,
        long: Option<&'static str>,
        number: i32,
        name: &'static str,
    ) -> Planet {
        Planet {
            code,
            long,
            number,
            name,
        }
    }

    static PLANETS: &[Planet] = &[
        planet("UNDEFINED", None, -1, "Undefined"),
        planet("ME", Some("MER"), 1, "Mercury"),
        planet("VE", Some("VEN"), 2, "Venus"),
        planet("EA", Some("EAR"), 3, "Earth"),
        planet("MA", None, -1, "Mars"),
    ];

    static DUPLICATE_KEYS: &[Planet] = &[
        planet("ME", None, 1, "Mercury"),
        planet("ME", None, 2, "Mercury again"),
    ];

    static DUPLICATE_ALTERNATES: &[Planet] = &[
        planet("ME", Some("MER"), 1, "Mercury"),
        planet("MR", Some("MER"), 2, "Mercury twin"),
    ];

    static DUPLICATE_NUMERICS: &[Planet] = &[
        planet("ME", None, 7, "Mercury"),
        planet("VE", None, 7, "Venus"),
    ];

    #[test]
    fn test_lookup_by_key() {
        let registry = CodeRegistry::build(PLANETS).unwrap();
        assert_eq!(registry.get("VE").map(|p| p.name), Some("Venus"));
        assert!(registry.get("ve").is_none());
        assert_eq!(registry.lookup("ve", false).map(|p| p.name), Some("Venus"));
    }

    #[test]
    fn test_lookup_alternate_and_numeric() {
        let registry = CodeRegistry::build(PLANETS).unwrap();
        assert_eq!(registry.lookup_alternate("ear", false).map(|p| p.code), Some("EA"));
        assert!(registry.lookup_alternate("ear", true).is_none());
        assert_eq!(registry.lookup_numeric(2).map(|p| p.code), Some("VE"));
        assert!(registry.lookup_numeric(0).is_none());
        assert!(registry.lookup_numeric(-1).is_none());
    }

    #[test]
    fn test_undefined_is_not_reachable_by_code() {
        let registry = CodeRegistry::build(PLANETS).unwrap();
        assert_eq!(registry.undefined().map(|p| p.name), Some("Undefined"));
        assert!(registry.get("UNDEFINED").is_none());
        assert!(registry.lookup("undefined", false).is_none());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let err = CodeRegistry::build(DUPLICATE_KEYS).unwrap_err();
        assert!(matches!(err, CodeError::Duplicate { field: "code", .. }));
    }

    #[test]
    fn test_duplicate_numeric_rejected() {
        let err = CodeRegistry::build(DUPLICATE_NUMERICS).unwrap_err();
        assert!(matches!(
            err,
            CodeError::Duplicate {
                field: "numeric code",
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_alternate_rejected() {
        let err = CodeRegistry::build(DUPLICATE_ALTERNATES).unwrap_err();
        match err {
            CodeError::Duplicate {
                domain,
                field,
                value,
            } => {
                assert_eq!(domain, "planet");
                assert_eq!(field, "alternate code");
                assert_eq!(value, "MER");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_all_preserves_declaration_order() {
        let registry = CodeRegistry::build(PLANETS).unwrap();
        let codes: Vec<_> = registry.all().iter().map(|p| p.code).collect();
        assert_eq!(codes, ["UNDEFINED", "ME", "VE", "EA", "MA"]);
        assert_eq!(registry.all().len(), registry.len());
    }

    #[test]
    fn test_name_pattern_search() {
        let registry = CodeRegistry::build(PLANETS).unwrap();
        let hits = registry.find_by_name_pattern("M.*").unwrap();
        let codes: Vec<_> = hits.iter().map(|p| p.code).collect();
        assert_eq!(codes, ["ME", "MA"]);
        assert!(registry.find_by_name_pattern("Pluto").unwrap().is_empty());
        assert!(registry.find_by_name_pattern("(").is_err());
    }
}
