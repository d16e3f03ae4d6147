// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 3166-1 country codes.
//!
//! The table carries every officially assigned code plus the exceptionally
//! and transitionally reserved codes still seen in the wild (`UK`, `EU`,
//! `SU`, `YU`, ...), and Kosovo under its widely used user-assigned `XK`.
//! Reserved codes that once shared a numeric code with a current country
//! carry `-1` so the numeric index stays unambiguous.

mod table;

use crate::normalize::{CaseConvention, Normalizer};
use crate::record::CodeRecord;
use serde::Serialize;
use std::hash::{Hash, Hasher};

pub(crate) use table::COUNTRIES;

/// Assignment status of a code within ISO 3166-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Assignment {
    OfficiallyAssigned,
    UserAssigned,
    ExceptionallyReserved,
    TransitionallyReserved,
    IndeterminatelyReserved,
    NotUsed,
}

impl Assignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Assignment::OfficiallyAssigned => "officially assigned",
            Assignment::UserAssigned => "user assigned",
            Assignment::ExceptionallyReserved => "exceptionally reserved",
            Assignment::TransitionallyReserved => "transitionally reserved",
            Assignment::IndeterminatelyReserved => "indeterminately reserved",
            Assignment::NotUsed => "not used",
        }
    }
}

/// One ISO 3166-1 entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Country {
    alpha2: &'static str,
    alpha3: Option<&'static str>,
    numeric: i32,
    name: &'static str,
    assignment: Assignment,
}

impl Country {
    pub(crate) const fn official(
        alpha2: &'static str,
        alpha3: &'static str,
        numeric: i32,
        name: &'static str,
    ) -> Self {
        Self {
            alpha2,
            alpha3: Some(alpha3),
            numeric,
            name,
            assignment: Assignment::OfficiallyAssigned,
        }
    }

    pub(crate) const fn reserved(
        alpha2: &'static str,
        alpha3: Option<&'static str>,
        numeric: i32,
        name: &'static str,
        assignment: Assignment,
    ) -> Self {
        Self {
            alpha2,
            alpha3,
            numeric,
            name,
            assignment,
        }
    }

    pub fn alpha2(&self) -> &'static str {
        self.alpha2
    }

    pub fn alpha3(&self) -> Option<&'static str> {
        self.alpha3
    }

    /// ISO 3166-1 numeric code, or `-1`.
    pub fn numeric(&self) -> i32 {
        self.numeric
    }

    /// Numeric code zero-padded to three digits, as printed in the standard.
    pub fn numeric_code(&self) -> Option<String> {
        (self.numeric > 0).then(|| format!("{:03}", self.numeric))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn assignment(&self) -> Assignment {
        self.assignment
    }

    pub fn is_officially_assigned(&self) -> bool {
        self.assignment == Assignment::OfficiallyAssigned
    }
}

impl CodeRecord for Country {
    const DOMAIN: &'static str = "country";
    const KEY_RULES: Normalizer = Normalizer::new(CaseConvention::Upper, &[2]);
    const ALTERNATE_RULES: Option<Normalizer> =
        Some(Normalizer::new(CaseConvention::Upper, &[3]));

    fn key(&self) -> &'static str {
        self.alpha2
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn alternate(&self) -> Option<&'static str> {
        self.alpha3
    }

    fn numeric(&self) -> i32 {
        self.numeric
    }

    fn is_undefined(&self) -> bool {
        self.alpha2 == table::UNDEFINED
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.alpha2 == other.alpha2
    }
}

impl Eq for Country {}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alpha2.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CodeRegistry;

    #[test]
    fn test_japan() {
        let countries = CodeRegistry::build(COUNTRIES).unwrap();
        let japan = countries.get("JP").unwrap();
        assert_eq!(japan.name(), "Japan");
        assert_eq!(japan.alpha3(), Some("JPN"));
        assert_eq!(japan.numeric(), 392);
        assert_eq!(japan.numeric_code().as_deref(), Some("392"));
        assert!(japan.is_officially_assigned());
    }

    #[test]
    fn test_numeric_code_padding() {
        let countries = CodeRegistry::build(COUNTRIES).unwrap();
        let afghanistan = countries.lookup_numeric(4).unwrap();
        assert_eq!(afghanistan.alpha2(), "AF");
        assert_eq!(afghanistan.numeric_code().as_deref(), Some("004"));
        assert_eq!(countries.get("EU").unwrap().numeric_code(), None);
    }

    #[test]
    fn test_alpha3_lookup() {
        let countries = CodeRegistry::build(COUNTRIES).unwrap();
        assert_eq!(countries.lookup_alternate("deu", false).map(|c| c.alpha2()), Some("DE"));
        assert!(countries.lookup_alternate("deu", true).is_none());
        assert!(countries.lookup_alternate("DE", false).is_none());
    }

    #[test]
    fn test_officially_assigned_count() {
        let official = COUNTRIES
            .iter()
            .filter(|c| c.is_officially_assigned())
            .count();
        assert_eq!(official, 249);
    }

    #[test]
    fn test_reserved_codes() {
        let countries = CodeRegistry::build(COUNTRIES).unwrap();
        let uk = countries.get("UK").unwrap();
        assert_eq!(uk.assignment(), Assignment::ExceptionallyReserved);
        assert_eq!(
            countries.get("XK").map(|c| c.assignment()),
            Some(Assignment::UserAssigned)
        );
        assert_eq!(countries.undefined().map(|c| c.name()), Some("Undefined"));
    }

    #[test]
    fn test_identity_is_alpha2() {
        let countries = CodeRegistry::build(COUNTRIES).unwrap();
        let a = countries.get("FR").unwrap();
        let b = countries.lookup_numeric(250).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, countries.get("FX").unwrap());
    }
}
