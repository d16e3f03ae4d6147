// SPDX-License-Identifier: PMPL-1.0-or-later

//! User-assigned country codes.
//!
//! ISO 3166-1 sets aside `AA`, `QM`–`QZ`, `XA`–`XZ` and `ZZ` (with matching
//! alpha-3 and numeric 900–999 ranges) for private use. Applications that
//! need such codes register them here at startup. The standard country table
//! always wins; registrations are only consulted when it has no match.

use crate::country::Country;
use crate::error::{CodeError, Result};
use crate::record::CodeRecord;
use crate::registry::CodeRegistry;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// A country code defined by the application rather than by ISO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAssignedCountry {
    alpha2: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alpha3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    numeric: Option<i32>,
    name: String,
}

impl UserAssignedCountry {
    pub fn new(alpha2: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            alpha2: alpha2.into(),
            alpha3: None,
            numeric: None,
            name: name.into(),
        }
    }

    pub fn with_alpha3(mut self, alpha3: impl Into<String>) -> Self {
        self.alpha3 = Some(alpha3.into());
        self
    }

    pub fn with_numeric(mut self, numeric: i32) -> Self {
        self.numeric = Some(numeric);
        self
    }

    pub fn alpha2(&self) -> &str {
        &self.alpha2
    }

    pub fn alpha3(&self) -> Option<&str> {
        self.alpha3.as_deref()
    }

    /// Numeric code, or `-1`.
    pub fn numeric(&self) -> i32 {
        self.numeric.unwrap_or(-1)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fold codes to upper case and check them against the reserved ranges.
    fn validated(mut self) -> Result<Self> {
        self.alpha2.make_ascii_uppercase();
        if !is_user_alpha2(&self.alpha2) {
            return Err(CodeError::NotUserAssignable { code: self.alpha2 });
        }
        if let Some(alpha3) = self.alpha3.as_mut() {
            alpha3.make_ascii_uppercase();
            if !is_user_alpha3(alpha3) {
                return Err(CodeError::NotUserAssignable {
                    code: alpha3.clone(),
                });
            }
        }
        if let Some(numeric) = self.numeric {
            if !is_user_numeric(numeric) {
                return Err(CodeError::NotUserAssignable {
                    code: format!("{numeric:03}"),
                });
            }
        }
        Ok(self)
    }
}

fn is_upper_alpha(code: &str, len: usize) -> bool {
    code.len() == len && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// `AA`, `QM`–`QZ`, `XA`–`XZ`, `ZZ`
pub fn is_user_alpha2(code: &str) -> bool {
    if !is_upper_alpha(code, 2) {
        return false;
    }
    let bytes = code.as_bytes();
    match bytes[0] {
        b'A' => bytes[1] == b'A',
        b'Q' => bytes[1] >= b'M',
        b'X' => true,
        b'Z' => bytes[1] == b'Z',
        _ => false,
    }
}

/// `AAA`–`AAZ`, `QMA`–`QZZ`, `XAA`–`XZZ`, `ZZA`–`ZZZ`
pub fn is_user_alpha3(code: &str) -> bool {
    is_upper_alpha(code, 3) && is_user_alpha2(&code[..2])
}

pub fn is_user_numeric(numeric: i32) -> bool {
    (900..=999).contains(&numeric)
}

#[derive(Default)]
struct Assigned {
    entries: Vec<Arc<UserAssignedCountry>>,
    by_alpha2: HashMap<String, usize>,
    by_alpha3: HashMap<String, usize>,
    by_numeric: HashMap<i32, usize>,
}

impl Assigned {
    fn taken(&self, country: &UserAssignedCountry) -> Option<String> {
        if self.by_alpha2.contains_key(&country.alpha2) {
            return Some(country.alpha2.clone());
        }
        if let Some(alpha3) = &country.alpha3 {
            if self.by_alpha3.contains_key(alpha3) {
                return Some(alpha3.clone());
            }
        }
        match country.numeric {
            Some(numeric) if self.by_numeric.contains_key(&numeric) => {
                Some(format!("{numeric:03}"))
            }
            _ => None,
        }
    }
}

/// Process-wide registrations of user-assigned countries.
///
/// Registration is additive; there is no way to remove or replace an entry.
/// Reads and registrations may interleave from any thread.
#[derive(Default)]
pub struct UserAssignedRegistry {
    state: RwLock<Assigned>,
}

impl UserAssignedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `country`, rejecting codes outside the user-assigned ranges and
    /// codes already held by `standard` or an earlier registration.
    pub fn register(
        &self,
        country: UserAssignedCountry,
        standard: &CodeRegistry<Country>,
    ) -> Result<Arc<UserAssignedCountry>> {
        let country = country.validated()?;

        if standard.get(&country.alpha2).is_some() {
            return Err(CodeError::AlreadyAssigned {
                code: country.alpha2,
            });
        }
        if let Some(alpha3) = &country.alpha3 {
            if standard.lookup_alternate(alpha3, true).is_some() {
                return Err(CodeError::AlreadyAssigned {
                    code: alpha3.clone(),
                });
            }
        }
        if standard.lookup_numeric(country.numeric()).is_some() {
            return Err(CodeError::AlreadyAssigned {
                code: format!("{:03}", country.numeric()),
            });
        }

        let mut state = self.state.write();
        if let Some(code) = state.taken(&country) {
            return Err(CodeError::AlreadyAssigned { code });
        }

        let position = state.entries.len();
        state.by_alpha2.insert(country.alpha2.clone(), position);
        if let Some(alpha3) = &country.alpha3 {
            state.by_alpha3.insert(alpha3.clone(), position);
        }
        if let Some(numeric) = country.numeric {
            state.by_numeric.insert(numeric, position);
        }
        let country = Arc::new(country);
        state.entries.push(Arc::clone(&country));
        Ok(country)
    }

    pub fn get_alpha2(&self, code: &str, case_sensitive: bool) -> Option<Arc<UserAssignedCountry>> {
        let key = Country::KEY_RULES.normalize(code, case_sensitive)?;
        let state = self.state.read();
        state
            .by_alpha2
            .get(key.as_ref())
            .map(|&position| Arc::clone(&state.entries[position]))
    }

    pub fn get_alpha3(&self, code: &str, case_sensitive: bool) -> Option<Arc<UserAssignedCountry>> {
        let key = Country::ALTERNATE_RULES?.normalize(code, case_sensitive)?;
        let state = self.state.read();
        state
            .by_alpha3
            .get(key.as_ref())
            .map(|&position| Arc::clone(&state.entries[position]))
    }

    pub fn get_numeric(&self, numeric: i32) -> Option<Arc<UserAssignedCountry>> {
        let state = self.state.read();
        state
            .by_numeric
            .get(&numeric)
            .map(|&position| Arc::clone(&state.entries[position]))
    }

    /// Every registration, in registration order.
    pub fn all(&self) -> Vec<Arc<UserAssignedCountry>> {
        self.state.read().entries.clone()
    }

    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for UserAssignedRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAssignedRegistry")
            .field("entries", &self.len())
            .finish()
    }
}

/// A country from either the standard table or the user-assigned registry.
#[derive(Debug, Clone)]
pub enum ResolvedCountry {
    Standard(&'static Country),
    UserAssigned(Arc<UserAssignedCountry>),
}

impl ResolvedCountry {
    /// Build from optional halves; exactly one must be present.
    pub fn from_parts(
        standard: Option<&'static Country>,
        user_assigned: Option<Arc<UserAssignedCountry>>,
    ) -> Result<Self> {
        match (standard, user_assigned) {
            (Some(country), None) => Ok(Self::Standard(country)),
            (None, Some(country)) => Ok(Self::UserAssigned(country)),
            _ => Err(CodeError::AmbiguousResolution),
        }
    }

    pub fn alpha2(&self) -> &str {
        match self {
            Self::Standard(country) => country.alpha2(),
            Self::UserAssigned(country) => country.alpha2(),
        }
    }

    pub fn alpha3(&self) -> Option<&str> {
        match self {
            Self::Standard(country) => country.alpha3(),
            Self::UserAssigned(country) => country.alpha3(),
        }
    }

    pub fn numeric(&self) -> i32 {
        match self {
            Self::Standard(country) => country.numeric(),
            Self::UserAssigned(country) => country.numeric(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Standard(country) => country.name(),
            Self::UserAssigned(country) => country.name(),
        }
    }

    pub fn is_user_assigned(&self) -> bool {
        matches!(self, Self::UserAssigned(_))
    }

    pub fn standard(&self) -> Option<&'static Country> {
        match self {
            Self::Standard(country) => Some(*country),
            Self::UserAssigned(_) => None,
        }
    }

    pub fn user_assigned(&self) -> Option<&UserAssignedCountry> {
        match self {
            Self::Standard(_) => None,
            Self::UserAssigned(country) => Some(country.as_ref()),
        }
    }
}

impl PartialEq for ResolvedCountry {
    fn eq(&self, other: &Self) -> bool {
        self.alpha2() == other.alpha2()
    }
}

impl Eq for ResolvedCountry {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::country::COUNTRIES;

    fn countries() -> CodeRegistry<Country> {
        CodeRegistry::build(COUNTRIES).unwrap()
    }

    #[test]
    fn test_user_assigned_ranges() {
        for code in ["AA", "QM", "QZ", "XA", "XZ", "ZZ"] {
            assert!(is_user_alpha2(code), "{code}");
        }
        for code in ["AB", "QL", "ZY", "xa", "X", "XAA"] {
            assert!(!is_user_alpha2(code), "{code}");
        }
        assert!(is_user_alpha3("AAZ"));
        assert!(is_user_alpha3("QMA"));
        assert!(is_user_alpha3("ZZZ"));
        assert!(!is_user_alpha3("ABA"));
        assert!(!is_user_alpha3("ZYZ"));
        assert!(is_user_numeric(900));
        assert!(is_user_numeric(999));
        assert!(!is_user_numeric(899));
    }

    #[test]
    fn test_register_and_lookup() {
        let countries = countries();
        let registry = UserAssignedRegistry::new();
        let atlantis = UserAssignedCountry::new("xa", "Atlantis")
            .with_alpha3("xat")
            .with_numeric(901);
        let stored = registry.register(atlantis, &countries).unwrap();
        assert_eq!(stored.alpha2(), "XA");
        assert_eq!(stored.alpha3(), Some("XAT"));

        assert_eq!(registry.get_alpha2("XA", true).as_deref(), Some(&*stored));
        assert!(registry.get_alpha2("xa", true).is_none());
        assert!(registry.get_alpha2("xa", false).is_some());
        assert!(registry.get_alpha3("xat", false).is_some());
        assert_eq!(registry.get_numeric(901).map(|c| c.numeric()), Some(901));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let countries = countries();
        let registry = UserAssignedRegistry::new();
        let err = registry
            .register(UserAssignedCountry::new("AB", "Nowhere"), &countries)
            .unwrap_err();
        assert!(matches!(err, CodeError::NotUserAssignable { .. }));

        let err = registry
            .register(
                UserAssignedCountry::new("XB", "Nowhere").with_numeric(42),
                &countries,
            )
            .unwrap_err();
        assert!(matches!(err, CodeError::NotUserAssignable { code } if code == "042"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_conflicts_rejected() {
        let countries = countries();
        let registry = UserAssignedRegistry::new();

        // Kosovo already holds XK in the standard table
        let err = registry
            .register(UserAssignedCountry::new("XK", "Kosovo"), &countries)
            .unwrap_err();
        assert!(matches!(err, CodeError::AlreadyAssigned { code } if code == "XK"));

        registry
            .register(UserAssignedCountry::new("QM", "First").with_numeric(950), &countries)
            .unwrap();
        let err = registry
            .register(UserAssignedCountry::new("qm", "Second"), &countries)
            .unwrap_err();
        assert!(matches!(err, CodeError::AlreadyAssigned { .. }));
        let err = registry
            .register(UserAssignedCountry::new("QN", "Third").with_numeric(950), &countries)
            .unwrap_err();
        assert!(matches!(err, CodeError::AlreadyAssigned { code } if code == "950"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolved_country_from_parts() {
        let countries = countries();
        let japan = countries.get("JP");
        let user = Some(Arc::new(UserAssignedCountry::new("XX", "Elsewhere")));

        let standard = ResolvedCountry::from_parts(japan, None).unwrap();
        assert_eq!(standard.name(), "Japan");
        assert!(!standard.is_user_assigned());

        let custom = ResolvedCountry::from_parts(None, user.clone()).unwrap();
        assert_eq!(custom.alpha2(), "XX");
        assert_eq!(custom.numeric(), -1);
        assert!(custom.standard().is_none());

        assert!(matches!(
            ResolvedCountry::from_parts(japan, user),
            Err(CodeError::AmbiguousResolution)
        ));
        assert!(matches!(
            ResolvedCountry::from_parts(None, None),
            Err(CodeError::AmbiguousResolution)
        ));
    }

    #[test]
    fn test_deserialize_profile_entry() {
        let json = r#"{"alpha2": "XB", "name": "Test Land", "numeric": 902}"#;
        let country: UserAssignedCountry = serde_json::from_str(json).unwrap();
        assert_eq!(country.alpha2(), "XB");
        assert_eq!(country.alpha3(), None);
        assert_eq!(country.numeric(), 902);
    }
}
