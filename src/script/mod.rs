// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 15924 script codes (`Latn`, `Jpan`, `Hebr`).

mod table;

use crate::normalize::{CaseConvention, Normalizer};
use crate::record::CodeRecord;
use serde::Serialize;
use std::hash::{Hash, Hasher};

pub(crate) use table::SCRIPTS;

/// One ISO 15924 entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Script {
    code: &'static str,
    numeric: i32,
    name: &'static str,
    right_to_left: bool,
}

impl Script {
    pub(crate) const fn new(code: &'static str, numeric: i32, name: &'static str) -> Self {
        Self {
            code,
            numeric,
            name,
            right_to_left: false,
        }
    }

    pub(crate) const fn right_to_left(mut self) -> Self {
        self.right_to_left = true;
        self
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn numeric(&self) -> i32 {
        self.numeric
    }

    pub fn numeric_code(&self) -> Option<String> {
        (self.numeric > 0).then(|| format!("{:03}", self.numeric))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Written right to left.
    pub fn is_right_to_left(&self) -> bool {
        self.right_to_left
    }
}

impl CodeRecord for Script {
    const DOMAIN: &'static str = "script";
    const KEY_RULES: Normalizer = Normalizer::new(CaseConvention::Title, &[4]);

    fn key(&self) -> &'static str {
        self.code
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn numeric(&self) -> i32 {
        self.numeric
    }

    fn is_undefined(&self) -> bool {
        self.code == table::UNDEFINED
    }
}

impl PartialEq for Script {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Script {}

impl Hash for Script {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CodeRegistry;

    #[test]
    fn test_title_case_lookup() {
        let scripts = CodeRegistry::build(SCRIPTS).unwrap();
        let latin = scripts.get("Latn").unwrap();
        assert_eq!(latin.name(), "Latin");
        assert_eq!(latin.numeric(), 215);
        assert_eq!(scripts.lookup("LATN", false), Some(latin));
        assert_eq!(scripts.lookup("latn", false), Some(latin));
        assert!(scripts.get("latn").is_none());
    }

    #[test]
    fn test_direction() {
        let scripts = CodeRegistry::build(SCRIPTS).unwrap();
        assert!(scripts.get("Hebr").unwrap().is_right_to_left());
        assert!(scripts.get("Arab").unwrap().is_right_to_left());
        assert!(!scripts.get("Jpan").unwrap().is_right_to_left());
    }

    #[test]
    fn test_numeric_lookup_pads_to_three_digits() {
        let scripts = CodeRegistry::build(SCRIPTS).unwrap();
        let cuneiform = scripts.lookup_numeric(20).unwrap();
        assert_eq!(cuneiform.code(), "Xsux");
        assert_eq!(cuneiform.numeric_code().as_deref(), Some("020"));
    }

    #[test]
    fn test_undefined_sentinel() {
        let scripts = CodeRegistry::build(SCRIPTS).unwrap();
        let undefined = scripts.undefined().unwrap();
        assert_eq!(undefined.numeric(), -1);
        // "Zzzz" is the standard's own code for uncoded scripts, not the sentinel
        assert_ne!(scripts.get("Zzzz"), Some(undefined));
    }
}
