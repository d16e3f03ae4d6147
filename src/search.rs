// SPDX-License-Identifier: PMPL-1.0-or-later

//! Display-name search over code tables.
//!
//! Patterns match the *whole* name: `.*Ruble` finds "Russian Ruble" but
//! `Ruble` alone finds nothing, because no name is exactly "Ruble". The scan
//! is linear, which is fine for tables of a few hundred rows.

use crate::error::{CodeError, Result};
use crate::record::CodeRecord;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// A compiled, whole-string name pattern.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    anchored: Regex,
}

impl NamePattern {
    /// Compile `pattern` with full-match semantics.
    pub fn new(pattern: &str) -> Result<Self> {
        let anchored = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            CodeError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self {
            source: pattern.to_string(),
            anchored,
        })
    }

    /// Reuse an already compiled expression, anchoring it at both ends.
    pub fn from_regex(regex: &Regex) -> Result<Self> {
        Self::new(regex.as_str())
    }

    /// The pattern as the caller wrote it, without anchors.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.anchored.is_match(name)
    }
}

impl FromStr for NamePattern {
    type Err = CodeError;

    fn from_str(pattern: &str) -> Result<Self> {
        Self::new(pattern)
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Every record in `records` whose name matches `pattern`, in order.
pub fn find_by_name<'r, R: CodeRecord>(records: &'r [R], pattern: &NamePattern) -> Vec<&'r R> {
    records
        .iter()
        .filter(|record| pattern.is_match(record.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_match_semantics() {
        let pattern = NamePattern::new(".*Ruble").unwrap();
        assert!(pattern.is_match("Russian Ruble"));
        assert!(!pattern.is_match("Russian Ruble (old)"));

        let bare = NamePattern::new("Ruble").unwrap();
        assert!(!bare.is_match("Russian Ruble"));
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        let pattern = NamePattern::new("Euro|Yen").unwrap();
        assert!(pattern.is_match("Euro"));
        assert!(pattern.is_match("Yen"));
        assert!(!pattern.is_match("Eurozone"));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let err = NamePattern::new("[unclosed").unwrap_err();
        assert!(matches!(err, CodeError::InvalidPattern { .. }));
        assert!("(".parse::<NamePattern>().is_err());
    }

    #[test]
    fn test_from_regex_keeps_source() {
        let regex = Regex::new("Japan").unwrap();
        let pattern = NamePattern::from_regex(&regex).unwrap();
        assert_eq!(pattern.as_str(), "Japan");
        assert_eq!(pattern.to_string(), "Japan");
        assert!(pattern.is_match("Japan"));
    }
}
