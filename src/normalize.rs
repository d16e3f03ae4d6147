// SPDX-License-Identifier: PMPL-1.0-or-later

//! Input canonicalization applied before every registry lookup.
//!
//! A [`Normalizer`] is a small, `const`-constructible description of how one
//! table spells its codes. Running raw input through it yields the exact
//! string to probe the index with, or `None` when the input can never match
//! (empty, wrong length). The steps run in a fixed order:
//!
//! 1. empty input is absent;
//! 2. legacy aliases are replaced by their modern code;
//! 3. case-insensitive callers get their input folded to the table's case;
//! 4. the length is checked against the lengths the table accepts;
//! 5. irregular external spellings are mapped onto their table key.

use std::borrow::Cow;

/// Letter case a table stores its codes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseConvention {
    /// `JP`, `JPY`
    Upper,
    /// `ja`, `jpn`
    Lower,
    /// `Jpan`
    Title,
}

impl CaseConvention {
    /// Fold `code` into this convention. Non-ASCII characters pass through.
    pub fn apply(self, code: &str) -> String {
        match self {
            CaseConvention::Upper => code.to_ascii_uppercase(),
            CaseConvention::Lower => code.to_ascii_lowercase(),
            CaseConvention::Title => {
                let mut chars = code.chars();
                match chars.next() {
                    Some(first) => {
                        let mut folded = String::with_capacity(code.len());
                        folded.push(first.to_ascii_uppercase());
                        folded.extend(chars.map(|c| c.to_ascii_lowercase()));
                        folded
                    }
                    None => String::new(),
                }
            }
        }
    }

    /// Whether `code` is already spelled in this convention.
    pub fn matches(self, code: &str) -> bool {
        self.apply(code) == code
    }
}

/// Canonicalization rules for one code namespace.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    case: CaseConvention,
    lengths: &'static [usize],
    aliases: &'static [(&'static str, &'static str)],
    spellings: &'static [(&'static str, &'static str)],
}

impl Normalizer {
    /// Codes in `case`, accepted only at one of `lengths` bytes.
    ///
    /// An empty `lengths` slice accepts any length.
    pub const fn new(case: CaseConvention, lengths: &'static [usize]) -> Self {
        Self {
            case,
            lengths,
            aliases: &[],
            spellings: &[],
        }
    }

    /// Deprecated codes and their replacements, as `(legacy, current)`.
    pub const fn with_aliases(mut self, aliases: &'static [(&'static str, &'static str)]) -> Self {
        self.aliases = aliases;
        self
    }

    /// External spellings whose table key differs, as `(external, key)`.
    pub const fn with_spellings(
        mut self,
        spellings: &'static [(&'static str, &'static str)],
    ) -> Self {
        self.spellings = spellings;
        self
    }

    pub fn case(&self) -> CaseConvention {
        self.case
    }

    pub fn lengths(&self) -> &'static [usize] {
        self.lengths
    }

    /// Whether `code` has a length this namespace can hold.
    pub fn accepts_length(&self, code: &str) -> bool {
        self.lengths.is_empty() || self.lengths.contains(&code.len())
    }

    /// Turn raw input into the key to probe the index with.
    ///
    /// With `case_sensitive` set the input must already be in the table's
    /// case; otherwise it is folded first. Alias comparison honours the same
    /// flag.
    pub fn normalize<'a>(&self, code: &'a str, case_sensitive: bool) -> Option<Cow<'a, str>> {
        if code.is_empty() {
            return None;
        }

        let aliased = self.aliases.iter().find(|(legacy, _)| {
            if case_sensitive {
                *legacy == code
            } else {
                legacy.eq_ignore_ascii_case(code)
            }
        });

        let code: Cow<'a, str> = match aliased {
            Some((_, current)) => Cow::Borrowed(*current),
            None if case_sensitive => Cow::Borrowed(code),
            None => Cow::Owned(self.case.apply(code)),
        };

        if !self.accepts_length(&code) {
            return None;
        }

        match self.spellings.iter().find(|(external, _)| *external == code) {
            Some((_, key)) => Some(Cow::Borrowed(*key)),
            None => Some(code),
        }
    }

    /// The spelling a table key is shown with outside the table.
    pub fn external<'a>(&self, key: &'a str) -> &'a str {
        self.spellings
            .iter()
            .find(|(_, k)| *k == key)
            .map(|(external, _)| *external)
            .unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHA2: Normalizer = Normalizer::new(CaseConvention::Lower, &[2])
        .with_aliases(&[("iw", "he"), ("ji", "yi"), ("in", "id")]);
    const ALPHA3: Normalizer =
        Normalizer::new(CaseConvention::Lower, &[3]).with_spellings(&[("new", "new_")]);

    #[test]
    fn test_title_case_folding() {
        assert_eq!(CaseConvention::Title.apply("LATN"), "Latn");
        assert_eq!(CaseConvention::Title.apply("latn"), "Latn");
        assert_eq!(CaseConvention::Title.apply(""), "");
        assert!(CaseConvention::Upper.matches("JP"));
        assert!(!CaseConvention::Upper.matches("Jp"));
    }

    #[test]
    fn test_empty_input_is_absent() {
        assert_eq!(ALPHA2.normalize("", false), None);
        assert_eq!(ALPHA2.normalize("", true), None);
    }

    #[test]
    fn test_case_flag_controls_folding() {
        assert_eq!(ALPHA2.normalize("JA", false).as_deref(), Some("ja"));
        assert_eq!(ALPHA2.normalize("JA", true).as_deref(), Some("JA"));
    }

    #[test]
    fn test_alias_honours_case_flag() {
        assert_eq!(ALPHA2.normalize("in", true).as_deref(), Some("id"));
        assert_eq!(ALPHA2.normalize("IN", false).as_deref(), Some("id"));
        assert_eq!(ALPHA2.normalize("IN", true).as_deref(), Some("IN"));
    }

    #[test]
    fn test_wrong_length_short_circuits() {
        assert_eq!(ALPHA2.normalize("jpn", false), None);
        assert_eq!(ALPHA3.normalize("ja", false), None);
    }

    #[test]
    fn test_irregular_spelling_is_symmetric() {
        let key = ALPHA3.normalize("NEW", false);
        assert_eq!(key.as_deref(), Some("new_"));
        assert_eq!(ALPHA3.external("new_"), "new");
        assert_eq!(ALPHA3.external("deu"), "deu");
        // the table key itself is not a valid external code
        assert_eq!(ALPHA3.normalize("new_", true), None);
    }
}
