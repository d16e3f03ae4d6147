// SPDX-License-Identifier: PMPL-1.0-or-later

//! Conversion between POSIX locale names and the locale table.
//!
//! POSIX names look like `language[_territory][.codeset][@modifier]`
//! (`ja_JP.UTF-8`, `sr_RS@latin`). The codeset and modifier carry no
//! information the locale table holds, so they are dropped.

use crate::catalog::Catalog;
use crate::locale::Locale;

/// Environment variables consulted for the host locale, highest priority first.
pub const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Split a POSIX locale name into language and territory.
///
/// `C`, `POSIX` and empty names select no locale.
pub fn parse_posix_name(name: &str) -> Option<(&str, Option<&str>)> {
    let name = name.split('@').next().unwrap_or(name);
    let name = name.split('.').next().unwrap_or(name);
    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }
    match name.split_once('_') {
        Some((language, territory)) => Some((language, Some(territory))),
        None => Some((name, None)),
    }
}

/// The first non-empty locale variable in the process environment.
pub fn env_locale_name() -> Option<String> {
    locale_name_from(|var| std::env::var(var).ok())
}

fn locale_name_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|value| !value.is_empty())
}

impl Catalog {
    /// Locale for a POSIX name.
    ///
    /// An exact language and territory match wins; otherwise the
    /// language-only entry is returned, so `de_BE.UTF-8` yields `de`.
    pub fn locale_from_posix(&self, name: &str) -> Option<&Locale> {
        self.posix_locale(name, false)
    }

    /// Locale for a tag or POSIX name.
    ///
    /// Case-sensitive matching applies to the POSIX fallback too, so
    /// `JA_jp` only resolves when case is ignored.
    pub fn locale_by_name(&self, name: &str, case_sensitive: bool) -> Option<&Locale> {
        self.locales()
            .get(name, case_sensitive)
            .or_else(|| self.posix_locale(name, case_sensitive))
    }

    fn posix_locale(&self, name: &str, case_sensitive: bool) -> Option<&Locale> {
        let (language, territory) = parse_posix_name(name)?;
        let locales = self.locales();
        if let Some(territory) = territory {
            let tag = format!("{language}-{territory}");
            if let Some(locale) = locales.get(&tag, case_sensitive) {
                return Some(locale);
            }
        }
        let language = self.languages().lookup(language, case_sensitive)?;
        locales.language_only(language)
    }

    /// Locale of the running process, from `LC_ALL`, `LC_MESSAGES` or `LANG`.
    pub fn host_locale(&self) -> Option<&Locale> {
        let name = env_locale_name()?;
        log::debug!("host locale name {name:?}");
        self.locale_from_posix(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_posix_name() {
        assert_eq!(parse_posix_name("ja_JP.UTF-8"), Some(("ja", Some("JP"))));
        assert_eq!(parse_posix_name("sr_RS@latin"), Some(("sr", Some("RS"))));
        assert_eq!(parse_posix_name("de"), Some(("de", None)));
        assert_eq!(parse_posix_name("en_US.ISO-8859-1@euro"), Some(("en", Some("US"))));
        assert_eq!(parse_posix_name("C"), None);
        assert_eq!(parse_posix_name("C.UTF-8"), None);
        assert_eq!(parse_posix_name("POSIX"), None);
        assert_eq!(parse_posix_name(""), None);
    }

    #[test]
    fn test_locale_from_posix() {
        let catalog = Catalog::standard();
        let japanese = catalog.locale_from_posix("ja_JP.UTF-8").unwrap();
        assert_eq!(japanese.tag(), "ja-JP");
        assert_eq!(japanese.posix_name(), "ja_JP");

        assert_eq!(catalog.locale_from_posix("de_BE.UTF-8").map(|l| l.tag()), Some("de"));
        assert_eq!(catalog.locale_from_posix("iw_IL").map(|l| l.tag()), Some("he-IL"));
        assert!(catalog.locale_from_posix("C").is_none());
        assert!(catalog.locale_from_posix("xx_XX").is_none());
    }

    #[test]
    fn test_locale_by_name_honours_case() {
        let catalog = Catalog::standard();
        let tag = |name, case_sensitive| {
            catalog
                .locale_by_name(name, case_sensitive)
                .map(|l| l.tag())
        };
        assert_eq!(tag("ja-JP", true), Some("ja-JP"));
        assert_eq!(tag("ja_JP.UTF-8", true), Some("ja-JP"));
        assert_eq!(tag("de_BE.UTF-8", true), Some("de"));
        assert_eq!(tag("JA_jp", false), Some("ja-JP"));
        assert_eq!(tag("JA_jp.UTF-8", false), Some("ja-JP"));
        assert!(tag("JA_jp", true).is_none());
        assert!(tag("JA_jp.UTF-8", true).is_none());
        assert!(tag("DE_BE", true).is_none());
    }

    #[test]
    fn test_variable_precedence() {
        let env: HashMap<&str, &str> = [("LANG", "fr_FR.UTF-8"), ("LC_MESSAGES", "de_DE")]
            .into_iter()
            .collect();
        let lookup = |var: &str| env.get(var).map(|v| v.to_string());
        assert_eq!(locale_name_from(lookup).as_deref(), Some("de_DE"));

        let env: HashMap<&str, &str> = [("LC_ALL", ""), ("LANG", "fr_FR.UTF-8")]
            .into_iter()
            .collect();
        let lookup = |var: &str| env.get(var).map(|v| v.to_string());
        assert_eq!(locale_name_from(lookup).as_deref(), Some("fr_FR.UTF-8"));

        assert_eq!(locale_name_from(|_| None), None);
    }
}
