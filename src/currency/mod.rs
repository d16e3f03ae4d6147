// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 4217 currency codes.
//!
//! Each currency lists the alpha-2 codes of the countries that use it. The
//! catalog resolves those keys against the country table and indexes the
//! relation in both directions.

mod table;

use crate::normalize::{CaseConvention, Normalizer};
use crate::record::CodeRecord;
use serde::Serialize;
use std::hash::{Hash, Hasher};

pub(crate) use table::CURRENCIES;

/// One ISO 4217 entry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Currency {
    code: &'static str,
    numeric: i32,
    minor_unit: Option<u8>,
    name: &'static str,
    countries: &'static [&'static str],
    fund: bool,
    precious_metal: bool,
    withdrawn: bool,
}

impl Currency {
    pub(crate) const fn new(
        code: &'static str,
        numeric: i32,
        minor_unit: u8,
        name: &'static str,
        countries: &'static [&'static str],
    ) -> Self {
        Self {
            code,
            numeric,
            minor_unit: Some(minor_unit),
            name,
            countries,
            fund: false,
            precious_metal: false,
            withdrawn: false,
        }
    }

    /// Units of account, metals and test codes have no minor unit.
    pub(crate) const fn without_minor_unit(
        code: &'static str,
        numeric: i32,
        name: &'static str,
        countries: &'static [&'static str],
    ) -> Self {
        let mut currency = Self::new(code, numeric, 0, name, countries);
        currency.minor_unit = None;
        currency
    }

    pub(crate) const fn fund(mut self) -> Self {
        self.fund = true;
        self
    }

    pub(crate) const fn precious_metal(mut self) -> Self {
        self.precious_metal = true;
        self
    }

    pub(crate) const fn withdrawn(mut self) -> Self {
        self.withdrawn = true;
        self
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// ISO 4217 numeric code, or `-1`.
    pub fn numeric(&self) -> i32 {
        self.numeric
    }

    pub fn numeric_code(&self) -> Option<String> {
        (self.numeric > 0).then(|| format!("{:03}", self.numeric))
    }

    /// Number of decimal places of the minor unit.
    pub fn minor_unit(&self) -> Option<u8> {
        self.minor_unit
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Alpha-2 codes of the countries using this currency.
    pub fn country_keys(&self) -> &'static [&'static str] {
        self.countries
    }

    /// Fund codes (`CHE`, `BOV`, `USN`, ...) are not circulating currencies.
    pub fn is_fund(&self) -> bool {
        self.fund
    }

    pub fn is_precious_metal(&self) -> bool {
        self.precious_metal
    }

    /// Superseded codes kept for reading archived data.
    pub fn is_withdrawn(&self) -> bool {
        self.withdrawn
    }
}

impl CodeRecord for Currency {
    const DOMAIN: &'static str = "currency";
    const KEY_RULES: Normalizer = Normalizer::new(CaseConvention::Upper, &[3]);

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

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}
