// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering of lookup results for the command line.

use crate::assigned::ResolvedCountry;
use crate::country::Country;
use crate::currency::Currency;
use crate::language::{Language, LanguageAlpha3, Usage};
use crate::locale::Locale;
use crate::script::Script;
use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Text,
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn render(&self, report: &Report) -> Result<String> {
        match self {
            ReportOutputFormat::Text => Ok(format_text(report)),
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }
}

/// A titled list of rows.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: String,
    pub rows: Vec<Row>,
}

impl Report {
    pub fn new(title: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }
}

/// One record flattened to code, name and named extra fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub kind: &'static str,
    pub code: String,
    pub name: String,
    #[serde(flatten)]
    pub fields: BTreeMap<&'static str, String>,
}

impl Row {
    pub fn new(kind: &'static str, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn field(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.fields.insert(key, value.into());
        self
    }

    fn field_opt(self, key: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }
}

impl From<&Country> for Row {
    fn from(country: &Country) -> Self {
        Row::new("country", country.alpha2(), country.name())
            .field_opt("alpha3", country.alpha3())
            .field_opt("numeric", country.numeric_code())
            .field("assignment", country.assignment().as_str())
    }
}

impl From<&ResolvedCountry> for Row {
    fn from(resolved: &ResolvedCountry) -> Self {
        match resolved {
            ResolvedCountry::Standard(country) => Row::from(*country),
            ResolvedCountry::UserAssigned(country) => {
                Row::new("country", country.alpha2(), country.name())
                    .field_opt("alpha3", country.alpha3())
                    .field_opt(
                        "numeric",
                        (country.numeric() > 0).then(|| format!("{:03}", country.numeric())),
                    )
                    .field("assignment", "registered user assigned")
            }
        }
    }
}

impl From<&Currency> for Row {
    fn from(currency: &Currency) -> Self {
        let mut flags = Vec::new();
        if currency.is_fund() {
            flags.push("fund");
        }
        if currency.is_precious_metal() {
            flags.push("precious metal");
        }
        if currency.is_withdrawn() {
            flags.push("withdrawn");
        }
        let row = Row::new("currency", currency.code(), currency.name())
            .field_opt("numeric", currency.numeric_code())
            .field_opt("minor_unit", currency.minor_unit().map(|u| u.to_string()));
        if flags.is_empty() {
            row
        } else {
            row.field("flags", flags.join(", "))
        }
    }
}

impl From<&Language> for Row {
    fn from(language: &Language) -> Self {
        Row::new("language", language.code(), language.name())
            .field("alpha3", language.alpha3_key())
    }
}

impl From<&LanguageAlpha3> for Row {
    fn from(language: &LanguageAlpha3) -> Self {
        let row = Row::new("language alpha-3", language.code(), language.name())
            .field_opt("alpha2", language.alpha2_key());
        match language.usage() {
            Usage::Common => row,
            Usage::Bibliographic | Usage::Terminology => row
                .field("alpha3_b", language.alpha3_b())
                .field("alpha3_t", language.alpha3_t()),
        }
    }
}

impl From<&Script> for Row {
    fn from(script: &Script) -> Self {
        let direction = if script.is_right_to_left() {
            "right to left"
        } else {
            "left to right"
        };
        Row::new("script", script.code(), script.name())
            .field_opt("numeric", script.numeric_code())
            .field("direction", direction)
    }
}

impl From<&Locale> for Row {
    fn from(locale: &Locale) -> Self {
        Row::new("locale", locale.tag(), locale.name())
            .field("language", locale.language().code())
            .field_opt("country", locale.country().map(|c| c.alpha2()))
            .field("posix", locale.posix_name())
    }
}

fn format_text(report: &Report) -> String {
    let mut lines = vec![format!("{}", report.title.bold().cyan())];
    if report.rows.is_empty() {
        lines.push(format!("  {}", "no matches".dimmed()));
    }
    for row in &report.rows {
        lines.push(format!("  {:<10} {}", row.code.bold(), row.name));
        for (key, value) in &row.fields {
            lines.push(format!("      {}: {}", key.dimmed(), value));
        }
    }
    lines.join("\n")
}
