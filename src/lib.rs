// SPDX-License-Identifier: PMPL-1.0-or-later

//! i18n-codes: ISO 3166-1, ISO 4217, ISO 639 and ISO 15924 code tables.
//!
//! Every table is a closed, immutable registry indexed by its primary code
//! and any auxiliary codes (alpha-3, numeric). The [`Catalog`] owns the
//! registries together with the relations between them: the countries
//! using a currency, alpha-2/alpha-3 language links, and locales built
//! from a language and an optional country.
//!
//! ```
//! use i18n_codes::Catalog;
//!
//! let catalog = Catalog::standard();
//! let japan = catalog.countries().lookup("jp", false).unwrap();
//! assert_eq!(japan.numeric(), 392);
//! let yen: Vec<_> = catalog.currencies_of(japan).iter().map(|c| c.code()).collect();
//! assert_eq!(yen, ["JPY"]);
//! ```
//!
//! LOOKUP RULES:
//! 1. **Absence**: a code with no match is `None`, never an error.
//! 2. **Case**: case-sensitive lookups want the table's own case (`JP`,
//!    `ja`, `Latn`); case-insensitive ones fold the input first.
//! 3. **Legacy codes**: `iw`, `ji` and `in` resolve to `he`, `yi` and `id`.
//! 4. **Undefined**: each table has one "undefined" entry reachable only
//!    through `undefined()`.

pub mod assigned;
pub mod catalog;
pub mod config;
pub mod country;
pub mod currency;
pub mod error;
pub mod host;
pub mod language;
pub mod locale;
pub mod normalize;
pub mod record;
pub mod registry;
pub mod relation;
pub mod report;
pub mod script;
pub mod search;

pub use assigned::{ResolvedCountry, UserAssignedCountry, UserAssignedRegistry};
pub use catalog::Catalog;
pub use country::{Assignment, Country};
pub use currency::Currency;
pub use error::{CodeError, Result};
pub use language::{Language, LanguageAlpha3, Usage};
pub use locale::{Locale, LocaleRegistry};
pub use normalize::{CaseConvention, Normalizer};
pub use record::CodeRecord;
pub use registry::CodeRegistry;
pub use relation::RelationIndex;
pub use script::Script;
pub use search::NamePattern;
