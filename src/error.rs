// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for code table construction and lookup.
//!
//! Absence of a match is never an error: single-record lookups return
//! `Option` and collection queries return an empty `Vec`. The variants here
//! cover the two failure classes that remain: literal tables that break an
//! integrity rule while a registry is being built, and callers that violate
//! an API contract.

/// Errors raised while building or querying code registries
#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    /// Two records of one table share a key, alternate code or numeric code
    #[error("duplicate {field} {value:?} in {domain} table")]
    Duplicate {
        domain: &'static str,
        field: &'static str,
        value: String,
    },

    /// A record references a key that does not exist in the target table
    #[error("{domain} record {key:?} references unknown {target} {related:?}")]
    DanglingReference {
        domain: &'static str,
        key: String,
        target: &'static str,
        related: String,
    },

    /// A bibliographic/terminology pair does not point back at itself
    #[error("language {key:?} names {synonym:?} as synonym, which does not name it back")]
    BrokenSynonym { key: String, synonym: String },

    /// The name pattern handed to a search is not a valid regular expression
    #[error("invalid name pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A registration used a code outside the ISO 3166-1 user-assigned ranges
    #[error("{code:?} is not in a user-assigned range of ISO 3166-1")]
    NotUserAssignable { code: String },

    /// A registration collides with the standard table or an earlier registration
    #[error("country code {code:?} is already assigned")]
    AlreadyAssigned { code: String },

    /// A resolved country was built from both or neither of its parts
    #[error("a resolved country holds exactly one of a standard or a user-assigned record")]
    AmbiguousResolution,
}

/// Alias for Result with `CodeError`
pub type Result<T> = std::result::Result<T, CodeError>;
