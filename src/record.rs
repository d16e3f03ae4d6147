// SPDX-License-Identifier: PMPL-1.0-or-later

//! The shape shared by every entry of every code table.

use crate::normalize::Normalizer;

/// One entry of a fixed code table.
///
/// Records live in `static` slices and are never mutated. The key is the
/// sole identity of a record; name and auxiliary codes are descriptive.
pub trait CodeRecord: Send + Sync + 'static {
    /// Table name used in diagnostics, e.g. `"country"`.
    const DOMAIN: &'static str;

    /// Rules applied to input before probing the key index.
    const KEY_RULES: Normalizer;

    /// Rules for the alternate alpha code, when the table has one.
    const ALTERNATE_RULES: Option<Normalizer> = None;

    /// Canonical code, unique within the table.
    fn key(&self) -> &'static str;

    /// Human-readable name. Not unique.
    fn name(&self) -> &'static str;

    /// Alternate alpha code, e.g. a country's alpha-3 form.
    fn alternate(&self) -> Option<&'static str> {
        None
    }

    /// Numeric code, or `-1` where the record has none.
    fn numeric(&self) -> i32 {
        -1
    }

    /// Whether this is the table's non-standard "undefined" entry.
    fn is_undefined(&self) -> bool {
        false
    }
}
