// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locales with published conventions, by language then country.
//!
//! Every language also appears on its own, so a lookup that only knows the
//! language still lands on an entry.

use super::LocaleEntry;

pub(crate) static LOCALES: &[LocaleEntry] = &[
    LocaleEntry::new("ar", None),
    LocaleEntry::new("ar", Some("AE")),
    LocaleEntry::new("ar", Some("BH")),
    LocaleEntry::new("ar", Some("DZ")),
    LocaleEntry::new("ar", Some("EG")),
    LocaleEntry::new("ar", Some("IQ")),
    LocaleEntry::new("ar", Some("JO")),
    LocaleEntry::new("ar", Some("KW")),
    LocaleEntry::new("ar", Some("LB")),
    LocaleEntry::new("ar", Some("LY")),
    LocaleEntry::new("ar", Some("MA")),
    LocaleEntry::new("ar", Some("OM")),
    LocaleEntry::new("ar", Some("QA")),
    LocaleEntry::new("ar", Some("SA")),
    LocaleEntry::new("ar", Some("SD")),
    LocaleEntry::new("ar", Some("SY")),
    LocaleEntry::new("ar", Some("TN")),
    LocaleEntry::new("ar", Some("YE")),
    LocaleEntry::new("be", None),
    LocaleEntry::new("be", Some("BY")),
    LocaleEntry::new("bg", None),
    LocaleEntry::new("bg", Some("BG")),
    LocaleEntry::new("ca", None),
    LocaleEntry::new("ca", Some("ES")),
    LocaleEntry::new("cs", None),
    LocaleEntry::new("cs", Some("CZ")),
    LocaleEntry::new("da", None),
    LocaleEntry::new("da", Some("DK")),
    LocaleEntry::new("de", None),
    LocaleEntry::new("de", Some("AT")),
    LocaleEntry::new("de", Some("CH")),
    LocaleEntry::new("de", Some("DE")),
    LocaleEntry::new("de", Some("LU")),
    LocaleEntry::new("el", None),
    LocaleEntry::new("el", Some("CY")),
    LocaleEntry::new("el", Some("GR")),
    LocaleEntry::new("en", None),
    LocaleEntry::new("en", Some("AU")),
    LocaleEntry::new("en", Some("CA")),
    LocaleEntry::new("en", Some("GB")),
    LocaleEntry::new("en", Some("IE")),
    LocaleEntry::new("en", Some("IN")),
    LocaleEntry::new("en", Some("MT")),
    LocaleEntry::new("en", Some("NZ")),
    LocaleEntry::new("en", Some("PH")),
    LocaleEntry::new("en", Some("SG")),
    LocaleEntry::new("en", Some("US")),
    LocaleEntry::new("en", Some("ZA")),
    LocaleEntry::new("es", None),
    LocaleEntry::new("es", Some("AR")),
    LocaleEntry::new("es", Some("BO")),
    LocaleEntry::new("es", Some("CL")),
    LocaleEntry::new("es", Some("CO")),
    LocaleEntry::new("es", Some("CR")),
    LocaleEntry::new("es", Some("DO")),
    LocaleEntry::new("es", Some("EC")),
    LocaleEntry::new("es", Some("ES")),
    LocaleEntry::new("es", Some("GT")),
    LocaleEntry::new("es", Some("HN")),
    LocaleEntry::new("es", Some("MX")),
    LocaleEntry::new("es", Some("NI")),
    LocaleEntry::new("es", Some("PA")),
    LocaleEntry::new("es", Some("PE")),
    LocaleEntry::new("es", Some("PR")),
    LocaleEntry::new("es", Some("PY")),
    LocaleEntry::new("es", Some("SV")),
    LocaleEntry::new("es", Some("US")),
    LocaleEntry::new("es", Some("UY")),
    LocaleEntry::new("es", Some("VE")),
    LocaleEntry::new("et", None),
    LocaleEntry::new("et", Some("EE")),
    LocaleEntry::new("fa", None),
    LocaleEntry::new("fa", Some("IR")),
    LocaleEntry::new("fi", None),
    LocaleEntry::new("fi", Some("FI")),
    LocaleEntry::new("fr", None),
    LocaleEntry::new("fr", Some("BE")),
    LocaleEntry::new("fr", Some("CA")),
    LocaleEntry::new("fr", Some("CH")),
    LocaleEntry::new("fr", Some("FR")),
    LocaleEntry::new("fr", Some("LU")),
    LocaleEntry::new("ga", None),
    LocaleEntry::new("ga", Some("IE")),
    LocaleEntry::new("he", None),
    LocaleEntry::new("he", Some("IL")),
    LocaleEntry::new("hi", None),
    LocaleEntry::new("hi", Some("IN")),
    LocaleEntry::new("hr", None),
    LocaleEntry::new("hr", Some("HR")),
    LocaleEntry::new("hu", None),
    LocaleEntry::new("hu", Some("HU")),
    LocaleEntry::new("id", None),
    LocaleEntry::new("id", Some("ID")),
    LocaleEntry::new("is", None),
    LocaleEntry::new("is", Some("IS")),
    LocaleEntry::new("it", None),
    LocaleEntry::new("it", Some("CH")),
    LocaleEntry::new("it", Some("IT")),
    LocaleEntry::new("ja", None),
    LocaleEntry::new("ja", Some("JP")),
    LocaleEntry::new("ko", None),
    LocaleEntry::new("ko", Some("KR")),
    LocaleEntry::new("lt", None),
    LocaleEntry::new("lt", Some("LT")),
    LocaleEntry::new("lv", None),
    LocaleEntry::new("lv", Some("LV")),
    LocaleEntry::new("mk", None),
    LocaleEntry::new("mk", Some("MK")),
    LocaleEntry::new("ms", None),
    LocaleEntry::new("ms", Some("MY")),
    LocaleEntry::new("mt", None),
    LocaleEntry::new("mt", Some("MT")),
    LocaleEntry::new("nl", None),
    LocaleEntry::new("nl", Some("BE")),
    LocaleEntry::new("nl", Some("NL")),
    LocaleEntry::new("no", None),
    LocaleEntry::new("no", Some("NO")),
    LocaleEntry::new("pl", None),
    LocaleEntry::new("pl", Some("PL")),
    LocaleEntry::new("pt", None),
    LocaleEntry::new("pt", Some("BR")),
    LocaleEntry::new("pt", Some("PT")),
    LocaleEntry::new("ro", None),
    LocaleEntry::new("ro", Some("RO")),
    LocaleEntry::new("ru", None),
    LocaleEntry::new("ru", Some("RU")),
    LocaleEntry::new("sk", None),
    LocaleEntry::new("sk", Some("SK")),
    LocaleEntry::new("sl", None),
    LocaleEntry::new("sl", Some("SI")),
    LocaleEntry::new("sq", None),
    LocaleEntry::new("sq", Some("AL")),
    LocaleEntry::new("sr", None),
    LocaleEntry::new("sr", Some("BA")),
    LocaleEntry::new("sr", Some("CS")),
    LocaleEntry::new("sr", Some("ME")),
    LocaleEntry::new("sr", Some("RS")),
    LocaleEntry::new("sv", None),
    LocaleEntry::new("sv", Some("SE")),
    LocaleEntry::new("th", None),
    LocaleEntry::new("th", Some("TH")),
    LocaleEntry::new("tr", None),
    LocaleEntry::new("tr", Some("TR")),
    LocaleEntry::new("uk", None),
    LocaleEntry::new("uk", Some("UA")),
    LocaleEntry::new("vi", None),
    LocaleEntry::new("vi", Some("VN")),
    LocaleEntry::new("zh", None),
    LocaleEntry::new("zh", Some("CN")),
    LocaleEntry::new("zh", Some("HK")),
    LocaleEntry::new("zh", Some("SG")),
    LocaleEntry::new("zh", Some("TW")),
];
