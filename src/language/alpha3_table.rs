// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-2 table, sorted by code. Holds every language with an ISO 639-1
//! code (in both forms where bibliographic and terminology codes differ) and
//! a selection of languages that only have a three-letter code.

use super::LanguageAlpha3;

pub(super) const UNDEFINED: &str = "undefined";

/// Newari is stored under `new_`; `new` is a reserved word in the binding
/// generators that consume this table.
pub(super) const NEWARI: &str = "new_";

pub(super) const SPELLINGS: &[(&str, &str)] = &[("new", NEWARI)];

pub(crate) static LANGUAGES_ALPHA3: &[LanguageAlpha3] = &[
    LanguageAlpha3::common(UNDEFINED, "Undefined", Some(super::alpha2_table::UNDEFINED)),
    LanguageAlpha3::common("aar", "Afar", Some("aa")),
    LanguageAlpha3::common("abk", "Abkhazian", Some("ab")),
    LanguageAlpha3::common("afr", "Afrikaans", Some("af")),
    LanguageAlpha3::common("ain", "Ainu", None),
    LanguageAlpha3::common("aka", "Akan", Some("ak")),
    LanguageAlpha3::common("akk", "Akkadian", None),
    LanguageAlpha3::bibliographic("alb", "Albanian", "sq", "sqi"),
    LanguageAlpha3::common("amh", "Amharic", Some("am")),
    LanguageAlpha3::common("ang", "English, Old (ca.450-1100)", None),
    LanguageAlpha3::common("ara", "Arabic", Some("ar")),
    LanguageAlpha3::common("arg", "Aragonese", Some("an")),
    LanguageAlpha3::bibliographic("arm", "Armenian", "hy", "hye"),
    LanguageAlpha3::common("asm", "Assamese", Some("as")),
    LanguageAlpha3::common("ast", "Asturian", None),
    LanguageAlpha3::common("ava", "Avaric", Some("av")),
    LanguageAlpha3::common("ave", "Avestan", Some("ae")),
    LanguageAlpha3::common("aym", "Aymara", Some("ay")),
    LanguageAlpha3::common("aze", "Azerbaijani", Some("az")),
    LanguageAlpha3::common("bak", "Bashkir", Some("ba")),
    LanguageAlpha3::common("bam", "Bambara", Some("bm")),
    LanguageAlpha3::bibliographic("baq", "Basque", "eu", "eus"),
    LanguageAlpha3::common("bel", "Belarusian", Some("be")),
    LanguageAlpha3::common("ben", "Bengali", Some("bn")),
    LanguageAlpha3::common("bih", "Bihari languages", Some("bh")),
    LanguageAlpha3::common("bis", "Bislama", Some("bi")),
    LanguageAlpha3::terminology("bod", "Tibetan", "bo", "tib"),
    LanguageAlpha3::common("bos", "Bosnian", Some("bs")),
    LanguageAlpha3::common("bre", "Breton", Some("br")),
    LanguageAlpha3::common("bul", "Bulgarian", Some("bg")),
    LanguageAlpha3::bibliographic("bur", "Burmese", "my", "mya"),
    LanguageAlpha3::common("cat", "Catalan", Some("ca")),
    LanguageAlpha3::common("ceb", "Cebuano", None),
    LanguageAlpha3::terminology("ces", "Czech", "cs", "cze"),
    LanguageAlpha3::common("cha", "Chamorro", Some("ch")),
    LanguageAlpha3::common("che", "Chechen", Some("ce")),
    LanguageAlpha3::bibliographic("chi", "Chinese", "zh", "zho"),
    LanguageAlpha3::common("chr", "Cherokee", None),
    LanguageAlpha3::common("chu", "Church Slavic", Some("cu")),
    LanguageAlpha3::common("chv", "Chuvash", Some("cv")),
    LanguageAlpha3::common("cor", "Cornish", Some("kw")),
    LanguageAlpha3::common("cos", "Corsican", Some("co")),
    LanguageAlpha3::common("cre", "Cree", Some("cr")),
    LanguageAlpha3::terminology("cym", "Welsh", "cy", "wel"),
    LanguageAlpha3::bibliographic("cze", "Czech", "cs", "ces"),
    LanguageAlpha3::common("dan", "Danish", Some("da")),
    LanguageAlpha3::terminology("deu", "German", "de", "ger"),
    LanguageAlpha3::common("div", "Dhivehi", Some("dv")),
    LanguageAlpha3::common("dsb", "Lower Sorbian", None),
    LanguageAlpha3::bibliographic("dut", "Dutch", "nl", "nld"),
    LanguageAlpha3::common("dzo", "Dzongkha", Some("dz")),
    LanguageAlpha3::common("egy", "Egyptian (Ancient)", None),
    LanguageAlpha3::terminology("ell", "Greek, Modern (1453-)", "el", "gre"),
    LanguageAlpha3::common("eng", "English", Some("en")),
    LanguageAlpha3::common("epo", "Esperanto", Some("eo")),
    LanguageAlpha3::common("est", "Estonian", Some("et")),
    LanguageAlpha3::terminology("eus", "Basque", "eu", "baq"),
    LanguageAlpha3::common("ewe", "Ewe", Some("ee")),
    LanguageAlpha3::common("fao", "Faroese", Some("fo")),
    LanguageAlpha3::terminology("fas", "Persian", "fa", "per"),
    LanguageAlpha3::common("fij", "Fijian", Some("fj")),
    LanguageAlpha3::common("fil", "Filipino", None),
    LanguageAlpha3::common("fin", "Finnish", Some("fi")),
    LanguageAlpha3::terminology("fra", "French", "fr", "fre"),
    LanguageAlpha3::bibliographic("fre", "French", "fr", "fra"),
    LanguageAlpha3::common("frr", "Northern Frisian", None),
    LanguageAlpha3::common("fry", "Western Frisian", Some("fy")),
    LanguageAlpha3::common("ful", "Fulah", Some("ff")),
    LanguageAlpha3::common("fur", "Friulian", None),
    LanguageAlpha3::bibliographic("geo", "Georgian", "ka", "kat"),
    LanguageAlpha3::bibliographic("ger", "German", "de", "deu"),
    LanguageAlpha3::common("gla", "Scottish Gaelic", Some("gd")),
    LanguageAlpha3::common("gle", "Irish", Some("ga")),
    LanguageAlpha3::common("glg", "Galician", Some("gl")),
    LanguageAlpha3::common("glv", "Manx", Some("gv")),
    LanguageAlpha3::common("got", "Gothic", None),
    LanguageAlpha3::common("grc", "Greek, Ancient (to 1453)", None),
    LanguageAlpha3::bibliographic("gre", "Greek, Modern (1453-)", "el", "ell"),
    LanguageAlpha3::common("grn", "Guarani", Some("gn")),
    LanguageAlpha3::common("gsw", "Swiss German", None),
    LanguageAlpha3::common("guj", "Gujarati", Some("gu")),
    LanguageAlpha3::common("hat", "Haitian", Some("ht")),
    LanguageAlpha3::common("hau", "Hausa", Some("ha")),
    LanguageAlpha3::common("haw", "Hawaiian", None),
    LanguageAlpha3::common("heb", "Hebrew", Some("he")),
    LanguageAlpha3::common("her", "Herero", Some("hz")),
    LanguageAlpha3::common("hin", "Hindi", Some("hi")),
    LanguageAlpha3::common("hmn", "Hmong", None),
    LanguageAlpha3::common("hmo", "Hiri Motu", Some("ho")),
    LanguageAlpha3::common("hrv", "Croatian", Some("hr")),
    LanguageAlpha3::common("hsb", "Upper Sorbian", None),
    LanguageAlpha3::common("hun", "Hungarian", Some("hu")),
    LanguageAlpha3::terminology("hye", "Armenian", "hy", "arm"),
    LanguageAlpha3::common("ibo", "Igbo", Some("ig")),
    LanguageAlpha3::bibliographic("ice", "Icelandic", "is", "isl"),
    LanguageAlpha3::common("ido", "Ido", Some("io")),
    LanguageAlpha3::common("iii", "Sichuan Yi", Some("ii")),
    LanguageAlpha3::common("iku", "Inuktitut", Some("iu")),
    LanguageAlpha3::common("ile", "Interlingue", Some("ie")),
    LanguageAlpha3::common("ina", "Interlingua", Some("ia")),
    LanguageAlpha3::common("ind", "Indonesian", Some("id")),
    LanguageAlpha3::common("ipk", "Inupiaq", Some("ik")),
    LanguageAlpha3::terminology("isl", "Icelandic", "is", "ice"),
    LanguageAlpha3::common("ita", "Italian", Some("it")),
    LanguageAlpha3::common("jav", "Javanese", Some("jv")),
    LanguageAlpha3::common("jbo", "Lojban", None),
    LanguageAlpha3::common("jpn", "Japanese", Some("ja")),
    LanguageAlpha3::common("kal", "Kalaallisut", Some("kl")),
    LanguageAlpha3::common("kan", "Kannada", Some("kn")),
    LanguageAlpha3::common("kas", "Kashmiri", Some("ks")),
    LanguageAlpha3::terminology("kat", "Georgian", "ka", "geo"),
    LanguageAlpha3::common("kau", "Kanuri", Some("kr")),
    LanguageAlpha3::common("kaz", "Kazakh", Some("kk")),
    LanguageAlpha3::common("khm", "Central Khmer", Some("km")),
    LanguageAlpha3::common("kik", "Kikuyu", Some("ki")),
    LanguageAlpha3::common("kin", "Kinyarwanda", Some("rw")),
    LanguageAlpha3::common("kir", "Kirghiz", Some("ky")),
    LanguageAlpha3::common("kom", "Komi", Some("kv")),
    LanguageAlpha3::common("kon", "Kongo", Some("kg")),
    LanguageAlpha3::common("kor", "Korean", Some("ko")),
    LanguageAlpha3::common("kua", "Kuanyama", Some("kj")),
    LanguageAlpha3::common("kur", "Kurdish", Some("ku")),
    LanguageAlpha3::common("lad", "Ladino", None),
    LanguageAlpha3::common("lao", "Lao", Some("lo")),
    LanguageAlpha3::common("lat", "Latin", Some("la")),
    LanguageAlpha3::common("lav", "Latvian", Some("lv")),
    LanguageAlpha3::common("lim", "Limburgish", Some("li")),
    LanguageAlpha3::common("lin", "Lingala", Some("ln")),
    LanguageAlpha3::common("lit", "Lithuanian", Some("lt")),
    LanguageAlpha3::common("ltz", "Luxembourgish", Some("lb")),
    LanguageAlpha3::common("lub", "Luba-Katanga", Some("lu")),
    LanguageAlpha3::common("lug", "Ganda", Some("lg")),
    LanguageAlpha3::bibliographic("mac", "Macedonian", "mk", "mkd"),
    LanguageAlpha3::common("mah", "Marshallese", Some("mh")),
    LanguageAlpha3::common("mal", "Malayalam", Some("ml")),
    LanguageAlpha3::bibliographic("mao", "Maori", "mi", "mri"),
    LanguageAlpha3::common("mar", "Marathi", Some("mr")),
    LanguageAlpha3::bibliographic("may", "Malay", "ms", "msa"),
    LanguageAlpha3::common("mis", "Uncoded languages", None),
    LanguageAlpha3::terminology("mkd", "Macedonian", "mk", "mac"),
    LanguageAlpha3::common("mlg", "Malagasy", Some("mg")),
    LanguageAlpha3::common("mlt", "Maltese", Some("mt")),
    LanguageAlpha3::common("mon", "Mongolian", Some("mn")),
    LanguageAlpha3::terminology("mri", "Maori", "mi", "mao"),
    LanguageAlpha3::terminology("msa", "Malay", "ms", "may"),
    LanguageAlpha3::common("mul", "Multiple languages", None),
    LanguageAlpha3::terminology("mya", "Burmese", "my", "bur"),
    LanguageAlpha3::common("nau", "Nauru", Some("na")),
    LanguageAlpha3::common("nav", "Navajo", Some("nv")),
    LanguageAlpha3::common("nbl", "South Ndebele", Some("nr")),
    LanguageAlpha3::common("nde", "North Ndebele", Some("nd")),
    LanguageAlpha3::common("ndo", "Ndonga", Some("ng")),
    LanguageAlpha3::common("nds", "Low German", None),
    LanguageAlpha3::common("nep", "Nepali", Some("ne")),
    LanguageAlpha3::common(NEWARI, "Nepal Bhasa", None),
    LanguageAlpha3::terminology("nld", "Dutch", "nl", "dut"),
    LanguageAlpha3::common("nno", "Norwegian Nynorsk", Some("nn")),
    LanguageAlpha3::common("nob", "Norwegian Bokmål", Some("nb")),
    LanguageAlpha3::common("nor", "Norwegian", Some("no")),
    LanguageAlpha3::common("nya", "Chichewa", Some("ny")),
    LanguageAlpha3::common("oci", "Occitan (post 1500)", Some("oc")),
    LanguageAlpha3::common("oji", "Ojibwa", Some("oj")),
    LanguageAlpha3::common("ori", "Oriya", Some("or")),
    LanguageAlpha3::common("orm", "Oromo", Some("om")),
    LanguageAlpha3::common("oss", "Ossetian", Some("os")),
    LanguageAlpha3::common("pan", "Panjabi", Some("pa")),
    LanguageAlpha3::bibliographic("per", "Persian", "fa", "fas"),
    LanguageAlpha3::common("pli", "Pali", Some("pi")),
    LanguageAlpha3::common("pol", "Polish", Some("pl")),
    LanguageAlpha3::common("por", "Portuguese", Some("pt")),
    LanguageAlpha3::common("pus", "Pushto", Some("ps")),
    LanguageAlpha3::common("que", "Quechua", Some("qu")),
    LanguageAlpha3::common("roh", "Romansh", Some("rm")),
    LanguageAlpha3::terminology("ron", "Romanian", "ro", "rum"),
    LanguageAlpha3::bibliographic("rum", "Romanian", "ro", "ron"),
    LanguageAlpha3::common("run", "Rundi", Some("rn")),
    LanguageAlpha3::common("rus", "Russian", Some("ru")),
    LanguageAlpha3::common("sag", "Sango", Some("sg")),
    LanguageAlpha3::common("san", "Sanskrit", Some("sa")),
    LanguageAlpha3::common("sco", "Scots", None),
    LanguageAlpha3::common("sin", "Sinhala", Some("si")),
    LanguageAlpha3::terminology("slk", "Slovak", "sk", "slo"),
    LanguageAlpha3::bibliographic("slo", "Slovak", "sk", "slk"),
    LanguageAlpha3::common("slv", "Slovenian", Some("sl")),
    LanguageAlpha3::common("sma", "Southern Sami", None),
    LanguageAlpha3::common("sme", "Northern Sami", Some("se")),
    LanguageAlpha3::common("smj", "Lule Sami", None),
    LanguageAlpha3::common("smn", "Inari Sami", None),
    LanguageAlpha3::common("smo", "Samoan", Some("sm")),
    LanguageAlpha3::common("sms", "Skolt Sami", None),
    LanguageAlpha3::common("sna", "Shona", Some("sn")),
    LanguageAlpha3::common("snd", "Sindhi", Some("sd")),
    LanguageAlpha3::common("som", "Somali", Some("so")),
    LanguageAlpha3::common("sot", "Southern Sotho", Some("st")),
    LanguageAlpha3::common("spa", "Spanish", Some("es")),
    LanguageAlpha3::terminology("sqi", "Albanian", "sq", "alb"),
    LanguageAlpha3::common("srd", "Sardinian", Some("sc")),
    LanguageAlpha3::common("srp", "Serbian", Some("sr")),
    LanguageAlpha3::common("ssw", "Swati", Some("ss")),
    LanguageAlpha3::common("sun", "Sundanese", Some("su")),
    LanguageAlpha3::common("sux", "Sumerian", None),
    LanguageAlpha3::common("swa", "Swahili", Some("sw")),
    LanguageAlpha3::common("swe", "Swedish", Some("sv")),
    LanguageAlpha3::common("syr", "Syriac", None),
    LanguageAlpha3::common("tah", "Tahitian", Some("ty")),
    LanguageAlpha3::common("tam", "Tamil", Some("ta")),
    LanguageAlpha3::common("tat", "Tatar", Some("tt")),
    LanguageAlpha3::common("tel", "Telugu", Some("te")),
    LanguageAlpha3::common("tgk", "Tajik", Some("tg")),
    LanguageAlpha3::common("tgl", "Tagalog", Some("tl")),
    LanguageAlpha3::common("tha", "Thai", Some("th")),
    LanguageAlpha3::bibliographic("tib", "Tibetan", "bo", "bod"),
    LanguageAlpha3::common("tir", "Tigrinya", Some("ti")),
    LanguageAlpha3::common("tlh", "Klingon", None),
    LanguageAlpha3::common("ton", "Tonga (Tonga Islands)", Some("to")),
    LanguageAlpha3::common("tsn", "Tswana", Some("tn")),
    LanguageAlpha3::common("tso", "Tsonga", Some("ts")),
    LanguageAlpha3::common("tuk", "Turkmen", Some("tk")),
    LanguageAlpha3::common("tur", "Turkish", Some("tr")),
    LanguageAlpha3::common("twi", "Twi", Some("tw")),
    LanguageAlpha3::common("uig", "Uighur", Some("ug")),
    LanguageAlpha3::common("ukr", "Ukrainian", Some("uk")),
    LanguageAlpha3::common("und", "Undetermined", None),
    LanguageAlpha3::common("urd", "Urdu", Some("ur")),
    LanguageAlpha3::common("uzb", "Uzbek", Some("uz")),
    LanguageAlpha3::common("ven", "Venda", Some("ve")),
    LanguageAlpha3::common("vie", "Vietnamese", Some("vi")),
    LanguageAlpha3::common("vol", "Volapük", Some("vo")),
    LanguageAlpha3::bibliographic("wel", "Welsh", "cy", "cym"),
    LanguageAlpha3::common("wln", "Walloon", Some("wa")),
    LanguageAlpha3::common("wol", "Wolof", Some("wo")),
    LanguageAlpha3::common("xho", "Xhosa", Some("xh")),
    LanguageAlpha3::common("yid", "Yiddish", Some("yi")),
    LanguageAlpha3::common("yor", "Yoruba", Some("yo")),
    LanguageAlpha3::common("zha", "Zhuang", Some("za")),
    LanguageAlpha3::terminology("zho", "Chinese", "zh", "chi"),
    LanguageAlpha3::common("zul", "Zulu", Some("zu")),
    LanguageAlpha3::common("zxx", "No linguistic content", None),
    LanguageAlpha3::common("zza", "Zaza", None),
];
