// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 table. The alpha-3 column names the terminology form where the
//! language has two.

use super::Language;

pub(super) const UNDEFINED: &str = "undefined";

/// Withdrawn ISO 639-1 codes and their replacements.
pub(super) const LEGACY: &[(&str, &str)] = &[("iw", "he"), ("ji", "yi"), ("in", "id")];

pub(crate) static LANGUAGES: &[Language] = &[
    Language::new(UNDEFINED, super::alpha3_table::UNDEFINED, "Undefined"),
    Language::new("aa", "aar", "Afar"),
    Language::new("ab", "abk", "Abkhazian"),
    Language::new("ae", "ave", "Avestan"),
    Language::new("af", "afr", "Afrikaans"),
    Language::new("ak", "aka", "Akan"),
    Language::new("am", "amh", "Amharic"),
    Language::new("an", "arg", "Aragonese"),
    Language::new("ar", "ara", "Arabic"),
    Language::new("as", "asm", "Assamese"),
    Language::new("av", "ava", "Avaric"),
    Language::new("ay", "aym", "Aymara"),
    Language::new("az", "aze", "Azerbaijani"),
    Language::new("ba", "bak", "Bashkir"),
    Language::new("be", "bel", "Belarusian"),
    Language::new("bg", "bul", "Bulgarian"),
    Language::new("bh", "bih", "Bihari languages"),
    Language::new("bi", "bis", "Bislama"),
    Language::new("bm", "bam", "Bambara"),
    Language::new("bn", "ben", "Bengali"),
    Language::new("bo", "bod", "Tibetan"),
    Language::new("br", "bre", "Breton"),
    Language::new("bs", "bos", "Bosnian"),
    Language::new("ca", "cat", "Catalan"),
    Language::new("ce", "che", "Chechen"),
    Language::new("ch", "cha", "Chamorro"),
    Language::new("co", "cos", "Corsican"),
    Language::new("cr", "cre", "Cree"),
    Language::new("cs", "ces", "Czech"),
    Language::new("cu", "chu", "Church Slavic"),
    Language::new("cv", "chv", "Chuvash"),
    Language::new("cy", "cym", "Welsh"),
    Language::new("da", "dan", "Danish"),
    Language::new("de", "deu", "German"),
    Language::new("dv", "div", "Dhivehi"),
    Language::new("dz", "dzo", "Dzongkha"),
    Language::new("ee", "ewe", "Ewe"),
    Language::new("el", "ell", "Greek, Modern (1453-)"),
    Language::new("en", "eng", "English"),
    Language::new("eo", "epo", "Esperanto"),
    Language::new("es", "spa", "Spanish"),
    Language::new("et", "est", "Estonian"),
    Language::new("eu", "eus", "Basque"),
    Language::new("fa", "fas", "Persian"),
    Language::new("ff", "ful", "Fulah"),
    Language::new("fi", "fin", "Finnish"),
    Language::new("fj", "fij", "Fijian"),
    Language::new("fo", "fao", "Faroese"),
    Language::new("fr", "fra", "French"),
    Language::new("fy", "fry", "Western Frisian"),
    Language::new("ga", "gle", "Irish"),
    Language::new("gd", "gla", "Scottish Gaelic"),
    Language::new("gl", "glg", "Galician"),
    Language::new("gn", "grn", "Guarani"),
    Language::new("gu", "guj", "Gujarati"),
    Language::new("gv", "glv", "Manx"),
    Language::new("ha", "hau", "Hausa"),
    Language::new("he", "heb", "Hebrew"),
    Language::new("hi", "hin", "Hindi"),
    Language::new("ho", "hmo", "Hiri Motu"),
    Language::new("hr", "hrv", "Croatian"),
    Language::new("ht", "hat", "Haitian"),
    Language::new("hu", "hun", "Hungarian"),
    Language::new("hy", "hye", "Armenian"),
    Language::new("hz", "her", "Herero"),
    Language::new("ia", "ina", "Interlingua"),
    Language::new("id", "ind", "Indonesian"),
    Language::new("ie", "ile", "Interlingue"),
    Language::new("ig", "ibo", "Igbo"),
    Language::new("ii", "iii", "Sichuan Yi"),
    Language::new("ik", "ipk", "Inupiaq"),
    Language::new("io", "ido", "Ido"),
    Language::new("is", "isl", "Icelandic"),
    Language::new("it", "ita", "Italian"),
    Language::new("iu", "iku", "Inuktitut"),
    Language::new("ja", "jpn", "Japanese"),
    Language::new("jv", "jav", "Javanese"),
    Language::new("ka", "kat", "Georgian"),
    Language::new("kg", "kon", "Kongo"),
    Language::new("ki", "kik", "Kikuyu"),
    Language::new("kj", "kua", "Kuanyama"),
    Language::new("kk", "kaz", "Kazakh"),
    Language::new("kl", "kal", "Kalaallisut"),
    Language::new("km", "khm", "Central Khmer"),
    Language::new("kn", "kan", "Kannada"),
    Language::new("ko", "kor", "Korean"),
    Language::new("kr", "kau", "Kanuri"),
    Language::new("ks", "kas", "Kashmiri"),
    Language::new("ku", "kur", "Kurdish"),
    Language::new("kv", "kom", "Komi"),
    Language::new("kw", "cor", "Cornish"),
    Language::new("ky", "kir", "Kirghiz"),
    Language::new("la", "lat", "Latin"),
    Language::new("lb", "ltz", "Luxembourgish"),
    Language::new("lg", "lug", "Ganda"),
    Language::new("li", "lim", "Limburgish"),
    Language::new("ln", "lin", "Lingala"),
    Language::new("lo", "lao", "Lao"),
    Language::new("lt", "lit", "Lithuanian"),
    Language::new("lu", "lub", "Luba-Katanga"),
    Language::new("lv", "lav", "Latvian"),
    Language::new("mg", "mlg", "Malagasy"),
    Language::new("mh", "mah", "Marshallese"),
    Language::new("mi", "mri", "Maori"),
    Language::new("mk", "mkd", "Macedonian"),
    Language::new("ml", "mal", "Malayalam"),
    Language::new("mn", "mon", "Mongolian"),
    Language::new("mr", "mar", "Marathi"),
    Language::new("ms", "msa", "Malay"),
    Language::new("mt", "mlt", "Maltese"),
    Language::new("my", "mya", "Burmese"),
    Language::new("na", "nau", "Nauru"),
    Language::new("nb", "nob", "Norwegian Bokmål"),
    Language::new("nd", "nde", "North Ndebele"),
    Language::new("ne", "nep", "Nepali"),
    Language::new("ng", "ndo", "Ndonga"),
    Language::new("nl", "nld", "Dutch"),
    Language::new("nn", "nno", "Norwegian Nynorsk"),
    Language::new("no", "nor", "Norwegian"),
    Language::new("nr", "nbl", "South Ndebele"),
    Language::new("nv", "nav", "Navajo"),
    Language::new("ny", "nya", "Chichewa"),
    Language::new("oc", "oci", "Occitan (post 1500)"),
    Language::new("oj", "oji", "Ojibwa"),
    Language::new("om", "orm", "Oromo"),
    Language::new("or", "ori", "Oriya"),
    Language::new("os", "oss", "Ossetian"),
    Language::new("pa", "pan", "Panjabi"),
    Language::new("pi", "pli", "Pali"),
    Language::new("pl", "pol", "Polish"),
    Language::new("ps", "pus", "Pushto"),
    Language::new("pt", "por", "Portuguese"),
    Language::new("qu", "que", "Quechua"),
    Language::new("rm", "roh", "Romansh"),
    Language::new("rn", "run", "Rundi"),
    Language::new("ro", "ron", "Romanian"),
    Language::new("ru", "rus", "Russian"),
    Language::new("rw", "kin", "Kinyarwanda"),
    Language::new("sa", "san", "Sanskrit"),
    Language::new("sc", "srd", "Sardinian"),
    Language::new("sd", "snd", "Sindhi"),
    Language::new("se", "sme", "Northern Sami"),
    Language::new("sg", "sag", "Sango"),
    Language::new("si", "sin", "Sinhala"),
    Language::new("sk", "slk", "Slovak"),
    Language::new("sl", "slv", "Slovenian"),
    Language::new("sm", "smo", "Samoan"),
    Language::new("sn", "sna", "Shona"),
    Language::new("so", "som", "Somali"),
    Language::new("sq", "sqi", "Albanian"),
    Language::new("sr", "srp", "Serbian"),
    Language::new("ss", "ssw", "Swati"),
    Language::new("st", "sot", "Southern Sotho"),
    Language::new("su", "sun", "Sundanese"),
    Language::new("sv", "swe", "Swedish"),
    Language::new("sw", "swa", "Swahili"),
    Language::new("ta", "tam", "Tamil"),
    Language::new("te", "tel", "Telugu"),
    Language::new("tg", "tgk", "Tajik"),
    Language::new("th", "tha", "Thai"),
    Language::new("ti", "tir", "Tigrinya"),
    Language::new("tk", "tuk", "Turkmen"),
    Language::new("tl", "tgl", "Tagalog"),
    Language::new("tn", "tsn", "Tswana"),
    Language::new("to", "ton", "Tonga (Tonga Islands)"),
    Language::new("tr", "tur", "Turkish"),
    Language::new("ts", "tso", "Tsonga"),
    Language::new("tt", "tat", "Tatar"),
    Language::new("tw", "twi", "Twi"),
    Language::new("ty", "tah", "Tahitian"),
    Language::new("ug", "uig", "Uighur"),
    Language::new("uk", "ukr", "Ukrainian"),
    Language::new("ur", "urd", "Urdu"),
    Language::new("uz", "uzb", "Uzbek"),
    Language::new("ve", "ven", "Venda"),
    Language::new("vi", "vie", "Vietnamese"),
    Language::new("vo", "vol", "Volapük"),
    Language::new("wa", "wln", "Walloon"),
    Language::new("wo", "wol", "Wolof"),
    Language::new("xh", "xho", "Xhosa"),
    Language::new("yi", "yid", "Yiddish"),
    Language::new("yo", "yor", "Yoruba"),
    Language::new("za", "zha", "Zhuang"),
    Language::new("zh", "zho", "Chinese"),
    Language::new("zu", "zul", "Zulu"),
];
