// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 15924 table, sorted by code.

use super::Script;

pub(super) const UNDEFINED: &str = "Undefined";

pub(crate) static SCRIPTS: &[Script] = &[
    Script::new(UNDEFINED, -1, "Undefined"),
    Script::new("Adlm", 166, "Adlam").right_to_left(),
    Script::new("Afak", 439, "Afaka"),
    Script::new("Aghb", 239, "Caucasian Albanian"),
    Script::new("Ahom", 338, "Ahom, Tai Ahom"),
    Script::new("Arab", 160, "Arabic").right_to_left(),
    Script::new("Aran", 161, "Arabic (Nastaliq variant)").right_to_left(),
    Script::new("Armi", 124, "Imperial Aramaic").right_to_left(),
    Script::new("Armn", 230, "Armenian"),
    Script::new("Avst", 134, "Avestan").right_to_left(),
    Script::new("Bali", 360, "Balinese"),
    Script::new("Bamu", 435, "Bamum"),
    Script::new("Bass", 259, "Bassa Vah"),
    Script::new("Batk", 365, "Batak"),
    Script::new("Beng", 325, "Bengali (Bangla)"),
    Script::new("Bhks", 334, "Bhaiksuki"),
    Script::new("Blis", 550, "Blissymbols"),
    Script::new("Bopo", 285, "Bopomofo"),
    Script::new("Brah", 300, "Brahmi"),
    Script::new("Brai", 570, "Braille"),
    Script::new("Bugi", 367, "Buginese"),
    Script::new("Buhd", 372, "Buhid"),
    Script::new("Cakm", 349, "Chakma"),
    Script::new("Cans", 440, "Unified Canadian Aboriginal Syllabics"),
    Script::new("Cari", 201, "Carian"),
    Script::new("Cham", 358, "Cham"),
    Script::new("Cher", 445, "Cherokee"),
    Script::new("Chrs", 109, "Chorasmian").right_to_left(),
    Script::new("Cirt", 291, "Cirth"),
    Script::new("Copt", 204, "Coptic"),
    Script::new("Cpmn", 402, "Cypro-Minoan"),
    Script::new("Cprt", 403, "Cypriot syllabary").right_to_left(),
    Script::new("Cyrl", 220, "Cyrillic"),
    Script::new("Cyrs", 221, "Cyrillic (Old Church Slavonic variant)"),
    Script::new("Deva", 315, "Devanagari (Nagari)"),
    Script::new("Diak", 342, "Dives Akuru"),
    Script::new("Dogr", 328, "Dogra"),
    Script::new("Dsrt", 250, "Deseret (Mormon)"),
    Script::new("Dupl", 755, "Duployan shorthand, Duployan stenography"),
    Script::new("Egyd", 70, "Egyptian demotic").right_to_left(),
    Script::new("Egyh", 60, "Egyptian hieratic").right_to_left(),
    Script::new("Egyp", 50, "Egyptian hieroglyphs"),
    Script::new("Elba", 226, "Elbasan"),
    Script::new("Elym", 128, "Elymaic").right_to_left(),
    Script::new("Ethi", 430, "Ethiopic (Geʻez)"),
    Script::new("Geok", 241, "Khutsuri (Asomtavruli and Nuskhuri)"),
    Script::new("Geor", 240, "Georgian (Mkhedruli and Mtavruli)"),
    Script::new("Glag", 225, "Glagolitic"),
    Script::new("Gong", 312, "Gunjala Gondi"),
    Script::new("Gonm", 313, "Masaram Gondi"),
    Script::new("Goth", 206, "Gothic"),
    Script::new("Gran", 343, "Grantha"),
    Script::new("Grek", 200, "Greek"),
    Script::new("Gujr", 320, "Gujarati"),
    Script::new("Guru", 310, "Gurmukhi"),
    Script::new("Hanb", 503, "Han with Bopomofo (alias for Han + Bopomofo)"),
    Script::new("Hang", 286, "Hangul (Hangŭl, Hangeul)"),
    Script::new("Hani", 500, "Han (Hanzi, Kanji, Hanja)"),
    Script::new("Hano", 371, "Hanunoo (Hanunóo)"),
    Script::new("Hans", 501, "Han (Simplified variant)"),
    Script::new("Hant", 502, "Han (Traditional variant)"),
    Script::new("Hatr", 127, "Hatran").right_to_left(),
    Script::new("Hebr", 125, "Hebrew").right_to_left(),
    Script::new("Hira", 410, "Hiragana"),
    Script::new("Hluw", 80, "Anatolian Hieroglyphs (Luwian Hieroglyphs, Hittite Hieroglyphs)"),
    Script::new("Hmng", 450, "Pahawh Hmong"),
    Script::new("Hmnp", 451, "Nyiakeng Puachue Hmong"),
    Script::new("Hrkt", 412, "Japanese syllabaries (alias for Hiragana + Katakana)"),
    Script::new("Hung", 176, "Old Hungarian (Hungarian Runic)").right_to_left(),
    Script::new("Inds", 610, "Indus (Harappan)"),
    Script::new("Ital", 210, "Old Italic (Etruscan, Oscan, etc.)"),
    Script::new("Jamo", 284, "Jamo (alias for Jamo subset of Hangul)"),
    Script::new("Java", 361, "Javanese"),
    Script::new("Jpan", 413, "Japanese (alias for Han + Hiragana + Katakana)"),
    Script::new("Jurc", 510, "Jurchen"),
    Script::new("Kali", 357, "Kayah Li"),
    Script::new("Kana", 411, "Katakana"),
    Script::new("Khar", 305, "Kharoshthi").right_to_left(),
    Script::new("Khmr", 355, "Khmer"),
    Script::new("Khoj", 322, "Khojki"),
    Script::new("Kitl", 505, "Khitan large script"),
    Script::new("Kits", 288, "Khitan small script"),
    Script::new("Knda", 345, "Kannada"),
    Script::new("Kore", 287, "Korean (alias for Hangul + Han)"),
    Script::new("Kpel", 436, "Kpelle"),
    Script::new("Kthi", 317, "Kaithi"),
    Script::new("Lana", 351, "Tai Tham (Lanna)"),
    Script::new("Laoo", 356, "Lao"),
    Script::new("Latf", 217, "Latin (Fraktur variant)"),
    Script::new("Latg", 216, "Latin (Gaelic variant)"),
    Script::new("Latn", 215, "Latin"),
    Script::new("Leke", 364, "Leke"),
    Script::new("Lepc", 335, "Lepcha (Róng)"),
    Script::new("Limb", 336, "Limbu"),
    Script::new("Lina", 400, "Linear A"),
    Script::new("Linb", 401, "Linear B"),
    Script::new("Lisu", 399, "Lisu (Fraser)"),
    Script::new("Loma", 437, "Loma"),
    Script::new("Lyci", 202, "Lycian"),
    Script::new("Lydi", 116, "Lydian").right_to_left(),
    Script::new("Mahj", 314, "Mahajani"),
    Script::new("Maka", 366, "Makasar"),
    Script::new("Mand", 140, "Mandaic, Mandaean").right_to_left(),
    Script::new("Mani", 139, "Manichaean").right_to_left(),
    Script::new("Marc", 332, "Marchen"),
    Script::new("Maya", 90, "Mayan hieroglyphs"),
    Script::new("Medf", 265, "Medefaidrin (Oberi Okaime, Oberi Ɔkaimɛ)"),
    Script::new("Mend", 438, "Mende Kikakui").right_to_left(),
    Script::new("Merc", 101, "Meroitic Cursive").right_to_left(),
    Script::new("Mero", 100, "Meroitic Hieroglyphs").right_to_left(),
    Script::new("Mlym", 347, "Malayalam"),
    Script::new("Modi", 324, "Modi, Moḍī"),
    Script::new("Mong", 145, "Mongolian"),
    Script::new("Moon", 218, "Moon (Moon code, Moon script, Moon type)"),
    Script::new("Mroo", 264, "Mro, Mru"),
    Script::new("Mtei", 337, "Meitei Mayek (Meithei, Meetei)"),
    Script::new("Mult", 323, "Multani"),
    Script::new("Mymr", 350, "Myanmar (Burmese)"),
    Script::new("Nand", 311, "Nandinagari"),
    Script::new("Narb", 106, "Old North Arabian (Ancient North Arabian)").right_to_left(),
    Script::new("Nbat", 159, "Nabataean").right_to_left(),
    Script::new("Newa", 333, "Newa, Newar, Newari, Nepāla lipi"),
    Script::new("Nkgb", 420, "Naxi Geba (na-khi ggŏ-baw, Nakhi Geba)"),
    Script::new("Nkoo", 165, "N'Ko").right_to_left(),
    Script::new("Nshu", 499, "Nüshu"),
    Script::new("Ogam", 212, "Ogham"),
    Script::new("Olck", 261, "Ol Chiki (Ol Cemet', Ol, Santali)"),
    Script::new("Orkh", 175, "Old Turkic, Orkhon Runic").right_to_left(),
    Script::new("Orya", 327, "Oriya (Odia)"),
    Script::new("Osge", 219, "Osage"),
    Script::new("Osma", 260, "Osmanya"),
    Script::new("Ougr", 143, "Old Uyghur").right_to_left(),
    Script::new("Palm", 126, "Palmyrene").right_to_left(),
    Script::new("Pauc", 263, "Pau Cin Hau"),
    Script::new("Perm", 227, "Old Permic"),
    Script::new("Phag", 331, "Phags-pa"),
    Script::new("Phli", 131, "Inscriptional Pahlavi").right_to_left(),
    Script::new("Phlp", 132, "Psalter Pahlavi").right_to_left(),
    Script::new("Phlv", 133, "Book Pahlavi").right_to_left(),
    Script::new("Phnx", 115, "Phoenician").right_to_left(),
    Script::new("Plrd", 282, "Miao (Pollard)"),
    Script::new("Prti", 130, "Inscriptional Parthian").right_to_left(),
    Script::new("Qaaa", 900, "Reserved for private use (start)"),
    Script::new("Qabx", 949, "Reserved for private use (end)"),
    Script::new("Rjng", 363, "Rejang (Redjang, Kaganga)"),
    Script::new("Rohg", 167, "Hanifi Rohingya").right_to_left(),
    Script::new("Roro", 620, "Rongorongo"),
    Script::new("Runr", 211, "Runic"),
    Script::new("Samr", 123, "Samaritan").right_to_left(),
    Script::new("Sara", 292, "Sarati"),
    Script::new("Sarb", 105, "Old South Arabian").right_to_left(),
    Script::new("Saur", 344, "Saurashtra"),
    Script::new("Sgnw", 95, "SignWriting"),
    Script::new("Shaw", 281, "Shavian (Shaw)"),
    Script::new("Shrd", 319, "Sharada, Śāradā"),
    Script::new("Sidd", 302, "Siddham, Siddhaṃ, Siddhamātṛkā"),
    Script::new("Sind", 318, "Khudawadi, Sindhi"),
    Script::new("Sinh", 348, "Sinhala"),
    Script::new("Sogd", 141, "Sogdian").right_to_left(),
    Script::new("Sogo", 142, "Old Sogdian").right_to_left(),
    Script::new("Sora", 398, "Sora Sompeng"),
    Script::new("Soyo", 329, "Soyombo"),
    Script::new("Sund", 362, "Sundanese"),
    Script::new("Sylo", 316, "Syloti Nagri"),
    Script::new("Syrc", 135, "Syriac").right_to_left(),
    Script::new("Syre", 138, "Syriac (Estrangelo variant)").right_to_left(),
    Script::new("Syrj", 137, "Syriac (Western variant)").right_to_left(),
    Script::new("Syrn", 136, "Syriac (Eastern variant)").right_to_left(),
    Script::new("Tagb", 373, "Tagbanwa"),
    Script::new("Takr", 321, "Takri, Ṭākrī, Ṭāṅkrī"),
    Script::new("Tale", 353, "Tai Le"),
    Script::new("Talu", 354, "New Tai Lue"),
    Script::new("Taml", 346, "Tamil"),
    Script::new("Tang", 520, "Tangut"),
    Script::new("Tavt", 359, "Tai Viet"),
    Script::new("Telu", 340, "Telugu"),
    Script::new("Teng", 290, "Tengwar"),
    Script::new("Tfng", 120, "Tifinagh (Berber)"),
    Script::new("Tglg", 370, "Tagalog (Baybayin, Alibata)"),
    Script::new("Thaa", 170, "Thaana").right_to_left(),
    Script::new("Thai", 352, "Thai"),
    Script::new("Tibt", 330, "Tibetan"),
    Script::new("Tirh", 326, "Tirhuta"),
    Script::new("Toto", 294, "Toto"),
    Script::new("Ugar", 40, "Ugaritic"),
    Script::new("Vaii", 470, "Vai"),
    Script::new("Visp", 280, "Visible Speech"),
    Script::new("Wara", 262, "Warang Citi (Varang Kshiti)"),
    Script::new("Wcho", 283, "Wancho"),
    Script::new("Wole", 480, "Woleai"),
    Script::new("Xpeo", 30, "Old Persian"),
    Script::new("Xsux", 20, "Cuneiform, Sumero-Akkadian"),
    Script::new("Yezi", 192, "Yezidi").right_to_left(),
    Script::new("Yiii", 460, "Yi"),
    Script::new(
        "Zanb",
        339,
        "Zanabazar Square (Zanabazarin Dörböljin Useg, Xewtee Dörböljin Bicig, Horizontal Square Script)",
    ),
    Script::new("Zinh", 994, "Code for inherited script"),
    Script::new("Zmth", 995, "Mathematical notation"),
    Script::new("Zsye", 993, "Symbols (Emoji variant)"),
    Script::new("Zsym", 996, "Symbols"),
    Script::new("Zxxx", 997, "Code for unwritten documents"),
    Script::new("Zyyy", 998, "Code for undetermined script"),
    Script::new("Zzzz", 999, "Code for uncoded script"),
];
