// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 3166-1 table, sorted by alpha-2 code.

use super::{Assignment, Country};

pub(super) const UNDEFINED: &str = "UNDEFINED";

pub(crate) static COUNTRIES: &[Country] = &[
    Country::reserved(UNDEFINED, None, -1, "Undefined", Assignment::NotUsed),
    Country::reserved(
        "AC",
        Some("ASC"),
        -1,
        "Ascension Island",
        Assignment::ExceptionallyReserved,
    ),
    Country::official("AD", "AND", 20, "Andorra"),
    Country::official("AE", "ARE", 784, "United Arab Emirates"),
    Country::official("AF", "AFG", 4, "Afghanistan"),
    Country::official("AG", "ATG", 28, "Antigua and Barbuda"),
    Country::official("AI", "AIA", 660, "Anguilla"),
    Country::official("AL", "ALB", 8, "Albania"),
    Country::official("AM", "ARM", 51, "Armenia"),
    Country::reserved(
        "AN",
        Some("ANT"),
        530,
        "Netherlands Antilles",
        Assignment::TransitionallyReserved,
    ),
    Country::official("AO", "AGO", 24, "Angola"),
    Country::official("AQ", "ATA", 10, "Antarctica"),
    Country::official("AR", "ARG", 32, "Argentina"),
    Country::official("AS", "ASM", 16, "American Samoa"),
    Country::official("AT", "AUT", 40, "Austria"),
    Country::official("AU", "AUS", 36, "Australia"),
    Country::official("AW", "ABW", 533, "Aruba"),
    Country::official("AX", "ALA", 248, "Åland Islands"),
    Country::official("AZ", "AZE", 31, "Azerbaijan"),
    Country::official("BA", "BIH", 70, "Bosnia and Herzegovina"),
    Country::official("BB", "BRB", 52, "Barbados"),
    Country::official("BD", "BGD", 50, "Bangladesh"),
    Country::official("BE", "BEL", 56, "Belgium"),
    Country::official("BF", "BFA", 854, "Burkina Faso"),
    Country::official("BG", "BGR", 100, "Bulgaria"),
    Country::official("BH", "BHR", 48, "Bahrain"),
    Country::official("BI", "BDI", 108, "Burundi"),
    Country::official("BJ", "BEN", 204, "Benin"),
    Country::official("BL", "BLM", 652, "Saint Barthélemy"),
    Country::official("BM", "BMU", 60, "Bermuda"),
    Country::official("BN", "BRN", 96, "Brunei Darussalam"),
    Country::official("BO", "BOL", 68, "Bolivia, Plurinational State of"),
    Country::official("BQ", "BES", 535, "Bonaire, Sint Eustatius and Saba"),
    Country::official("BR", "BRA", 76, "Brazil"),
    Country::official("BS", "BHS", 44, "Bahamas"),
    Country::official("BT", "BTN", 64, "Bhutan"),
    Country::reserved(
        "BU",
        Some("BUR"),
        -1,
        "Burma",
        Assignment::TransitionallyReserved,
    ),
    Country::official("BV", "BVT", 74, "Bouvet Island"),
    Country::official("BW", "BWA", 72, "Botswana"),
    Country::official("BY", "BLR", 112, "Belarus"),
    Country::official("BZ", "BLZ", 84, "Belize"),
    Country::official("CA", "CAN", 124, "Canada"),
    Country::official("CC", "CCK", 166, "Cocos (Keeling) Islands"),
    Country::official("CD", "COD", 180, "Congo, the Democratic Republic of the"),
    Country::official("CF", "CAF", 140, "Central African Republic"),
    Country::official("CG", "COG", 178, "Congo"),
    Country::official("CH", "CHE", 756, "Switzerland"),
    Country::official("CI", "CIV", 384, "Côte d'Ivoire"),
    Country::official("CK", "COK", 184, "Cook Islands"),
    Country::official("CL", "CHL", 152, "Chile"),
    Country::official("CM", "CMR", 120, "Cameroon"),
    Country::official("CN", "CHN", 156, "China"),
    Country::official("CO", "COL", 170, "Colombia"),
    Country::reserved(
        "CP",
        Some("CPT"),
        -1,
        "Clipperton Island",
        Assignment::ExceptionallyReserved,
    ),
    Country::official("CR", "CRI", 188, "Costa Rica"),
    Country::reserved(
        "CS",
        Some("SCG"),
        891,
        "Serbia and Montenegro",
        Assignment::TransitionallyReserved,
    ),
    Country::official("CU", "CUB", 192, "Cuba"),
    Country::official("CV", "CPV", 132, "Cabo Verde"),
    Country::official("CW", "CUW", 531, "Curaçao"),
    Country::official("CX", "CXR", 162, "Christmas Island"),
    Country::official("CY", "CYP", 196, "Cyprus"),
    Country::official("CZ", "CZE", 203, "Czechia"),
    Country::official("DE", "DEU", 276, "Germany"),
    Country::reserved(
        "DG",
        Some("DGA"),
        -1,
        "Diego Garcia",
        Assignment::ExceptionallyReserved,
    ),
    Country::official("DJ", "DJI", 262, "Djibouti"),
    Country::official("DK", "DNK", 208, "Denmark"),
    Country::official("DM", "DMA", 212, "Dominica"),
    Country::official("DO", "DOM", 214, "Dominican Republic"),
    Country::official("DZ", "DZA", 12, "Algeria"),
    Country::reserved(
        "EA",
        None,
        -1,
        "Ceuta, Melilla",
        Assignment::ExceptionallyReserved,
    ),
    Country::official("EC", "ECU", 218, "Ecuador"),
    Country::official("EE", "EST", 233, "Estonia"),
    Country::official("EG", "EGY", 818, "Egypt"),
    Country::official("EH", "ESH", 732, "Western Sahara"),
    Country::official("ER", "ERI", 232, "Eritrea"),
    Country::official("ES", "ESP", 724, "Spain"),
    Country::official("ET", "ETH", 231, "Ethiopia"),
    Country::reserved(
        "EU",
        None,
        -1,
        "European Union",
        Assignment::ExceptionallyReserved,
    ),
    Country::reserved(
        "EZ",
        None,
        -1,
        "Eurozone",
        Assignment::ExceptionallyReserved,
    ),
    Country::official("FI", "FIN", 246, "Finland"),
    Country::official("FJ", "FJI", 242, "Fiji"),
    Country::official("FK", "FLK", 238, "Falkland Islands (Malvinas)"),
    Country::official("FM", "FSM", 583, "Micronesia, Federated States of"),
    Country::official("FO", "FRO", 234, "Faroe Islands"),
    Country::official("FR", "FRA", 250, "France"),
    Country::reserved(
        "FX",
        Some("FXX"),
        249,
        "France, Metropolitan",
        Assignment::ExceptionallyReserved,
    ),
    Country::official("GA", "GAB", 266, "Gabon"),
    Country::official("GB", "GBR", 826, "United Kingdom"),
    Country::official("GD", "GRD", 308, "Grenada"),
    Country::official("GE", "GEO", 268, "Georgia"),
    Country::official("GF", "GUF", 254, "French Guiana"),
    Country::official("GG", "GGY", 831, "Guernsey"),
    Country::official("GH", "GHA", 288, "Ghana"),
    Country::official("GI", "GIB", 292, "Gibraltar"),
    Country::official("GL", "GRL", 304, "Greenland"),
    Country::official("GM", "GMB", 270, "Gambia"),
    Country::official("GN", "GIN", 324, "Guinea"),
    Country::official("GP", "GLP", 312, "Guadeloupe"),
    Country::official("GQ", "GNQ", 226, "Equatorial Guinea"),
    Country::official("GR", "GRC", 300, "Greece"),
    Country::official("GS", "SGS", 239, "South Georgia and the South Sandwich Islands"),
    Country::official("GT", "GTM", 320, "Guatemala"),
    Country::official("GU", "GUM", 316, "Guam"),
    Country::official("GW", "GNB", 624, "Guinea-Bissau"),
    Country::official("GY", "GUY", 328, "Guyana"),
    Country::official("HK", "HKG", 344, "Hong Kong"),
    Country::official("HM", "HMD", 334, "Heard Island and McDonald Islands"),
    Country::official("HN", "HND", 340, "Honduras"),
    Country::official("HR", "HRV", 191, "Croatia"),
    Country::official("HT", "HTI", 332, "Haiti"),
    Country::official("HU", "HUN", 348, "Hungary"),
    Country::reserved(
        "IC",
        None,
        -1,
        "Canary Islands",
        Assignment::ExceptionallyReserved,
    ),
    Country::official("ID", "IDN", 360, "Indonesia"),
    Country::official("IE", "IRL", 372, "Ireland"),
    Country::official("IL", "ISR", 376, "Israel"),
    Country::official("IM", "IMN", 833, "Isle of Man"),
    Country::official("IN", "IND", 356, "India"),
    Country::official("IO", "IOT", 86, "British Indian Ocean Territory"),
    Country::official("IQ", "IRQ", 368, "Iraq"),
    Country::official("IR", "IRN", 364, "Iran, Islamic Republic of"),
    Country::official("IS", "ISL", 352, "Iceland"),
    Country::official("IT", "ITA", 380, "Italy"),
    Country::official("JE", "JEY", 832, "Jersey"),
    Country::official("JM", "JAM", 388, "Jamaica"),
    Country::official("JO", "JOR", 400, "Jordan"),
    Country::official("JP", "JPN", 392, "Japan"),
    Country::official("KE", "KEN", 404, "Kenya"),
    Country::official("KG", "KGZ", 417, "Kyrgyzstan"),
    Country::official("KH", "KHM", 116, "Cambodia"),
    Country::official("KI", "KIR", 296, "Kiribati"),
    Country::official("KM", "COM", 174, "Comoros"),
    Country::official("KN", "KNA", 659, "Saint Kitts and Nevis"),
    Country::official("KP", "PRK", 408, "Korea, Democratic People's Republic of"),
    Country::official("KR", "KOR", 410, "Korea, Republic of"),
    Country::official("KW", "KWT", 414, "Kuwait"),
    Country::official("KY", "CYM", 136, "Cayman Islands"),
    Country::official("KZ", "KAZ", 398, "Kazakhstan"),
    Country::official("LA", "LAO", 418, "Lao People's Democratic Republic"),
    Country::official("LB", "LBN", 422, "Lebanon"),
    Country::official("LC", "LCA", 662, "Saint Lucia"),
    Country::official("LI", "LIE", 438, "Liechtenstein"),
    Country::official("LK", "LKA", 144, "Sri Lanka"),
    Country::official("LR", "LBR", 430, "Liberia"),
    Country::official("LS", "LSO", 426, "Lesotho"),
    Country::official("LT", "LTU", 440, "Lithuania"),
    Country::official("LU", "LUX", 442, "Luxembourg"),
    Country::official("LV", "LVA", 428, "Latvia"),
    Country::official("LY", "LBY", 434, "Libya"),
    Country::official("MA", "MAR", 504, "Morocco"),
    Country::official("MC", "MCO", 492, "Monaco"),
    Country::official("MD", "MDA", 498, "Moldova, Republic of"),
    Country::official("ME", "MNE", 499, "Montenegro"),
    Country::official("MF", "MAF", 663, "Saint Martin (French part)"),
    Country::official("MG", "MDG", 450, "Madagascar"),
    Country::official("MH", "MHL", 584, "Marshall Islands"),
    Country::official("MK", "MKD", 807, "North Macedonia"),
    Country::official("ML", "MLI", 466, "Mali"),
    Country::official("MM", "MMR", 104, "Myanmar"),
    Country::official("MN", "MNG", 496, "Mongolia"),
    Country::official("MO", "MAC", 446, "Macao"),
    Country::official("MP", "MNP", 580, "Northern Mariana Islands"),
    Country::official("MQ", "MTQ", 474, "Martinique"),
    Country::official("MR", "MRT", 478, "Mauritania"),
    Country::official("MS", "MSR", 500, "Montserrat"),
    Country::official("MT", "MLT", 470, "Malta"),
    Country::official("MU", "MUS", 480, "Mauritius"),
    Country::official("MV", "MDV", 462, "Maldives"),
    Country::official("MW", "MWI", 454, "Malawi"),
    Country::official("MX", "MEX", 484, "Mexico"),
    Country::official("MY", "MYS", 458, "Malaysia"),
    Country::official("MZ", "MOZ", 508, "Mozambique"),
    Country::official("NA", "NAM", 516, "Namibia"),
    Country::official("NC", "NCL", 540, "New Caledonia"),
    Country::official("NE", "NER", 562, "Niger"),
    Country::official("NF", "NFK", 574, "Norfolk Island"),
    Country::official("NG", "NGA", 566, "Nigeria"),
    Country::official("NI", "NIC", 558, "Nicaragua"),
    Country::official("NL", "NLD", 528, "Netherlands"),
    Country::official("NO", "NOR", 578, "Norway"),
    Country::official("NP", "NPL", 524, "Nepal"),
    Country::official("NR", "NRU", 520, "Nauru"),
    Country::reserved(
        "NT",
        Some("NTZ"),
        536,
        "Neutral Zone",
        Assignment::TransitionallyReserved,
    ),
    Country::official("NU", "NIU", 570, "Niue"),
    Country::official("NZ", "NZL", 554, "New Zealand"),
    Country::official("OM", "OMN", 512, "Oman"),
    Country::official("PA", "PAN", 591, "Panama"),
    Country::official("PE", "PER", 604, "Peru"),
    Country::official("PF", "PYF", 258, "French Polynesia"),
    Country::official("PG", "PNG", 598, "Papua New Guinea"),
    Country::official("PH", "PHL", 608, "Philippines"),
    Country::official("PK", "PAK", 586, "Pakistan"),
    Country::official("PL", "POL", 616, "Poland"),
    Country::official("PM", "SPM", 666, "Saint Pierre and Miquelon"),
    Country::official("PN", "PCN", 612, "Pitcairn"),
    Country::official("PR", "PRI", 630, "Puerto Rico"),
    Country::official("PS", "PSE", 275, "Palestine, State of"),
    Country::official("PT", "PRT", 620, "Portugal"),
    Country::official("PW", "PLW", 585, "Palau"),
    Country::official("PY", "PRY", 600, "Paraguay"),
    Country::official("QA", "QAT", 634, "Qatar"),
    Country::official("RE", "REU", 638, "Réunion"),
    Country::official("RO", "ROU", 642, "Romania"),
    Country::official("RS", "SRB", 688, "Serbia"),
    Country::official("RU", "RUS", 643, "Russian Federation"),
    Country::official("RW", "RWA", 646, "Rwanda"),
    Country::official("SA", "SAU", 682, "Saudi Arabia"),
    Country::official("SB", "SLB", 90, "Solomon Islands"),
    Country::official("SC", "SYC", 690, "Seychelles"),
    Country::official("SD", "SDN", 729, "Sudan"),
    Country::official("SE", "SWE", 752, "Sweden"),
    Country::official("SG", "SGP", 702, "Singapore"),
    Country::official("SH", "SHN", 654, "Saint Helena, Ascension and Tristan da Cunha"),
    Country::official("SI", "SVN", 705, "Slovenia"),
    Country::official("SJ", "SJM", 744, "Svalbard and Jan Mayen"),
    Country::official("SK", "SVK", 703, "Slovakia"),
    Country::official("SL", "SLE", 694, "Sierra Leone"),
    Country::official("SM", "SMR", 674, "San Marino"),
    Country::official("SN", "SEN", 686, "Senegal"),
    Country::official("SO", "SOM", 706, "Somalia"),
    Country::official("SR", "SUR", 740, "Suriname"),
    Country::official("SS", "SSD", 728, "South Sudan"),
    Country::official("ST", "STP", 678, "Sao Tome and Principe"),
    Country::reserved(
        "SU",
        Some("SUN"),
        810,
        "USSR",
        Assignment::ExceptionallyReserved,
    ),
    Country::official("SV", "SLV", 222, "El Salvador"),
    Country::official("SX", "SXM", 534, "Sint Maarten (Dutch part)"),
    Country::official("SY", "SYR", 760, "Syrian Arab Republic"),
    Country::official("SZ", "SWZ", 748, "Eswatini"),
    Country::reserved(
        "TA",
        Some("TAA"),
        -1,
        "Tristan da Cunha",
        Assignment::ExceptionallyReserved,
    ),
    Country::official("TC", "TCA", 796, "Turks and Caicos Islands"),
    Country::official("TD", "TCD", 148, "Chad"),
    Country::official("TF", "ATF", 260, "French Southern Territories"),
    Country::official("TG", "TGO", 768, "Togo"),
    Country::official("TH", "THA", 764, "Thailand"),
    Country::official("TJ", "TJK", 762, "Tajikistan"),
    Country::official("TK", "TKL", 772, "Tokelau"),
    Country::official("TL", "TLS", 626, "Timor-Leste"),
    Country::official("TM", "TKM", 795, "Turkmenistan"),
    Country::official("TN", "TUN", 788, "Tunisia"),
    Country::official("TO", "TON", 776, "Tonga"),
    Country::reserved(
        "TP",
        Some("TMP"),
        -1,
        "East Timor",
        Assignment::TransitionallyReserved,
    ),
    Country::official("TR", "TUR", 792, "Türkiye"),
    Country::official("TT", "TTO", 780, "Trinidad and Tobago"),
    Country::official("TV", "TUV", 798, "Tuvalu"),
    Country::official("TW", "TWN", 158, "Taiwan, Province of China"),
    Country::official("TZ", "TZA", 834, "Tanzania, United Republic of"),
    Country::official("UA", "UKR", 804, "Ukraine"),
    Country::official("UG", "UGA", 800, "Uganda"),
    Country::reserved(
        "UK",
        None,
        -1,
        "United Kingdom",
        Assignment::ExceptionallyReserved,
    ),
    Country::official("UM", "UMI", 581, "United States Minor Outlying Islands"),
    Country::reserved(
        "UN",
        None,
        -1,
        "United Nations",
        Assignment::ExceptionallyReserved,
    ),
    Country::official("US", "USA", 840, "United States of America"),
    Country::official("UY", "URY", 858, "Uruguay"),
    Country::official("UZ", "UZB", 860, "Uzbekistan"),
    Country::official("VA", "VAT", 336, "Holy See (Vatican City State)"),
    Country::official("VC", "VCT", 670, "Saint Vincent and the Grenadines"),
    Country::official("VE", "VEN", 862, "Venezuela, Bolivarian Republic of"),
    Country::official("VG", "VGB", 92, "Virgin Islands, British"),
    Country::official("VI", "VIR", 850, "Virgin Islands, U.S."),
    Country::official("VN", "VNM", 704, "Viet Nam"),
    Country::official("VU", "VUT", 548, "Vanuatu"),
    Country::official("WF", "WLF", 876, "Wallis and Futuna"),
    Country::official("WS", "WSM", 882, "Samoa"),
    Country::reserved(
        "XK",
        Some("XKX"),
        -1,
        "Kosovo, Republic of",
        Assignment::UserAssigned,
    ),
    Country::official("YE", "YEM", 887, "Yemen"),
    Country::official("YT", "MYT", 175, "Mayotte"),
    Country::reserved(
        "YU",
        Some("YUG"),
        -1,
        "Yugoslavia",
        Assignment::TransitionallyReserved,
    ),
    Country::official("ZA", "ZAF", 710, "South Africa"),
    Country::official("ZM", "ZMB", 894, "Zambia"),
    Country::official("ZW", "ZWE", 716, "Zimbabwe"),
];
