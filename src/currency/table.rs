// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 4217 table, sorted by alphabetic code. Withdrawn codes that still
//! turn up in archived data are kept and flagged.

use super::Currency;

pub(super) const UNDEFINED: &str = "UNDEFINED";

pub(crate) static CURRENCIES: &[Currency] = &[
    Currency::without_minor_unit(UNDEFINED, -1, "Undefined", &[]),
    Currency::new("AED", 784, 2, "UAE Dirham", &["AE"]),
    Currency::new("AFN", 971, 2, "Afghani", &["AF"]),
    Currency::new("ALL", 8, 2, "Lek", &["AL"]),
    Currency::new("AMD", 51, 2, "Armenian Dram", &["AM"]),
    Currency::new("ANG", 532, 2, "Netherlands Antillean Guilder", &["CW", "SX"]),
    Currency::new("AOA", 973, 2, "Kwanza", &["AO"]),
    Currency::new("ARS", 32, 2, "Argentine Peso", &["AR"]),
    Currency::new(
        "AUD",
        36,
        2,
        "Australian Dollar",
        &["AU", "CX", "CC", "HM", "KI", "NR", "NF", "TV"],
    ),
    Currency::new("AWG", 533, 2, "Aruban Florin", &["AW"]),
    Currency::new("AZN", 944, 2, "Azerbaijan Manat", &["AZ"]),
    Currency::new("BAM", 977, 2, "Convertible Mark", &["BA"]),
    Currency::new("BBD", 52, 2, "Barbados Dollar", &["BB"]),
    Currency::new("BDT", 50, 2, "Taka", &["BD"]),
    Currency::new("BGN", 975, 2, "Bulgarian Lev", &["BG"]),
    Currency::new("BHD", 48, 3, "Bahraini Dinar", &["BH"]),
    Currency::new("BIF", 108, 0, "Burundi Franc", &["BI"]),
    Currency::new("BMD", 60, 2, "Bermudian Dollar", &["BM"]),
    Currency::new("BND", 96, 2, "Brunei Dollar", &["BN"]),
    Currency::new("BOB", 68, 2, "Boliviano", &["BO"]),
    Currency::new("BOV", 984, 2, "Mvdol", &["BO"]).fund(),
    Currency::new("BRL", 986, 2, "Brazilian Real", &["BR"]),
    Currency::new("BSD", 44, 2, "Bahamian Dollar", &["BS"]),
    Currency::new("BTN", 64, 2, "Ngultrum", &["BT"]),
    Currency::new("BWP", 72, 2, "Pula", &["BW"]),
    Currency::new("BYN", 933, 2, "Belarusian Ruble", &["BY"]),
    Currency::new("BYR", 974, 0, "Belarusian Ruble", &["BY"]).withdrawn(),
    Currency::new("BZD", 84, 2, "Belize Dollar", &["BZ"]),
    Currency::new("CAD", 124, 2, "Canadian Dollar", &["CA"]),
    Currency::new("CDF", 976, 2, "Congolese Franc", &["CD"]),
    Currency::new("CHE", 947, 2, "WIR Euro", &["CH"]).fund(),
    Currency::new("CHF", 756, 2, "Swiss Franc", &["CH", "LI"]),
    Currency::new("CHW", 948, 2, "WIR Franc", &["CH"]).fund(),
    Currency::new("CLF", 990, 4, "Unidad de Fomento", &["CL"]).fund(),
    Currency::new("CLP", 152, 0, "Chilean Peso", &["CL"]),
    Currency::new("CNY", 156, 2, "Yuan Renminbi", &["CN"]),
    Currency::new("COP", 170, 2, "Colombian Peso", &["CO"]),
    Currency::new("COU", 970, 2, "Unidad de Valor Real", &["CO"]).fund(),
    Currency::new("CRC", 188, 2, "Costa Rican Colon", &["CR"]),
    Currency::new("CUC", 931, 2, "Peso Convertible", &["CU"]),
    Currency::new("CUP", 192, 2, "Cuban Peso", &["CU"]),
    Currency::new("CVE", 132, 2, "Cabo Verde Escudo", &["CV"]),
    Currency::new("CZK", 203, 2, "Czech Koruna", &["CZ"]),
    Currency::new("DJF", 262, 0, "Djibouti Franc", &["DJ"]),
    Currency::new("DKK", 208, 2, "Danish Krone", &["DK", "FO", "GL"]),
    Currency::new("DOP", 214, 2, "Dominican Peso", &["DO"]),
    Currency::new("DZD", 12, 2, "Algerian Dinar", &["DZ"]),
    Currency::new("EEK", 233, 2, "Kroon", &["EE"]).withdrawn(),
    Currency::new("EGP", 818, 2, "Egyptian Pound", &["EG"]),
    Currency::new("ERN", 232, 2, "Nakfa", &["ER"]),
    Currency::new("ETB", 230, 2, "Ethiopian Birr", &["ET"]),
    Currency::new(
        "EUR",
        978,
        2,
        "Euro",
        &[
            "AD", "AT", "AX", "BE", "BL", "CY", "DE", "EE", "ES", "FI", "FR", "GF", "GP", "GR",
            "HR", "IE", "IT", "LT", "LU", "LV", "MC", "ME", "MF", "MQ", "MT", "NL", "PM", "PT",
            "RE", "SI", "SK", "SM", "TF", "VA", "XK", "YT",
        ],
    ),
    Currency::new("FJD", 242, 2, "Fiji Dollar", &["FJ"]),
    Currency::new("FKP", 238, 2, "Falkland Islands Pound", &["FK"]),
    Currency::new("GBP", 826, 2, "Pound Sterling", &["GB", "GG", "IM", "JE"]),
    Currency::new("GEL", 981, 2, "Lari", &["GE"]),
    Currency::new("GHS", 936, 2, "Ghana Cedi", &["GH"]),
    Currency::new("GIP", 292, 2, "Gibraltar Pound", &["GI"]),
    Currency::new("GMD", 270, 2, "Dalasi", &["GM"]),
    Currency::new("GNF", 324, 0, "Guinean Franc", &["GN"]),
    Currency::new("GTQ", 320, 2, "Quetzal", &["GT"]),
    Currency::new("GYD", 328, 2, "Guyana Dollar", &["GY"]),
    Currency::new("HKD", 344, 2, "Hong Kong Dollar", &["HK"]),
    Currency::new("HNL", 340, 2, "Lempira", &["HN"]),
    Currency::new("HRK", 191, 2, "Kuna", &["HR"]).withdrawn(),
    Currency::new("HTG", 332, 2, "Gourde", &["HT"]),
    Currency::new("HUF", 348, 2, "Forint", &["HU"]),
    Currency::new("IDR", 360, 2, "Rupiah", &["ID"]),
    Currency::new("ILS", 376, 2, "New Israeli Sheqel", &["IL"]),
    Currency::new("INR", 356, 2, "Indian Rupee", &["IN", "BT"]),
    Currency::new("IQD", 368, 3, "Iraqi Dinar", &["IQ"]),
    Currency::new("IRR", 364, 2, "Iranian Rial", &["IR"]),
    Currency::new("ISK", 352, 0, "Iceland Krona", &["IS"]),
    Currency::new("JMD", 388, 2, "Jamaican Dollar", &["JM"]),
    Currency::new("JOD", 400, 3, "Jordanian Dinar", &["JO"]),
    Currency::new("JPY", 392, 0, "Yen", &["JP"]),
    Currency::new("KES", 404, 2, "Kenyan Shilling", &["KE"]),
    Currency::new("KGS", 417, 2, "Som", &["KG"]),
    Currency::new("KHR", 116, 2, "Riel", &["KH"]),
    Currency::new("KMF", 174, 0, "Comorian Franc", &["KM"]),
    Currency::new("KPW", 408, 2, "North Korean Won", &["KP"]),
    Currency::new("KRW", 410, 0, "Won", &["KR"]),
    Currency::new("KWD", 414, 3, "Kuwaiti Dinar", &["KW"]),
    Currency::new("KYD", 136, 2, "Cayman Islands Dollar", &["KY"]),
    Currency::new("KZT", 398, 2, "Tenge", &["KZ"]),
    Currency::new("LAK", 418, 2, "Lao Kip", &["LA"]),
    Currency::new("LBP", 422, 2, "Lebanese Pound", &["LB"]),
    Currency::new("LKR", 144, 2, "Sri Lanka Rupee", &["LK"]),
    Currency::new("LRD", 430, 2, "Liberian Dollar", &["LR"]),
    Currency::new("LSL", 426, 2, "Loti", &["LS"]),
    Currency::new("LTL", 440, 2, "Lithuanian Litas", &["LT"]).withdrawn(),
    Currency::new("LVL", 428, 2, "Latvian Lats", &["LV"]).withdrawn(),
    Currency::new("LYD", 434, 3, "Libyan Dinar", &["LY"]),
    Currency::new("MAD", 504, 2, "Moroccan Dirham", &["MA", "EH"]),
    Currency::new("MDL", 498, 2, "Moldovan Leu", &["MD"]),
    Currency::new("MGA", 969, 2, "Malagasy Ariary", &["MG"]),
    Currency::new("MKD", 807, 2, "Denar", &["MK"]),
    Currency::new("MMK", 104, 2, "Kyat", &["MM"]),
    Currency::new("MNT", 496, 2, "Tugrik", &["MN"]),
    Currency::new("MOP", 446, 2, "Pataca", &["MO"]),
    Currency::new("MRO", 478, 2, "Ouguiya", &["MR"]).withdrawn(),
    Currency::new("MRU", 929, 2, "Ouguiya", &["MR"]),
    Currency::new("MUR", 480, 2, "Mauritius Rupee", &["MU"]),
    Currency::new("MVR", 462, 2, "Rufiyaa", &["MV"]),
    Currency::new("MWK", 454, 2, "Malawi Kwacha", &["MW"]),
    Currency::new("MXN", 484, 2, "Mexican Peso", &["MX"]),
    Currency::new("MXV", 979, 2, "Mexican Unidad de Inversion (UDI)", &["MX"]).fund(),
    Currency::new("MYR", 458, 2, "Malaysian Ringgit", &["MY"]),
    Currency::new("MZN", 943, 2, "Mozambique Metical", &["MZ"]),
    Currency::new("NAD", 516, 2, "Namibia Dollar", &["NA"]),
    Currency::new("NGN", 566, 2, "Naira", &["NG"]),
    Currency::new("NIO", 558, 2, "Cordoba Oro", &["NI"]),
    Currency::new("NOK", 578, 2, "Norwegian Krone", &["NO", "BV", "SJ"]),
    Currency::new("NPR", 524, 2, "Nepalese Rupee", &["NP"]),
    Currency::new("NZD", 554, 2, "New Zealand Dollar", &["NZ", "CK", "NU", "PN", "TK"]),
    Currency::new("OMR", 512, 3, "Rial Omani", &["OM"]),
    Currency::new("PAB", 590, 2, "Balboa", &["PA"]),
    Currency::new("PEN", 604, 2, "Sol", &["PE"]),
    Currency::new("PGK", 598, 2, "Kina", &["PG"]),
    Currency::new("PHP", 608, 2, "Philippine Peso", &["PH"]),
    Currency::new("PKR", 586, 2, "Pakistan Rupee", &["PK"]),
    Currency::new("PLN", 985, 2, "Zloty", &["PL"]),
    Currency::new("PYG", 600, 0, "Guarani", &["PY"]),
    Currency::new("QAR", 634, 2, "Qatari Rial", &["QA"]),
    Currency::new("RON", 946, 2, "Romanian Leu", &["RO"]),
    Currency::new("RSD", 941, 2, "Serbian Dinar", &["RS"]),
    Currency::new("RUB", 643, 2, "Russian Ruble", &["RU"]),
    Currency::new("RUR", 810, 2, "Russian Ruble", &["RU"]).withdrawn(),
    Currency::new("RWF", 646, 0, "Rwanda Franc", &["RW"]),
    Currency::new("SAR", 682, 2, "Saudi Riyal", &["SA"]),
    Currency::new("SBD", 90, 2, "Solomon Islands Dollar", &["SB"]),
    Currency::new("SCR", 690, 2, "Seychelles Rupee", &["SC"]),
    Currency::new("SDG", 938, 2, "Sudanese Pound", &["SD"]),
    Currency::new("SEK", 752, 2, "Swedish Krona", &["SE"]),
    Currency::new("SGD", 702, 2, "Singapore Dollar", &["SG"]),
    Currency::new("SHP", 654, 2, "Saint Helena Pound", &["SH"]),
    Currency::new("SKK", 703, 2, "Slovak Koruna", &["SK"]).withdrawn(),
    Currency::new("SLE", 925, 2, "Leone", &["SL"]),
    Currency::new("SLL", 694, 2, "Leone", &["SL"]).withdrawn(),
    Currency::new("SOS", 706, 2, "Somali Shilling", &["SO"]),
    Currency::new("SRD", 968, 2, "Surinam Dollar", &["SR"]),
    Currency::new("SSP", 728, 2, "South Sudanese Pound", &["SS"]),
    Currency::new("STD", 678, 2, "Dobra", &["ST"]).withdrawn(),
    Currency::new("STN", 930, 2, "Dobra", &["ST"]),
    Currency::new("SVC", 222, 2, "El Salvador Colon", &["SV"]),
    Currency::new("SYP", 760, 2, "Syrian Pound", &["SY"]),
    Currency::new("SZL", 748, 2, "Lilangeni", &["SZ"]),
    Currency::new("THB", 764, 2, "Baht", &["TH"]),
    Currency::new("TJS", 972, 2, "Somoni", &["TJ"]),
    Currency::new("TMT", 934, 2, "Turkmenistan New Manat", &["TM"]),
    Currency::new("TND", 788, 3, "Tunisian Dinar", &["TN"]),
    Currency::new("TOP", 776, 2, "Pa'anga", &["TO"]),
    Currency::new("TRY", 949, 2, "Turkish Lira", &["TR"]),
    Currency::new("TTD", 780, 2, "Trinidad and Tobago Dollar", &["TT"]),
    Currency::new("TWD", 901, 2, "New Taiwan Dollar", &["TW"]),
    Currency::new("TZS", 834, 2, "Tanzanian Shilling", &["TZ"]),
    Currency::new("UAH", 980, 2, "Hryvnia", &["UA"]),
    Currency::new("UGX", 800, 0, "Uganda Shilling", &["UG"]),
    Currency::new(
        "USD",
        840,
        2,
        "US Dollar",
        &[
            "US", "AS", "BQ", "EC", "FM", "GU", "IO", "MH", "MP", "PR", "PW", "TC", "TL", "UM",
            "VG", "VI",
        ],
    ),
    Currency::new("USN", 997, 2, "US Dollar (Next day)", &["US"]).fund(),
    Currency::new("UYI", 940, 0, "Uruguay Peso en Unidades Indexadas (UI)", &["UY"]).fund(),
    Currency::new("UYU", 858, 2, "Peso Uruguayo", &["UY"]),
    Currency::new("UYW", 927, 4, "Unidad Previsional", &["UY"]),
    Currency::new("UZS", 860, 2, "Uzbekistan Sum", &["UZ"]),
    Currency::new("VED", 926, 2, "Bolívar Soberano", &["VE"]),
    Currency::new("VEF", 937, 2, "Bolívar", &["VE"]).withdrawn(),
    Currency::new("VES", 928, 2, "Bolívar Soberano", &["VE"]),
    Currency::new("VND", 704, 0, "Dong", &["VN"]),
    Currency::new("VUV", 548, 0, "Vatu", &["VU"]),
    Currency::new("WST", 882, 2, "Tala", &["WS"]),
    Currency::new("XAF", 950, 0, "CFA Franc BEAC", &["CM", "CF", "CG", "GA", "GQ", "TD"]),
    Currency::without_minor_unit("XAG", 961, "Silver", &[]).precious_metal(),
    Currency::without_minor_unit("XAU", 959, "Gold", &[]).precious_metal(),
    Currency::without_minor_unit(
        "XBA",
        955,
        "Bond Markets Unit European Composite Unit (EURCO)",
        &[],
    ),
    Currency::without_minor_unit(
        "XBB",
        956,
        "Bond Markets Unit European Monetary Unit (E.M.U.-6)",
        &[],
    ),
    Currency::without_minor_unit(
        "XBC",
        957,
        "Bond Markets Unit European Unit of Account 9 (E.U.A.-9)",
        &[],
    ),
    Currency::without_minor_unit(
        "XBD",
        958,
        "Bond Markets Unit European Unit of Account 17 (E.U.A.-17)",
        &[],
    ),
    Currency::new(
        "XCD",
        951,
        2,
        "East Caribbean Dollar",
        &["AI", "AG", "DM", "GD", "MS", "KN", "LC", "VC"],
    ),
    Currency::without_minor_unit("XDR", 960, "SDR (Special Drawing Right)", &[]),
    Currency::new(
        "XOF",
        952,
        0,
        "CFA Franc BCEAO",
        &["BJ", "BF", "CI", "GW", "ML", "NE", "SN", "TG"],
    ),
    Currency::without_minor_unit("XPD", 964, "Palladium", &[]).precious_metal(),
    Currency::new("XPF", 953, 0, "CFP Franc", &["PF", "NC", "WF"]),
    Currency::without_minor_unit("XPT", 962, "Platinum", &[]).precious_metal(),
    Currency::without_minor_unit("XSU", 994, "Sucre", &[]),
    Currency::without_minor_unit(
        "XTS",
        963,
        "Codes specifically reserved for testing purposes",
        &[],
    ),
    Currency::without_minor_unit("XUA", 965, "ADB Unit of Account", &[]),
    Currency::without_minor_unit(
        "XXX",
        999,
        "The codes assigned for transactions where no currency is involved",
        &[],
    ),
    Currency::new("YER", 886, 2, "Yemeni Rial", &["YE"]),
    Currency::new("ZAR", 710, 2, "Rand", &["ZA", "LS", "NA"]),
    Currency::new("ZMK", 894, 2, "Zambian Kwacha", &["ZM"]).withdrawn(),
    Currency::new("ZMW", 967, 2, "Zambian Kwacha", &["ZM"]),
    Currency::new("ZWL", 932, 2, "Zimbabwe Dollar", &["ZW"]),
];
