//! Static code tables
//!
//! Countries are ISO 3166-1 alpha-2 codes (lower case) plus the handful of
//! non-standard codes playlist collections use for their own files. Languages
//! are ISO 639-1 codes with their ISO 639-3 (terminology) alpha-3 form.

/// Country code and English display name
pub struct CountryDescriptor {
    pub code: &'static str,
    pub name: &'static str,
}

/// Language codes and English display name
pub struct LanguageDescriptor {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
}

macro_rules! country {
    ($code:expr, $name:expr) => {
        CountryDescriptor {
            code: $code,
            name: $name,
        }
    };
}

macro_rules! language {
    ($alpha2:expr, $alpha3:expr, $name:expr) => {
        LanguageDescriptor {
            alpha2: $alpha2,
            alpha3: $alpha3,
            name: $name,
        }
    };
}

pub static COUNTRIES: &[CountryDescriptor] = &[
    country!("ad", "Andorra"),
    country!("ae", "United Arab Emirates"),
    country!("af", "Afghanistan"),
    country!("ag", "Antigua and Barbuda"),
    country!("al", "Albania"),
    country!("am", "Armenia"),
    country!("ao", "Angola"),
    country!("ar", "Argentina"),
    country!("at", "Austria"),
    country!("au", "Australia"),
    country!("aw", "Aruba"),
    country!("az", "Azerbaijan"),
    country!("ba", "Bosnia and Herzegovina"),
    country!("bb", "Barbados"),
    country!("bd", "Bangladesh"),
    country!("be", "Belgium"),
    country!("bf", "Burkina Faso"),
    country!("bg", "Bulgaria"),
    country!("bh", "Bahrain"),
    country!("bi", "Burundi"),
    country!("bj", "Benin"),
    country!("bn", "Brunei"),
    country!("bo", "Bolivia"),
    country!("br", "Brazil"),
    country!("bs", "Bahamas"),
    country!("bt", "Bhutan"),
    country!("bw", "Botswana"),
    country!("by", "Belarus"),
    country!("bz", "Belize"),
    country!("ca", "Canada"),
    country!("cd", "DR Congo"),
    country!("cf", "Central African Republic"),
    country!("cg", "Republic of the Congo"),
    country!("ch", "Switzerland"),
    country!("ci", "Ivory Coast"),
    country!("cl", "Chile"),
    country!("cm", "Cameroon"),
    country!("cn", "China"),
    country!("co", "Colombia"),
    country!("cr", "Costa Rica"),
    country!("cu", "Cuba"),
    country!("cv", "Cape Verde"),
    country!("cw", "Curacao"),
    country!("cy", "Cyprus"),
    country!("cz", "Czech Republic"),
    country!("de", "Germany"),
    country!("dj", "Djibouti"),
    country!("dk", "Denmark"),
    country!("dm", "Dominica"),
    country!("do", "Dominican Republic"),
    country!("dz", "Algeria"),
    country!("ec", "Ecuador"),
    country!("ee", "Estonia"),
    country!("eg", "Egypt"),
    country!("er", "Eritrea"),
    country!("es", "Spain"),
    country!("et", "Ethiopia"),
    country!("fi", "Finland"),
    country!("fj", "Fiji"),
    country!("fo", "Faroe Islands"),
    country!("fr", "France"),
    country!("ga", "Gabon"),
    country!("gb", "United Kingdom"),
    country!("gd", "Grenada"),
    country!("ge", "Georgia"),
    country!("gh", "Ghana"),
    country!("gl", "Greenland"),
    country!("gm", "Gambia"),
    country!("gn", "Guinea"),
    country!("gp", "Guadeloupe"),
    country!("gq", "Equatorial Guinea"),
    country!("gr", "Greece"),
    country!("gt", "Guatemala"),
    country!("gu", "Guam"),
    country!("gy", "Guyana"),
    country!("hk", "Hong Kong"),
    country!("hn", "Honduras"),
    country!("hr", "Croatia"),
    country!("ht", "Haiti"),
    country!("hu", "Hungary"),
    country!("id", "Indonesia"),
    country!("ie", "Ireland"),
    country!("il", "Israel"),
    country!("in", "India"),
    country!("iq", "Iraq"),
    country!("ir", "Iran"),
    country!("is", "Iceland"),
    country!("it", "Italy"),
    country!("jm", "Jamaica"),
    country!("jo", "Jordan"),
    country!("jp", "Japan"),
    country!("ke", "Kenya"),
    country!("kg", "Kyrgyzstan"),
    country!("kh", "Cambodia"),
    country!("km", "Comoros"),
    country!("kn", "Saint Kitts and Nevis"),
    country!("kp", "North Korea"),
    country!("kr", "South Korea"),
    country!("kw", "Kuwait"),
    country!("kz", "Kazakhstan"),
    country!("la", "Laos"),
    country!("lb", "Lebanon"),
    country!("lc", "Saint Lucia"),
    country!("li", "Liechtenstein"),
    country!("lk", "Sri Lanka"),
    country!("lr", "Liberia"),
    country!("ls", "Lesotho"),
    country!("lt", "Lithuania"),
    country!("lu", "Luxembourg"),
    country!("lv", "Latvia"),
    country!("ly", "Libya"),
    country!("ma", "Morocco"),
    country!("mc", "Monaco"),
    country!("md", "Moldova"),
    country!("me", "Montenegro"),
    country!("mg", "Madagascar"),
    country!("mk", "North Macedonia"),
    country!("ml", "Mali"),
    country!("mm", "Myanmar"),
    country!("mn", "Mongolia"),
    country!("mo", "Macao"),
    country!("mq", "Martinique"),
    country!("mr", "Mauritania"),
    country!("mt", "Malta"),
    country!("mu", "Mauritius"),
    country!("mv", "Maldives"),
    country!("mw", "Malawi"),
    country!("mx", "Mexico"),
    country!("my", "Malaysia"),
    country!("mz", "Mozambique"),
    country!("na", "Namibia"),
    country!("ne", "Niger"),
    country!("ng", "Nigeria"),
    country!("ni", "Nicaragua"),
    country!("nl", "Netherlands"),
    country!("no", "Norway"),
    country!("np", "Nepal"),
    country!("nz", "New Zealand"),
    country!("om", "Oman"),
    country!("pa", "Panama"),
    country!("pe", "Peru"),
    country!("pf", "French Polynesia"),
    country!("pg", "Papua New Guinea"),
    country!("ph", "Philippines"),
    country!("pk", "Pakistan"),
    country!("pl", "Poland"),
    country!("pr", "Puerto Rico"),
    country!("ps", "Palestine"),
    country!("pt", "Portugal"),
    country!("py", "Paraguay"),
    country!("qa", "Qatar"),
    country!("re", "Reunion"),
    country!("ro", "Romania"),
    country!("rs", "Serbia"),
    country!("ru", "Russia"),
    country!("rw", "Rwanda"),
    country!("sa", "Saudi Arabia"),
    country!("sc", "Seychelles"),
    country!("sd", "Sudan"),
    country!("se", "Sweden"),
    country!("sg", "Singapore"),
    country!("si", "Slovenia"),
    country!("sk", "Slovakia"),
    country!("sl", "Sierra Leone"),
    country!("sm", "San Marino"),
    country!("sn", "Senegal"),
    country!("so", "Somalia"),
    country!("sr", "Suriname"),
    country!("ss", "South Sudan"),
    country!("sv", "El Salvador"),
    country!("sy", "Syria"),
    country!("td", "Chad"),
    country!("tg", "Togo"),
    country!("th", "Thailand"),
    country!("tj", "Tajikistan"),
    country!("tm", "Turkmenistan"),
    country!("tn", "Tunisia"),
    country!("tr", "Turkey"),
    country!("tt", "Trinidad and Tobago"),
    country!("tw", "Taiwan"),
    country!("tz", "Tanzania"),
    country!("ua", "Ukraine"),
    country!("ug", "Uganda"),
    country!("us", "United States"),
    country!("uy", "Uruguay"),
    country!("uz", "Uzbekistan"),
    country!("va", "Vatican City"),
    country!("vc", "Saint Vincent and the Grenadines"),
    country!("ve", "Venezuela"),
    country!("vn", "Vietnam"),
    country!("xk", "Kosovo"),
    country!("ye", "Yemen"),
    country!("za", "South Africa"),
    country!("zm", "Zambia"),
    country!("zw", "Zimbabwe"),
    // Collection-specific codes
    country!("uk", "United Kingdom"),
    country!("int", "International"),
    country!("unsorted", "Unsorted"),
];

pub static LANGUAGES: &[LanguageDescriptor] = &[
    language!("af", "afr", "Afrikaans"),
    language!("am", "amh", "Amharic"),
    language!("ar", "ara", "Arabic"),
    language!("az", "aze", "Azerbaijani"),
    language!("be", "bel", "Belarusian"),
    language!("bg", "bul", "Bulgarian"),
    language!("bn", "ben", "Bengali"),
    language!("bs", "bos", "Bosnian"),
    language!("ca", "cat", "Catalan"),
    language!("cs", "ces", "Czech"),
    language!("cy", "cym", "Welsh"),
    language!("da", "dan", "Danish"),
    language!("de", "deu", "German"),
    language!("el", "ell", "Greek"),
    language!("en", "eng", "English"),
    language!("es", "spa", "Spanish"),
    language!("et", "est", "Estonian"),
    language!("eu", "eus", "Basque"),
    language!("fa", "fas", "Persian"),
    language!("fi", "fin", "Finnish"),
    language!("fo", "fao", "Faroese"),
    language!("fr", "fra", "French"),
    language!("ga", "gle", "Irish"),
    language!("gl", "glg", "Galician"),
    language!("gu", "guj", "Gujarati"),
    language!("he", "heb", "Hebrew"),
    language!("hi", "hin", "Hindi"),
    language!("hr", "hrv", "Croatian"),
    language!("ht", "hat", "Haitian"),
    language!("hu", "hun", "Hungarian"),
    language!("hy", "hye", "Armenian"),
    language!("id", "ind", "Indonesian"),
    language!("is", "isl", "Icelandic"),
    language!("it", "ita", "Italian"),
    language!("ja", "jpn", "Japanese"),
    language!("ka", "kat", "Georgian"),
    language!("kk", "kaz", "Kazakh"),
    language!("km", "khm", "Khmer"),
    language!("kn", "kan", "Kannada"),
    language!("ko", "kor", "Korean"),
    language!("ku", "kur", "Kurdish"),
    language!("ky", "kir", "Kyrgyz"),
    language!("lb", "ltz", "Luxembourgish"),
    language!("lo", "lao", "Lao"),
    language!("lt", "lit", "Lithuanian"),
    language!("lv", "lav", "Latvian"),
    language!("mk", "mkd", "Macedonian"),
    language!("ml", "mal", "Malayalam"),
    language!("mn", "mon", "Mongolian"),
    language!("mr", "mar", "Marathi"),
    language!("ms", "msa", "Malay"),
    language!("mt", "mlt", "Maltese"),
    language!("my", "mya", "Burmese"),
    language!("ne", "nep", "Nepali"),
    language!("nl", "nld", "Dutch"),
    language!("no", "nor", "Norwegian"),
    language!("pa", "pan", "Punjabi"),
    language!("pl", "pol", "Polish"),
    language!("ps", "pus", "Pashto"),
    language!("pt", "por", "Portuguese"),
    language!("ro", "ron", "Romanian"),
    language!("ru", "rus", "Russian"),
    language!("si", "sin", "Sinhala"),
    language!("sk", "slk", "Slovak"),
    language!("sl", "slv", "Slovenian"),
    language!("so", "som", "Somali"),
    language!("sq", "sqi", "Albanian"),
    language!("sr", "srp", "Serbian"),
    language!("sv", "swe", "Swedish"),
    language!("sw", "swa", "Swahili"),
    language!("ta", "tam", "Tamil"),
    language!("te", "tel", "Telugu"),
    language!("tg", "tgk", "Tajik"),
    language!("th", "tha", "Thai"),
    language!("tk", "tuk", "Turkmen"),
    language!("tl", "tgl", "Tagalog"),
    language!("tr", "tur", "Turkish"),
    language!("uk", "ukr", "Ukrainian"),
    language!("ur", "urd", "Urdu"),
    language!("uz", "uzb", "Uzbek"),
    language!("vi", "vie", "Vietnamese"),
    language!("zh", "zho", "Chinese"),
];
