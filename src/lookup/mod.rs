//! Country and language code lookups
//!
//! The generator only needs three questions answered: the display name of a
//! country code, the `{code, name}` pair behind a language identifier, and the
//! alpha-3 form of a language code. [`CodeLookup`] is that seam;
//! [`StaticLookup`] answers from the built-in tables.
//!
//! ```rust
//! use m3u_indexer::lookup::{CodeLookup, StaticLookup};
//!
//! let lookup = StaticLookup::global();
//! assert_eq!(lookup.country_name("fr"), Some("France"));
//! assert_eq!(lookup.language_alpha3("en"), Some("eng"));
//! assert_eq!(lookup.language("Spanish").map(|l| l.code), Some("es"));
//! ```

mod tables;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use tables::{COUNTRIES, CountryDescriptor, LANGUAGES, LanguageDescriptor};

/// A resolved language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageRef<'a> {
    /// Canonical (ISO 639-1) code
    pub code: &'a str,
    pub alpha3: &'a str,
    pub name: &'a str,
}

/// Code-to-name lookups used while building and publishing the catalog
pub trait CodeLookup {
    /// Display name for a country code (case-insensitive)
    fn country_name(&self, code: &str) -> Option<&str>;

    /// Resolve a language by ISO 639-1 code, ISO 639-2/3 code or English name
    /// (all case-insensitive)
    fn language(&self, identifier: &str) -> Option<LanguageRef<'_>>;

    /// Alpha-3 code for a language code
    fn language_alpha3(&self, code: &str) -> Option<&str> {
        self.language(code).map(|language| language.alpha3)
    }
}

/// Lookup backed by the built-in tables
pub struct StaticLookup {
    countries: HashMap<&'static str, &'static str>,
    languages: HashMap<String, &'static LanguageDescriptor>,
}

static GLOBAL_LOOKUP: OnceLock<StaticLookup> = OnceLock::new();

impl StaticLookup {
    /// Shared instance, built on first use
    pub fn global() -> &'static StaticLookup {
        GLOBAL_LOOKUP.get_or_init(Self::build)
    }

    fn build() -> Self {
        let countries = COUNTRIES
            .iter()
            .map(|country| (country.code, country.name))
            .collect();

        let mut languages = HashMap::with_capacity(LANGUAGES.len() * 3);
        for language in LANGUAGES {
            languages.insert(language.alpha2.to_string(), language);
            languages.insert(language.alpha3.to_string(), language);
            languages
                .entry(language.name.to_lowercase())
                .or_insert(language);
        }

        Self {
            countries,
            languages,
        }
    }
}

impl CodeLookup for StaticLookup {
    fn country_name(&self, code: &str) -> Option<&str> {
        self.countries
            .get(code.trim().to_lowercase().as_str())
            .copied()
    }

    fn language(&self, identifier: &str) -> Option<LanguageRef<'_>> {
        self.languages
            .get(&identifier.trim().to_lowercase())
            .map(|language| LanguageRef {
                code: language.alpha2,
                alpha3: language.alpha3,
                name: language.name,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countries_resolve_case_insensitively() {
        let lookup = StaticLookup::global();
        assert_eq!(lookup.country_name("us"), Some("United States"));
        assert_eq!(lookup.country_name("US"), Some("United States"));
        assert_eq!(lookup.country_name("uk"), Some("United Kingdom"));
        assert_eq!(lookup.country_name("zz"), None);
    }

    #[test]
    fn languages_resolve_by_code_or_name() {
        let lookup = StaticLookup::global();

        let by_alpha2 = lookup.language("fr").unwrap();
        let by_alpha3 = lookup.language("FRA").unwrap();
        let by_name = lookup.language("french").unwrap();
        assert_eq!(by_alpha2, by_alpha3);
        assert_eq!(by_alpha2, by_name);
        assert_eq!(by_name.code, "fr");
        assert_eq!(by_name.name, "French");

        assert!(lookup.language("klingon").is_none());
    }

    #[test]
    fn alpha3_lookup() {
        let lookup = StaticLookup::global();
        assert_eq!(lookup.language_alpha3("de"), Some("deu"));
        assert_eq!(lookup.language_alpha3("undefined"), None);
    }

    #[test]
    fn table_codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for country in COUNTRIES {
            assert!(seen.insert(country.code), "duplicate country {}", country.code);
        }
        let mut seen = std::collections::HashSet::new();
        for language in LANGUAGES {
            assert!(seen.insert(language.alpha2), "duplicate language {}", language.alpha2);
            assert!(seen.insert(language.alpha3), "duplicate language {}", language.alpha3);
        }
    }
}
