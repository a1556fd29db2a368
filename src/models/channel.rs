//! Canonical channel record
//!
//! A [`Channel`] is built from one [`PlaylistEntry`]. The well-known `tvg-*`
//! and `group-title` attributes become typed fields; everything else is kept
//! in `attributes` and written back out unchanged.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::InvalidChannelError;
use crate::lookup::{CodeLookup, StaticLookup};
use crate::playlist::{Attributes, PlaylistEntry, escape_value};

/// Group code for channels without a category
pub const OTHER_CATEGORY: &str = "other";

/// Group code for channels (or individual languages) without a language code
pub const UNDEFINED_LANGUAGE: &str = "undefined";

/// Separator inside `tvg-language`
pub const LANGUAGE_SEPARATOR: char = ';';

const ATTR_GROUP_TITLE: &str = "group-title";
const ATTR_TVG_ID: &str = "tvg-id";
const ATTR_TVG_NAME: &str = "tvg-name";
const ATTR_TVG_URL: &str = "tvg-url";
const ATTR_TVG_LOGO: &str = "tvg-logo";
const ATTR_TVG_COUNTRY: &str = "tvg-country";
const ATTR_TVG_LANGUAGE: &str = "tvg-language";

const KNOWN_ATTRIBUTES: &[&str] = &[
    ATTR_GROUP_TITLE,
    ATTR_TVG_ID,
    ATTR_TVG_NAME,
    ATTR_TVG_URL,
    ATTR_TVG_LOGO,
    ATTR_TVG_COUNTRY,
    ATTR_TVG_LANGUAGE,
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

/// EPG related fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tvg {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub logo: String,
    pub url: String,
    pub category: String,
    pub languages: Vec<Language>,
    pub country: Country,
    pub tvg: Tvg,
    /// Attributes without a dedicated field, passed through verbatim
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: Attributes,
}

/// Build a channel using the built-in lookup tables
pub fn create_channel(entry: &PlaylistEntry) -> Result<Channel, InvalidChannelError> {
    Channel::from_entry(entry, StaticLookup::global())
}

impl Channel {
    /// Build a channel from a parsed entry.
    ///
    /// The country is taken from `tvg-country` when present; the aggregator
    /// replaces it with the country of the playlist the entry came from.
    pub fn from_entry<L>(entry: &PlaylistEntry, lookup: &L) -> Result<Self, InvalidChannelError>
    where
        L: CodeLookup + ?Sized,
    {
        if entry.url.trim().is_empty() {
            return Err(InvalidChannelError {
                name: entry.name.clone(),
                line: entry.line,
            });
        }

        let attr = |key: &str| entry.attribute(key).unwrap_or_default().to_string();

        let attributes = entry
            .attributes
            .iter()
            .filter(|(key, _)| !KNOWN_ATTRIBUTES.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            name: entry.name.clone(),
            logo: attr(ATTR_TVG_LOGO),
            url: entry.url.clone(),
            category: attr(ATTR_GROUP_TITLE),
            languages: entry
                .attribute(ATTR_TVG_LANGUAGE)
                .map(|value| parse_languages(value, lookup))
                .unwrap_or_default(),
            country: Country {
                code: attr(ATTR_TVG_COUNTRY),
                name: String::new(),
            },
            tvg: Tvg {
                id: attr(ATTR_TVG_ID),
                name: attr(ATTR_TVG_NAME),
                url: attr(ATTR_TVG_URL),
            },
            attributes,
        })
    }

    /// Lower-cased category, or [`OTHER_CATEGORY`] when there is none
    pub fn category_code(&self) -> String {
        let category = self.category.trim();
        if category.is_empty() {
            OTHER_CATEGORY.to_string()
        } else {
            category.to_lowercase()
        }
    }

    /// Language group codes, in order and without repeats.
    ///
    /// An empty language list yields [`UNDEFINED_LANGUAGE`] once; otherwise
    /// each language contributes its own code, defaulting to
    /// [`UNDEFINED_LANGUAGE`] individually.
    pub fn language_codes(&self) -> Vec<&str> {
        if self.languages.is_empty() {
            return vec![UNDEFINED_LANGUAGE];
        }

        let mut codes: Vec<&str> = Vec::with_capacity(self.languages.len());
        for language in &self.languages {
            let code = if language.code.is_empty() {
                UNDEFINED_LANGUAGE
            } else {
                language.code.as_str()
            };
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        codes
    }

    /// Language names joined with `;`. A language without a name leaves an
    /// empty piece (`English;`).
    pub fn language_names(&self) -> String {
        self.languages
            .iter()
            .map(|language| language.name.as_str())
            .collect::<Vec<_>>()
            .join(";")
    }

    /// The `tvg-language` value: each language's name, or its code where the
    /// name is unknown, so it reads back through the lookup to the same
    /// languages.
    fn language_identifiers(&self) -> String {
        self.languages
            .iter()
            .map(|language| {
                if language.name.is_empty() {
                    language.code.as_str()
                } else {
                    language.name.as_str()
                }
            })
            .filter(|identifier| !identifier.is_empty())
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Render the `#EXTINF` and URL lines.
    ///
    /// `group_title` replaces the category in `group-title` for this rendering
    /// only, which is how the flattened indices group by country or language.
    pub fn render(&self, group_title: Option<&str>) -> String {
        let mut extinf = String::from("#EXTINF:-1");

        let mut push_attr = |key: &str, value: &str| {
            extinf.push_str(&format!(" {}=\"{}\"", key, escape_value(value)));
        };

        let optional = [
            (ATTR_TVG_ID, self.tvg.id.clone()),
            (ATTR_TVG_NAME, self.tvg.name.clone()),
            (ATTR_TVG_COUNTRY, self.country.code.clone()),
            (ATTR_TVG_LANGUAGE, self.language_identifiers()),
            (ATTR_TVG_LOGO, self.logo.clone()),
            (ATTR_TVG_URL, self.tvg.url.clone()),
        ];
        for (key, value) in optional.iter().filter(|(_, value)| !value.is_empty()) {
            push_attr(*key, value.as_str());
        }
        for (key, value) in &self.attributes {
            push_attr(key.as_str(), value.as_str());
        }
        push_attr(ATTR_GROUP_TITLE, group_title.unwrap_or(self.category.as_str()));

        format!("{},{}\n{}\n", extinf, self.name, self.url)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Split a `tvg-language` value and resolve every identifier.
///
/// Nothing is dropped: an unknown code keeps its code with an empty name, and
/// an unknown name keeps its name with an empty code.
pub fn parse_languages<L>(value: &str, lookup: &L) -> Vec<Language>
where
    L: CodeLookup + ?Sized,
{
    value
        .split(LANGUAGE_SEPARATOR)
        .map(str::trim)
        .filter(|identifier| !identifier.is_empty())
        .map(|identifier| match lookup.language(identifier) {
            Some(language) => Language {
                code: language.code.to_string(),
                name: language.name.to_string(),
            },
            None if looks_like_code(identifier) => Language {
                code: identifier.to_lowercase(),
                name: String::new(),
            },
            None => Language {
                code: String::new(),
                name: identifier.to_string(),
            },
        })
        .collect()
}

fn looks_like_code(identifier: &str) -> bool {
    (2..=3).contains(&identifier.len()) && identifier.chars().all(|c| c.is_ascii_alphabetic())
}
