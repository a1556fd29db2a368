//! Channel aggregation
//!
//! [`aggregate`] walks the root playlist, parses every country playlist it
//! references and collects the channels into a [`Catalog`]: one flat list in
//! traversal order plus three group indices (country, language, category)
//! holding positions into that list. Countries are listed in the order the
//! root playlist names them; languages and categories by code.

pub mod sort;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::{InvalidChannelError, MalformedEntryError, ParseError, ParseResult};
use crate::lookup::CodeLookup;
use crate::models::Channel;
use crate::playlist::{PlaylistDocument, read_playlist};
use crate::utils::PathUtils;

pub use sort::{FieldAccess, sort_by};

/// Header attribute carrying the EPG location of a playlist
pub const EPG_URL_ATTRIBUTE: &str = "x-tvg-url";

/// The three ways channels are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Country,
    Language,
    Category,
}

impl GroupKind {
    pub const ALL: [GroupKind; 3] = [GroupKind::Country, GroupKind::Language, GroupKind::Category];

    /// Name of the per-group output directory
    pub fn dir_name(&self) -> &'static str {
        match self {
            GroupKind::Country => "countries",
            GroupKind::Language => "languages",
            GroupKind::Category => "categories",
        }
    }

    /// Singular name, used for the flattened and lookup index file names
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Country => "country",
            GroupKind::Language => "language",
            GroupKind::Category => "category",
        }
    }
}

/// What to do when a referenced country playlist cannot be parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Fail the whole aggregation
    #[default]
    Abort,
    /// Record the failure and carry on with the next playlist
    Skip,
}

/// Something left out of the catalog
#[derive(Error, Debug)]
pub enum SkippedEntry {
    #[error("{0}")]
    Malformed(MalformedEntryError),

    #[error("{playlist}: {error}")]
    InvalidChannel {
        playlist: String,
        error: InvalidChannelError,
    },

    #[error("{reference}: playlist skipped: {error}")]
    FailedSource { reference: String, error: ParseError },
}

/// Loads the playlist behind a root playlist reference
pub trait PlaylistResolver {
    fn resolve(&self, reference: &str) -> ParseResult<PlaylistDocument>;
}

impl<F> PlaylistResolver for F
where
    F: Fn(&str) -> ParseResult<PlaylistDocument>,
{
    fn resolve(&self, reference: &str) -> ParseResult<PlaylistDocument> {
        self(reference)
    }
}

/// Resolves references as files relative to a base directory
#[derive(Debug, Clone)]
pub struct FsPlaylistResolver {
    base_dir: PathBuf,
}

impl FsPlaylistResolver {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Absolute references are used as they are
    pub fn path_for(&self, reference: &str) -> PathBuf {
        self.base_dir.join(Path::new(reference))
    }
}

impl PlaylistResolver for FsPlaylistResolver {
    fn resolve(&self, reference: &str) -> ParseResult<PlaylistDocument> {
        read_playlist(&self.path_for(reference))
    }
}

/// All channels of one run and their groupings
#[derive(Debug, Default)]
pub struct Catalog {
    all: Vec<Channel>,
    by_country: BTreeMap<String, Vec<usize>>,
    /// Country codes in order of first appearance
    country_order: Vec<String>,
    by_language: BTreeMap<String, Vec<usize>>,
    by_category: BTreeMap<String, Vec<usize>>,
    skipped: Vec<SkippedEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a channel and register it in its groups
    pub fn insert(&mut self, channel: Channel) {
        let position = self.all.len();

        let country = self.by_country.entry(channel.country.code.clone()).or_default();
        if country.is_empty() {
            self.country_order.push(channel.country.code.clone());
        }
        country.push(position);
        for code in channel.language_codes() {
            self.by_language
                .entry(code.to_string())
                .or_default()
                .push(position);
        }
        self.by_category
            .entry(channel.category_code())
            .or_default()
            .push(position);

        self.all.push(channel);
    }

    pub fn record_skipped(&mut self, skipped: SkippedEntry) {
        warn!("Skipping {}", skipped);
        self.skipped.push(skipped);
    }

    /// Every channel in traversal order
    pub fn channels(&self) -> &[Channel] {
        &self.all
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    fn index(&self, kind: GroupKind) -> &BTreeMap<String, Vec<usize>> {
        match kind {
            GroupKind::Country => &self.by_country,
            GroupKind::Language => &self.by_language,
            GroupKind::Category => &self.by_category,
        }
    }

    /// Number of distinct group codes
    pub fn group_count(&self, kind: GroupKind) -> usize {
        self.index(kind).len()
    }

    /// Group codes: countries in first-appearance order, the others ascending
    pub fn group_codes(&self, kind: GroupKind) -> Box<dyn Iterator<Item = &str> + '_> {
        match kind {
            GroupKind::Country => Box::new(self.country_order.iter().map(String::as_str)),
            _ => Box::new(self.index(kind).keys().map(String::as_str)),
        }
    }

    /// Members of one group in traversal order; empty for an unknown code
    pub fn group(&self, kind: GroupKind, code: &str) -> Vec<&Channel> {
        self.index(kind)
            .get(code)
            .map(|positions| positions.iter().map(|&i| &self.all[i]).collect())
            .unwrap_or_default()
    }

    /// Every group with its members, in [`Catalog::group_codes`] order
    pub fn groups(&self, kind: GroupKind) -> impl Iterator<Item = (&str, Vec<&Channel>)> {
        self.group_codes(kind)
            .map(move |code| (code, self.group(kind, code)))
    }
}

/// Build the catalog from a root playlist.
///
/// Each root item names a country (display name) and references its playlist
/// (URL). The country code is the lower-cased file name of the reference.
pub fn aggregate<R, L>(
    root: &PlaylistDocument,
    resolver: &R,
    lookup: &L,
    policy: FailurePolicy,
) -> ParseResult<Catalog>
where
    R: PlaylistResolver + ?Sized,
    L: CodeLookup + ?Sized,
{
    let mut catalog = Catalog::new();

    for malformed in &root.malformed {
        catalog.record_skipped(SkippedEntry::Malformed(malformed.clone()));
    }

    for item in &root.items {
        let code = PathUtils::code_from_reference(&item.url);
        let name = country_name(&code, &item.name, lookup);

        let document = match resolver.resolve(&item.url) {
            Ok(document) => document,
            Err(error) if policy == FailurePolicy::Skip => {
                catalog.record_skipped(SkippedEntry::FailedSource {
                    reference: item.url.clone(),
                    error,
                });
                continue;
            }
            Err(error) => return Err(error),
        };

        let epg_url = document
            .header
            .attribute(EPG_URL_ATTRIBUTE)
            .unwrap_or_default()
            .to_string();
        let before = catalog.len();

        for malformed in document.malformed {
            catalog.record_skipped(SkippedEntry::Malformed(malformed));
        }

        for entry in &document.items {
            match Channel::from_entry(entry, lookup) {
                Ok(mut channel) => {
                    channel.country.code = code.clone();
                    channel.country.name = name.clone();
                    channel.tvg.url = epg_url.clone();
                    catalog.insert(channel);
                }
                Err(error) => catalog.record_skipped(SkippedEntry::InvalidChannel {
                    playlist: item.url.clone(),
                    error,
                }),
            }
        }

        debug!(
            "Added {} channels for {} ({})",
            catalog.len() - before,
            name,
            code
        );
    }

    Ok(catalog)
}

fn country_name<L: CodeLookup + ?Sized>(code: &str, item_name: &str, lookup: &L) -> String {
    if !item_name.is_empty() {
        return item_name.to_string();
    }
    lookup
        .country_name(code)
        .map(str::to_string)
        .unwrap_or_else(|| code.to_uppercase())
}
