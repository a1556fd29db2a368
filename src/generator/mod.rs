//! Output tree generation
//!
//! Given a [`Catalog`], writes under the output root:
//!
//! - `index.m3u` and `channels.json` with every channel
//! - `index.country.m3u`, `index.language.m3u`, `index.category.m3u`: every
//!   channel again, grouped through `group-title`
//! - `countries/`, `languages/`, `categories/`: one playlist per group
//!
//! and under the index directory one lookup playlist per grouping
//! (`country.m3u`, `language.m3u`, `category.m3u`) linking to the group files.

pub mod writer;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::{Catalog, GroupKind, sort_by};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::lookup::CodeLookup;
use crate::models::Channel;
use crate::utils::{PathUtils, capitalize};

pub use writer::{PlaylistBuilder, reset_dir, write_file};

pub const INDEX_FILE: &str = "index.m3u";
pub const CHANNELS_JSON_FILE: &str = "channels.json";
pub const NOJEKYLL_FILE: &str = ".nojekyll";

const BY_NAME: &[&str] = &["name", "url"];
const BY_COUNTRY: &[&str] = &["country.name", "name", "url"];
const BY_LANGUAGE: &[&str] = &["language.name", "name", "url"];
const BY_CATEGORY: &[&str] = &["category", "name", "url"];

/// Where everything is written
#[derive(Debug, Clone)]
pub struct OutputLayout {
    /// Links in the lookup indices are relative to this directory
    pub base_dir: PathBuf,
    pub root_dir: PathBuf,
    pub index_dir: PathBuf,
    pub nojekyll: bool,
    pub pretty_json: bool,
}

impl OutputLayout {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_dir: config.base_dir.clone(),
            root_dir: config.output_root(),
            index_dir: config.index_root(),
            nojekyll: config.output.nojekyll,
            pretty_json: config.output.pretty_json,
        }
    }

    pub fn group_dir(&self, kind: GroupKind) -> PathBuf {
        self.root_dir.join(kind.dir_name())
    }

    /// `<root>/<countries|languages|categories>/<code>.m3u`
    pub fn group_file(&self, kind: GroupKind, code: &str) -> PathBuf {
        self.group_file_with_stem(kind, &PathUtils::file_stem_for(code))
    }

    pub fn group_file_with_stem(&self, kind: GroupKind, stem: &str) -> PathBuf {
        self.group_dir(kind).join(format!("{stem}.m3u"))
    }

    /// `<root>/index.<kind>.m3u`
    pub fn flat_index_file(&self, kind: GroupKind) -> PathBuf {
        self.root_dir.join(format!("index.{}.m3u", kind.as_str()))
    }

    /// `<index>/<kind>.m3u`
    pub fn lookup_index_file(&self, kind: GroupKind) -> PathBuf {
        self.index_dir.join(format!("{}.m3u", kind.as_str()))
    }

    fn link_to(&self, path: &Path) -> String {
        PathUtils::link_path(path, &self.base_dir)
    }
}

/// What a generation run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Every file written, in write order
    pub files: Vec<PathBuf>,
    pub channels: usize,
    pub countries: usize,
    pub languages: usize,
    pub categories: usize,
}

/// Writes the output tree for one catalog
pub struct IndexGenerator<'a, L: CodeLookup + ?Sized> {
    catalog: &'a Catalog,
    lookup: &'a L,
    layout: &'a OutputLayout,
    files: Vec<PathBuf>,
}

impl<'a, L: CodeLookup + ?Sized> IndexGenerator<'a, L> {
    pub fn new(catalog: &'a Catalog, lookup: &'a L, layout: &'a OutputLayout) -> Self {
        Self {
            catalog,
            lookup,
            layout,
            files: Vec::new(),
        }
    }

    /// Regenerate the whole tree
    pub fn generate(mut self) -> AppResult<GenerationReport> {
        info!("Creating root directory...");
        self.prepare_directories()?;

        if self.layout.nojekyll {
            info!("Creating {}...", NOJEKYLL_FILE);
            let path = self.layout.root_dir.join(NOJEKYLL_FILE);
            write_file(&path, b"")?;
            self.files.push(path);
        }

        info!("Generating {}...", INDEX_FILE);
        self.generate_index()?;
        info!("Generating {}...", CHANNELS_JSON_FILE);
        self.generate_channels_json()?;
        for kind in [GroupKind::Country, GroupKind::Language, GroupKind::Category] {
            info!("Generating index.{}.m3u...", kind.as_str());
            self.generate_flat_index(kind)?;
        }
        for kind in [GroupKind::Country, GroupKind::Category, GroupKind::Language] {
            info!("Generating /{}...", kind.dir_name());
            self.generate_groups(kind)?;
        }

        Ok(GenerationReport {
            files: self.files,
            channels: self.catalog.len(),
            countries: self.catalog.group_count(GroupKind::Country),
            languages: self.catalog.group_count(GroupKind::Language),
            categories: self.catalog.group_count(GroupKind::Category),
        })
    }

    fn prepare_directories(&self) -> AppResult<()> {
        for kind in GroupKind::ALL {
            reset_dir(&self.layout.group_dir(kind))?;
        }
        std::fs::create_dir_all(&self.layout.index_dir)
            .map_err(|e| AppError::io(&self.layout.index_dir, e))
    }

    fn sorted(&self, keys: &[&str]) -> Vec<&'a Channel> {
        let mut channels: Vec<&Channel> = self.catalog.channels().iter().collect();
        sort_by(&mut channels, keys);
        channels
    }

    fn save(&mut self, builder: &PlaylistBuilder, path: PathBuf) -> AppResult<()> {
        builder.save(&path)?;
        self.files.push(path);
        Ok(())
    }

    fn generate_index(&mut self) -> AppResult<()> {
        let mut playlist = PlaylistBuilder::new();
        for channel in self.sorted(BY_NAME) {
            playlist.push_channel(channel, None);
        }
        self.save(&playlist, self.layout.root_dir.join(INDEX_FILE))
    }

    fn generate_channels_json(&mut self) -> AppResult<()> {
        let channels = self.sorted(BY_NAME);
        let json = if self.layout.pretty_json {
            serde_json::to_vec_pretty(&channels)?
        } else {
            serde_json::to_vec(&channels)?
        };

        let path = self.layout.root_dir.join(CHANNELS_JSON_FILE);
        write_file(&path, &json)?;
        self.files.push(path);
        Ok(())
    }

    /// Every channel once, with `group-title` set to the grouping value
    fn generate_flat_index(&mut self, kind: GroupKind) -> AppResult<()> {
        let mut playlist = PlaylistBuilder::new();
        match kind {
            GroupKind::Country => {
                for channel in self.sorted(BY_COUNTRY) {
                    playlist.push_channel(channel, Some(channel.country.name.as_str()));
                }
            }
            GroupKind::Language => {
                for channel in self.sorted(BY_LANGUAGE) {
                    playlist.push_channel(channel, Some(channel.language_names().as_str()));
                }
            }
            GroupKind::Category => {
                for channel in self.sorted(BY_CATEGORY) {
                    playlist.push_channel(channel, None);
                }
            }
        }
        self.save(&playlist, self.layout.flat_index_file(kind))
    }

    /// One playlist per group plus the lookup index pointing at them
    fn generate_groups(&mut self, kind: GroupKind) -> AppResult<()> {
        let catalog = self.catalog;
        let mut links: Vec<(String, String)> = Vec::new();
        let mut stems: HashSet<String> = HashSet::new();

        for (code, mut members) in catalog.groups(kind) {
            sort_by(&mut members, BY_NAME);

            let mut playlist = PlaylistBuilder::new();
            for channel in &members {
                playlist.push_channel(channel, None);
            }
            let stem = claim_stem(&mut stems, code);
            let path = self.layout.group_file_with_stem(kind, &stem);
            debug!("{} group {:?}: {} channels", kind.as_str(), code, members.len());
            links.push((self.display_name(kind, code, &members), self.layout.link_to(&path)));
            self.save(&playlist, path)?;
        }

        // countries keep root playlist order, languages code order
        if kind == GroupKind::Category {
            links.sort_by(|a, b| a.0.cmp(&b.0));
        }

        let mut index = PlaylistBuilder::new();
        for (title, link) in &links {
            index.push_link(title, link);
        }
        self.save(&index, self.layout.lookup_index_file(kind))
    }

    fn display_name(&self, kind: GroupKind, code: &str, members: &[&Channel]) -> String {
        match kind {
            GroupKind::Country => self
                .lookup
                .country_name(code)
                .map(str::to_string)
                .or_else(|| {
                    members
                        .first()
                        .map(|channel| channel.country.name.clone())
                        .filter(|name| !name.is_empty())
                })
                .unwrap_or_else(|| code.to_uppercase()),
            GroupKind::Language => self
                .lookup
                .language_alpha3(code)
                .unwrap_or(code)
                .to_string(),
            GroupKind::Category => capitalize(code),
        }
    }
}

/// File stem for `code` that no earlier group of the same kind has taken.
///
/// Distinct codes can sanitize to the same stem (`news/weather` and
/// `news_weather`); later ones get `-2`, `-3`, ... appended. Stems are
/// compared case-insensitively.
fn claim_stem(taken: &mut HashSet<String>, code: &str) -> String {
    let stem = PathUtils::file_stem_for(code);
    let mut candidate = stem.clone();
    let mut suffix = 2;
    while !taken.insert(candidate.to_lowercase()) {
        candidate = format!("{stem}-{suffix}");
        suffix += 1;
    }
    candidate
}

/// Generate the tree with a layout derived from `config`
pub fn generate<L: CodeLookup + ?Sized>(
    catalog: &Catalog,
    lookup: &L,
    config: &Config,
) -> AppResult<GenerationReport> {
    let layout = OutputLayout::from_config(config);
    IndexGenerator::new(catalog, lookup, &layout).generate()
}
