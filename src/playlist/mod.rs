//! M3U playlist parsing
//!
//! A playlist is a `#EXTM3U` marker line (optionally carrying global
//! attributes such as `x-tvg-url`) followed by pairs of `#EXTINF` metadata
//! lines and stream URL lines. Parsing is lenient per entry and strict per
//! document: a broken entry is skipped and reported, a missing marker fails
//! the whole document.

pub mod attributes;

use std::path::Path;

use tracing::debug;

use crate::errors::{MalformedEntryError, ParseError, ParseResult};

pub use attributes::{Attributes, ExtinfLine, escape_value, parse_attributes, parse_extinf};

/// Marker line every playlist starts with
pub const MARKER: &str = "#EXTM3U";

/// Prefix of a metadata line
pub const METADATA_PREFIX: &str = "#EXTINF";

/// Global attributes from the marker line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistHeader {
    pub attributes: Attributes,
}

impl PlaylistHeader {
    /// Header attribute by (case-insensitive) name
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .get(&key.to_lowercase())
            .map(String::as_str)
    }
}

/// One metadata line plus its stream URL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub name: String,
    pub url: String,
    pub attributes: Attributes,
    /// 1-based line number of the `#EXTINF` line
    pub line: usize,
}

impl PlaylistEntry {
    /// Non-empty attribute value by (case-insensitive) name
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .get(&key.to_lowercase())
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// A parsed playlist
#[derive(Debug, Clone, Default)]
pub struct PlaylistDocument {
    pub header: PlaylistHeader,
    pub items: Vec<PlaylistEntry>,
    /// Entries dropped while parsing, in input order
    pub malformed: Vec<MalformedEntryError>,
}

/// Read and parse a playlist file.
///
/// The file name as given is used as the playlist name in error messages.
pub fn read_playlist(path: &Path) -> ParseResult<PlaylistDocument> {
    let bytes = std::fs::read(path).map_err(|e| ParseError::unreadable(path, e))?;
    let document = parse_playlist_bytes(&bytes, &path.display().to_string())?;

    debug!(
        "Parsed {} entries from {} ({} malformed)",
        document.items.len(),
        path.display(),
        document.malformed.len()
    );
    Ok(document)
}

/// Parse raw playlist bytes; invalid UTF-8 sequences are replaced.
pub fn parse_playlist_bytes(bytes: &[u8], playlist: &str) -> ParseResult<PlaylistDocument> {
    parse_playlist(&String::from_utf8_lossy(bytes), playlist)
}

/// Parse playlist text. `playlist` names the source in error messages.
pub fn parse_playlist(content: &str, playlist: &str) -> ParseResult<PlaylistDocument> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.lines().enumerate();

    let header = loop {
        let Some((_, line)) = lines.next() else {
            return Err(ParseError::missing_marker(playlist));
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.strip_prefix(MARKER) {
            Some(rest) => break PlaylistHeader {
                attributes: parse_attributes(rest).0,
            },
            None => return Err(ParseError::missing_marker(playlist)),
        }
    };

    let mut document = PlaylistDocument {
        header,
        ..Default::default()
    };
    let mut pending: Option<(usize, ExtinfLine)> = None;

    for (index, line) in lines {
        let line_no = index + 1;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(body) = line.strip_prefix(METADATA_PREFIX) {
            if let Some((meta_line, meta)) = pending.take() {
                document.malformed.push(MalformedEntryError::MissingUrl {
                    playlist: playlist.to_string(),
                    line: meta_line,
                    name: meta.name,
                });
            }
            let body = body.strip_prefix(':').unwrap_or(body);
            pending = Some((line_no, parse_extinf(body)));
        } else if line.starts_with('#') {
            continue;
        } else if let Some((meta_line, meta)) = pending.take() {
            document.items.push(PlaylistEntry {
                name: meta.name,
                url: line.to_string(),
                attributes: meta.attributes,
                line: meta_line,
            });
        } else {
            document.malformed.push(MalformedEntryError::OrphanUrl {
                playlist: playlist.to_string(),
                line: line_no,
                url: line.to_string(),
            });
        }
    }

    if let Some((meta_line, meta)) = pending {
        document.malformed.push(MalformedEntryError::MissingUrl {
            playlist: playlist.to_string(),
            line: meta_line,
            name: meta.name,
        });
    }

    Ok(document)
}
