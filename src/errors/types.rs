//! Error type definitions for the indexer

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Top-level application error type
///
/// Everything that aborts a run ends up here. Recoverable per-entry problems
/// are never converted into an `AppError`; they travel alongside the data as
/// [`SkippedEntry`](crate::catalog::SkippedEntry) values instead.
#[derive(Error, Debug)]
pub enum AppError {
    /// A playlist could not be read or is not a playlist at all
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Filesystem failure while creating or writing the output tree
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON export failures
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Fatal playlist errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// The playlist file could not be read
    #[error("failed to read playlist {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The first non-empty line is not the `#EXTM3U` marker
    #[error("{playlist}: missing #EXTM3U marker")]
    MissingMarker { playlist: String },
}

/// An entry the parser had to drop while keeping the rest of the playlist
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedEntryError {
    /// `#EXTINF` line followed by end of input or by another `#EXTINF` line
    #[error("{playlist}:{line}: metadata for '{name}' has no stream URL")]
    MissingUrl {
        playlist: String,
        line: usize,
        name: String,
    },

    /// Stream URL that is not preceded by an `#EXTINF` line
    #[error("{playlist}:{line}: stream URL '{url}' has no metadata line")]
    OrphanUrl {
        playlist: String,
        line: usize,
        url: String,
    },
}

/// A parsed entry that cannot become a channel
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: channel '{name}' has an empty stream URL")]
pub struct InvalidChannelError {
    pub name: String,
    pub line: usize,
}

impl AppError {
    /// Wrap an I/O error with the path it happened on
    pub fn io<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl ParseError {
    /// Create an unreadable-source error
    pub fn unreadable<P: AsRef<Path>>(path: P, source: std::io::Error) -> Self {
        Self::Unreadable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a missing-marker error
    pub fn missing_marker<S: Into<String>>(playlist: S) -> Self {
        Self::MissingMarker {
            playlist: playlist.into(),
        }
    }
}

impl MalformedEntryError {
    /// Line number of the offending line (1-based)
    pub fn line(&self) -> usize {
        match self {
            Self::MissingUrl { line, .. } | Self::OrphanUrl { line, .. } => *line,
        }
    }
}
