//! Playlist text assembly and file output

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::Channel;
use crate::playlist::MARKER;

/// In-memory playlist, always starting with the `#EXTM3U` marker line
#[derive(Debug, Clone)]
pub struct PlaylistBuilder {
    content: String,
    entries: usize,
}

impl Default for PlaylistBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaylistBuilder {
    pub fn new() -> Self {
        Self {
            content: format!("{MARKER}\n"),
            entries: 0,
        }
    }

    /// Append a channel, optionally with its `group-title` replaced
    pub fn push_channel(&mut self, channel: &Channel, group_title: Option<&str>) {
        self.content.push_str(&channel.render(group_title));
        self.entries += 1;
    }

    /// Append a bare `#EXTINF:-1,<title>` entry pointing at `link`
    pub fn push_link(&mut self, title: &str, link: &str) {
        self.content
            .push_str(&format!("#EXTINF:-1,{}\n{}\n", title, link));
        self.entries += 1;
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Write the playlist, replacing any existing file
    pub fn save(&self, path: &Path) -> AppResult<()> {
        write_file(path, self.content.as_bytes())?;
        debug!("Wrote {} entries to {}", self.entries, path.display());
        Ok(())
    }
}

/// Write a file, creating its parent directories first
pub fn write_file(path: &Path, contents: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| AppError::io(path, e))
}

/// Remove a directory tree if present and recreate it empty
pub fn reset_dir(path: &Path) -> AppResult<()> {
    if path.exists() {
        fs::remove_dir_all(path).map_err(|e| AppError::io(path, e))?;
    }
    fs::create_dir_all(path).map_err(|e| AppError::io(path, e))
}
