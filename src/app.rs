//! One indexing run: parse the root playlist, aggregate, generate

use std::fmt;
use std::time::{Duration, Instant};

use tracing::info;

use crate::catalog::{FsPlaylistResolver, aggregate};
use crate::config::Config;
use crate::errors::AppResult;
use crate::generator::{self, GenerationReport};
use crate::lookup::StaticLookup;
use crate::playlist::read_playlist;

/// Outcome of a run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: GenerationReport,
    /// Entries and playlists left out of the catalog
    pub skipped: usize,
    pub elapsed: Duration,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Countries: {}. Languages: {}. Categories: {}. Channels: {}.",
            self.report.countries, self.report.languages, self.report.categories, self.report.channels
        )?;
        if self.skipped > 0 {
            write!(f, " Skipped: {}.", self.skipped)?;
        }
        let elapsed = Duration::from_millis(self.elapsed.as_millis() as u64);
        write!(f, " Took {}.", humantime::format_duration(elapsed))
    }
}

/// Run the whole pipeline for `config`
pub fn run(config: &Config) -> AppResult<RunSummary> {
    let started = Instant::now();
    let lookup = StaticLookup::global();

    let root_path = config.root_playlist_path();
    info!("Parsing index {}...", root_path.display());
    let root = read_playlist(&root_path)?;

    let resolver = FsPlaylistResolver::new(&config.base_dir);
    let catalog = aggregate(&root, &resolver, lookup, config.failure_policy())?;

    let report = generator::generate(&catalog, lookup, config)?;
    info!("Done. Wrote {} files", report.files.len());

    Ok(RunSummary {
        report,
        skipped: catalog.skipped().len(),
        elapsed: started.elapsed(),
    })
}
