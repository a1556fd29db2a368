use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use m3u_indexer::config::{Config, defaults::DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "m3u-indexer")]
#[command(version)]
#[command(about = "Aggregates per-country M3U playlists and generates country, language and category indices")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory all relative paths are resolved against
    #[arg(short, long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Root playlist listing the country playlists
    #[arg(short, long, value_name = "FILE")]
    root_playlist: Option<PathBuf>,

    /// Output root directory
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Directory for the country/category/language lookup indices
    #[arg(short, long, value_name = "DIR")]
    index_dir: Option<PathBuf>,

    /// Skip country playlists that fail to parse instead of aborting
    #[arg(long)]
    skip_failed_sources: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(base_dir) = &self.base_dir {
            config.base_dir = base_dir.clone();
        }
        if let Some(root_playlist) = &self.root_playlist {
            config.input.root_playlist = root_playlist.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output.root_dir = output_dir.clone();
        }
        if let Some(index_dir) = &self.index_dir {
            config.output.index_dir = index_dir.clone();
        }
        if self.skip_failed_sources {
            config.aggregation.skip_failed_sources = true;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = format!("m3u_indexer={}", cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = match &cli.config {
        Some(path) if !path.exists() => bail!("Configuration file not found: {}", path.display()),
        Some(path) => path.clone(),
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };

    let mut config = Config::load_from_file(&config_file)?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    info!("Starting m3u-indexer v{}", env!("CARGO_PKG_VERSION"));
    info!("Base directory: {}", config.base_dir.display());

    let summary = m3u_indexer::run(&config)?;
    info!("{}", summary);

    Ok(())
}
