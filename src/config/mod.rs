use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod defaults;

use defaults::*;

use crate::catalog::FailurePolicy;
use crate::errors::{AppError, AppResult};

/// Where the root playlist lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Root playlist listing one country playlist per entry
    #[serde(default = "default_root_playlist")]
    pub root_playlist: PathBuf,
}

/// Layout of the generated tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the playlists, the JSON export and the group directories
    #[serde(default = "default_output_root_dir")]
    pub root_dir: PathBuf,
    /// Directory receiving the country/category/language lookup indices
    #[serde(default = "default_index_dir")]
    pub index_dir: PathBuf,
    /// Write an empty `.nojekyll` marker into `root_dir`
    #[serde(default = "default_nojekyll")]
    pub nojekyll: bool,
    /// Indent `channels.json`
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Record unreadable country playlists and continue instead of failing
    #[serde(default = "default_skip_failed_sources")]
    pub skip_failed_sources: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(DEFAULT_BASE_DIR)
}

fn default_root_playlist() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT_PLAYLIST)
}

fn default_output_root_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_ROOT_DIR)
}

fn default_index_dir() -> PathBuf {
    PathBuf::from(DEFAULT_INDEX_DIR)
}

fn default_nojekyll() -> bool {
    DEFAULT_NOJEKYLL
}

fn default_pretty_json() -> bool {
    DEFAULT_PRETTY_JSON
}

fn default_skip_failed_sources() -> bool {
    DEFAULT_SKIP_FAILED_SOURCES
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            root_playlist: default_root_playlist(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: default_output_root_dir(),
            index_dir: default_index_dir(),
            nojekyll: DEFAULT_NOJEKYLL,
            pretty_json: DEFAULT_PRETTY_JSON,
        }
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            skip_failed_sources: DEFAULT_SKIP_FAILED_SOURCES,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            input: InputConfig::default(),
            output: OutputConfig::default(),
            aggregation: AggregationConfig::default(),
        }
    }
}

impl Config {
    /// Load from the default config file location
    pub fn load() -> Result<Self> {
        Self::load_from_file(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Built-in defaults, then the TOML file (if it exists), then
    /// `M3U_INDEXER_*` environment variables. Nested keys use `__`, e.g.
    /// `M3U_INDEXER_OUTPUT__ROOT_DIR`.
    ///
    /// The result is not validated; callers apply their own overrides first
    /// and then call [`Config::validate`].
    pub fn load_from_file(config_file: &Path) -> Result<Self> {
        if config_file.exists() {
            debug!("Loading configuration from {}", config_file.display());
        } else {
            debug!(
                "No configuration file at {}, using defaults",
                config_file.display()
            );
        }

        let config: Config = Self::figment(config_file)
            .extract()
            .with_context(|| format!("Invalid configuration in {}", config_file.display()))?;
        Ok(config)
    }

    fn figment(config_file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split(ENV_NESTING_SEPARATOR))
    }

    pub fn validate(&self) -> AppResult<()> {
        let required = [
            ("input.root_playlist", &self.input.root_playlist),
            ("output.root_dir", &self.output.root_dir),
            ("output.index_dir", &self.output.index_dir),
        ];
        for (key, path) in required {
            if path.as_os_str().is_empty() {
                return Err(AppError::configuration(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    pub fn root_playlist_path(&self) -> PathBuf {
        self.base_dir.join(&self.input.root_playlist)
    }

    pub fn output_root(&self) -> PathBuf {
        self.base_dir.join(&self.output.root_dir)
    }

    pub fn index_root(&self) -> PathBuf {
        self.base_dir.join(&self.output.index_dir)
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        if self.aggregation.skip_failed_sources {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        }
    }

    /// Effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
