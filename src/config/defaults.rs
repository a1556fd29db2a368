/// Configuration default values
///
/// All relative paths are resolved against `base_dir`.
// File locations
pub const DEFAULT_CONFIG_FILE: &str = "m3u-indexer.toml";
pub const DEFAULT_BASE_DIR: &str = ".";
pub const DEFAULT_ROOT_PLAYLIST: &str = "index/index.m3u";

// Output tree
pub const DEFAULT_OUTPUT_ROOT_DIR: &str = "channels";
pub const DEFAULT_INDEX_DIR: &str = "index";
pub const DEFAULT_NOJEKYLL: bool = true;
pub const DEFAULT_PRETTY_JSON: bool = false;

// Aggregation
pub const DEFAULT_SKIP_FAILED_SOURCES: bool = false;

// Environment
pub const ENV_PREFIX: &str = "M3U_INDEXER_";
pub const ENV_NESTING_SEPARATOR: &str = "__";
