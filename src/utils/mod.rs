//! Utility modules for the indexer
//!
//! Small string and path helpers shared by the aggregation and generation
//! stages.

pub mod paths;
pub mod text;

pub use paths::PathUtils;
pub use text::capitalize;
