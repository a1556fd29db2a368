//! Centralized error handling for the indexer
//!
//! Errors fall into two groups:
//!
//! - **Fatal**: [`ParseError`] (an unreadable playlist or one missing the
//!   `#EXTM3U` marker), I/O failures while writing the output tree and
//!   configuration problems. These abort the run through [`AppError`].
//! - **Recoverable**: [`MalformedEntryError`] and [`InvalidChannelError`].
//!   The offending entry is skipped and the error is kept so the caller can
//!   count and report it.
//!
//! # Usage
//!
//! ```rust
//! use m3u_indexer::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Err(AppError::configuration("output.root_dir must not be empty"))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for playlist parsing Results
pub type ParseResult<T> = Result<T, ParseError>;
