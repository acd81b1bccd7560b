//! Error types for cloze-core.
//!
//! Extraction itself never fails; these errors come from building a word
//! splitter out of configuration.

use thiserror::Error;

/// Result type alias using Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring an extractor.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid splitter pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown splitter: {0}")]
    UnknownSplitter(String),

    #[error("pattern splitter requires a pattern")]
    MissingPattern,
}
