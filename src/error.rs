//! Error types for lexicon loading.
//!
//! Lookups never fail: a miss is an `Option::None` or a pass-through value.
//! The only hard failure is a lexicon resource that cannot be read or that
//! does not look like a lexicon table at all.

use std::path::PathBuf;

/// Result type used by the loading functions of this crate.
pub type Result<T, E = GlossError> = std::result::Result<T, E>;

/// Errors surfaced while obtaining a lexicon
#[derive(Debug, thiserror::Error)]
pub enum GlossError {
    /// The resource could not be read from disk
    #[error("could not read lexicon at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource could not be downloaded
    #[error("network error: {0}")]
    Network(String),

    /// The resource contained no header row
    #[error("lexicon resource is empty")]
    EmptyLexicon,

    /// The header row does not describe an english/tovian table
    #[error("lexicon header is missing the '{0}' column")]
    MissingColumn(&'static str),

    /// A guide manifest was not valid JSON
    #[error("invalid guide manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
