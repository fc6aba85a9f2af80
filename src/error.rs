//! Error types for loading vocabularies.
//!
//! Correction itself never fails: an unknown word falls back to itself. Only
//! building a [`FrequencyTable`](crate::FrequencyTable) from an external
//! source can go wrong, and those failures are reported as
//! [`AutocorrectError`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a corpus or a counts listing.
#[derive(Error, Debug)]
pub enum AutocorrectError {
    /// The corpus or counts file could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A read error on a stream that has no path attached.
    #[error("I/O error: {0}")]
    Stream(#[from] io::Error),

    /// A counts line that is not `word count`.
    #[error("invalid counts entry on line {line}: {content:?}")]
    Parse { line: usize, content: String },
}

impl AutocorrectError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AutocorrectError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AutocorrectError>;
