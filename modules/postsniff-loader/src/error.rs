//! Typed errors for record loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning a post export into records.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The export file could not be opened
    #[error("failed to open {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV layer rejected the input
    #[error("invalid CSV")]
    Csv(#[from] csv::Error),

    /// A required header column is absent
    #[error("missing column: {0}")]
    MissingColumn(&'static str),

    /// A row has a value that cannot be interpreted
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}

impl From<LoadError> for postsniff_common::SniffError {
    /// Flattens the source chain into the message, since `SniffError::Load`
    /// only carries text.
    fn from(err: LoadError) -> Self {
        let mut message = err.to_string();
        let mut cause = std::error::Error::source(&err);
        while let Some(inner) = cause {
            message.push_str(": ");
            message.push_str(&inner.to_string());
            cause = inner.source();
        }
        postsniff_common::SniffError::Load(message)
    }
}

/// Result type alias for load operations.
pub type LoadResult<T> = std::result::Result<T, LoadError>;
