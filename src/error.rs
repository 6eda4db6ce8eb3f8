//! Errors raised while building an analyzer.
//!
//! Queries never fail: unknown words and reviews are reported through the
//! [`crate::config::UNKNOWN_SENTIMENT`] sentinel instead.

use std::io;
use std::path::PathBuf;

/// Errors that abort analyzer construction.
///
/// Construction is all-or-nothing, so any of these means no analyzer was built.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// A source file could not be opened or read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading a line from an in-memory reader failed.
    #[error("failed to read input line: {0}")]
    Read(#[from] io::Error),

    /// A corpus line does not start with a rating digit.
    #[error("malformed corpus line {line}: {reason}")]
    Parse {
        /// 1-based line number within the corpus.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
}

impl AnalyzerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AnalyzerError>;
