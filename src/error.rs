//! Error type for forest training, persistence, and sample reading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::Label;

/// Errors returned by this crate.
#[derive(Debug, Error)]
pub enum ForestError {
    /// Reading or writing a file failed.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying cause.
        #[source]
        source: io::Error,
    },

    /// A tree artifact could not be encoded or decoded.
    #[error("failed to parse tree artifact {path:?}: {source}")]
    Parse {
        /// The artifact being accessed.
        path: PathBuf,
        /// The underlying cause.
        #[source]
        source: serde_json::Error,
    },

    /// A class label outside `1, 2, ...` was observed.
    #[error("invalid class label {0}. class labels start at 1")]
    InvalidLabel(Label),

    /// The caller passed arguments that cannot be honored.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A row of a sample file is malformed.
    #[error("malformed sample at line {line}: {reason}")]
    Sample {
        /// 1-based line number in the file.
        line: usize,
        /// What went wrong.
        reason: String,
    },
}

impl ForestError {
    pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn parse<P: Into<PathBuf>>(
        path: P,
        source: serde_json::Error,
    ) -> Self
    {
        Self::Parse { path: path.into(), source }
    }
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ForestError>;
