//! Error type shared by the conversion library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by source handling, the conversion seam and artifact output.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// An output format name outside the supported set.
    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    /// The conversion worker went away without reporting a result.
    #[error("conversion worker exited without a result")]
    WorkerLost,

    /// The running conversion was abandoned through its cancel token.
    #[error("conversion cancelled")]
    Cancelled,

    /// Filesystem failure while reading a source or writing an artifact.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
