use std::path::PathBuf;

use thiserror::Error;

/// Terminal failures for a copy batch. The first one raised aborts the
/// remaining batch; files already written are left in place.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("source directory not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("destination is not a writable directory: {0}")]
    DestinationNotWritable(PathBuf),

    #[error("failed to read {path}: {source}")]
    Traversal {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        source: fs_extra::error::Error,
    },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
