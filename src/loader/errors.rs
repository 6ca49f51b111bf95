//! Loader error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for loading
pub type LoaderResult<T> = Result<T, LoaderError>;

#[derive(Debug, Error)]
pub enum LoaderError {
    /// A data file exists but could not be read
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoaderError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoaderError::Io {
            path: path.into(),
            source,
        }
    }
}
