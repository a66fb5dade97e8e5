//! Error types for grid construction, thread pool setup and output

use std::io;
use std::path::PathBuf;

/// Errors raised by the simulation engine and its reporters
///
/// The per-generation update itself cannot fail; every variant here is either
/// a precondition rejected up front or an I/O failure while writing results.
#[derive(Debug)]
pub enum LifeError {
    /// Height or width was zero, or `height * width` does not fit in memory
    InvalidDimensions {
        /// Requested width in cells
        width: usize,
        /// Requested height in cells
        height: usize,
    },
    /// Pattern text was not rows of `0`/`1` digits
    InvalidPattern(String),
    /// The worker thread pool could not be built
    ThreadPool(String),
    /// Writing a grid to a sink failed
    Io {
        /// Destination file, if the sink writes to one
        path: Option<PathBuf>,
        /// Underlying I/O error
        source: io::Error,
    },
}

impl LifeError {
    /// Attach a destination path to an I/O error
    pub(crate) fn io_at(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LifeError::Io {
            path: Some(path.into()),
            source,
        }
    }
}

impl std::fmt::Display for LifeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifeError::InvalidDimensions { width, height } => write!(
                f,
                "Invalid grid dimensions {width}x{height}: sides must be positive and the grid must fit in memory"
            ),
            LifeError::InvalidPattern(msg) => write!(f, "Invalid pattern: {msg}"),
            LifeError::ThreadPool(msg) => write!(f, "Failed to build thread pool: {msg}"),
            LifeError::Io {
                path: Some(path),
                source,
            } => write!(f, "Failed to write {}: {source}", path.display()),
            LifeError::Io { path: None, source } => write!(f, "Failed to write grid: {source}"),
        }
    }
}

impl std::error::Error for LifeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LifeError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for LifeError {
    fn from(source: io::Error) -> Self {
        LifeError::Io { path: None, source }
    }
}
