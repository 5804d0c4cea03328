//! Error types for the asset store.

use crate::path::{Path, PathError};

/// Errors surfaced by asset store operations.
///
/// Lookups have exactly one failure mode: [`Error::NotFound`], raised for
/// absent paths and for kind mismatches (file requested as directory or
/// vice versa). The remaining variants can only occur while parsing caller
/// paths or while constructing a store from a source.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The path is absent from the store, or names the wrong kind of entry.
    #[error("asset not found: {path}")]
    NotFound { path: Path },

    /// Path validation error from a string-accepting entry point.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Two source entries disagree about whether a path is a file or a
    /// directory. Raised at construction time only.
    #[error("conflicting file and directory entries at: {path}")]
    Conflict { path: Path },

    /// I/O failure while loading entries from a disk source.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Convenience constructor used throughout lookup paths.
    pub(crate) fn not_found(path: &Path) -> Self {
        Error::NotFound { path: path.clone() }
    }
}
