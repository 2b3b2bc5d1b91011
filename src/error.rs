//! Error types for asset-audit
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for asset-audit operations
pub type AuditResult<T> = Result<T, AuditError>;

/// Main error type for asset-audit operations
#[derive(Error, Debug)]
pub enum AuditError {
    /// Project root does not exist or is not a directory
    #[error("project root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Could not read the metadata (size) of an asset
    #[error("cannot read metadata of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A directory could not be listed
    #[error("cannot list files in {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: FsError,
    },
}
