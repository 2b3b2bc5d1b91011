//! FileSystem port - abstraction over the read-only file access a scan needs
//!
//! This trait allows the domain and application layers to enumerate and read
//! project files without depending on a concrete implementation (local, mock).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Convert an I/O error, remembering which path it happened on.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {}

/// Which files under a directory to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileQuery {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Glob matched against the file name (`*.md`); `None` lists every file
    pub glob: Option<String>,
}

impl FileQuery {
    /// Every file, at any depth.
    pub fn all() -> Self {
        Self {
            recursive: true,
            glob: None,
        }
    }

    /// Files at any depth whose name matches `glob`.
    pub fn recursive(glob: impl Into<String>) -> Self {
        Self {
            recursive: true,
            glob: Some(glob.into()),
        }
    }

    /// Files directly inside the directory whose name matches `glob`.
    pub fn top_level(glob: impl Into<String>) -> Self {
        Self {
            recursive: false,
            glob: Some(glob.into()),
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - `MockFs` - in-memory for testing
pub trait FileSystem {
    /// Read file content as text, replacing invalid UTF-8
    fn read_lossy(&self, path: &Path) -> FsResult<String>;

    /// Size of a file in bytes
    fn file_size(&self, path: &Path) -> FsResult<u64>;

    /// Check if a directory exists
    fn is_dir(&self, path: &Path) -> bool;

    /// List files under `dir` matching `query`, sorted by path.
    ///
    /// A missing directory yields an empty list.
    fn list_files(&self, dir: &Path, query: &FileQuery) -> FsResult<Vec<PathBuf>>;
}
