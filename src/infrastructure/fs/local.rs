//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations. Directory walks
//! go through the `ignore` crate with its gitignore/hidden-file filters
//! switched off: every file on disk is a candidate, and name globs are
//! applied as whitelist overrides.

use std::path::{Path, PathBuf};

use ignore::overrides::{Override, OverrideBuilder};
use ignore::WalkBuilder;

use crate::domain::ports::{FileQuery, FileSystem, FsError, FsResult};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

fn build_override(dir: &Path, glob: &str) -> FsResult<Override> {
    let mut builder = OverrideBuilder::new(dir);
    builder
        .add(glob)
        .map_err(|e| FsError::Other(format!("invalid glob '{}': {}", glob, e)))?;
    builder
        .build()
        .map_err(|e| FsError::Other(format!("invalid glob '{}': {}", glob, e)))
}

impl FileSystem for LocalFs {
    fn read_lossy(&self, path: &Path) -> FsResult<String> {
        let bytes = std::fs::read(path).map_err(|e| FsError::at(path, e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn file_size(&self, path: &Path) -> FsResult<u64> {
        std::fs::metadata(path)
            .map(|m| m.len())
            .map_err(|e| FsError::at(path, e))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path, query: &FileQuery) -> FsResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            log::debug!("{} does not exist, nothing to list", dir.display());
            return Ok(Vec::new());
        }

        let mut walker = WalkBuilder::new(dir);
        walker.standard_filters(false).follow_links(false);
        if !query.recursive {
            walker.max_depth(Some(1));
        }
        if let Some(glob) = &query.glob {
            walker.overrides(build_override(dir, glob)?);
        }

        let mut files = Vec::new();
        for entry in walker.build() {
            match entry {
                Ok(entry) => {
                    if entry.path().is_file() {
                        files.push(entry.into_path());
                    }
                }
                Err(err) => {
                    log::warn!("skipping unreadable entry under {}: {}", dir.display(), err);
                }
            }
        }

        files.sort();
        Ok(files)
    }
}
