//! Asset entity - a file under the project's assets directory
//!
//! Assets are the static files (images, fonts, downloads) a site ships
//! alongside its pages. Whether one is still needed is decided by looking
//! for references to it in the site sources.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::RelativePath;

/// A file found under the assets directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Full path on disk
    path: PathBuf,
    /// Path relative to the project root (`assets/img/logo.png`)
    project_path: RelativePath,
    /// Path relative to the assets directory (`img/logo.png`)
    assets_path: RelativePath,
    file_name: String,
    stem: String,
    /// Extension without the dot, as found on disk
    extension: Option<String>,
    /// Size in bytes
    size: u64,
}

impl Asset {
    pub fn new(project_root: &Path, assets_dir: &Path, path: PathBuf, size: u64) -> Self {
        let project_path = RelativePath::between(project_root, &path);
        let assets_path = RelativePath::between(assets_dir, &path);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned());

        Self {
            path,
            project_path,
            assets_path,
            file_name,
            stem,
            extension,
            size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn project_path(&self) -> &RelativePath {
        &self.project_path
    }

    pub fn assets_path(&self) -> &RelativePath {
        &self.assets_path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Case-insensitive check against a list of extensions (without dots).
    pub fn has_extension_in(&self, extensions: &[String]) -> bool {
        match &self.extension {
            Some(ext) => extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }
}
