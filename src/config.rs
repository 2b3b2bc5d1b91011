//! Project layout configuration
//!
//! The layout is fixed: a Jekyll-style tree with `assets/`, root-level
//! markdown pages, liquid includes/layouts and SCSS partials. It is still
//! kept in one typed struct so the scan code never hard-codes a directory
//! name and tests can point it at other trees.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileQuery;
use crate::domain::value_objects::IMAGE_EXTENSIONS;

/// Directory holding the assets, relative to the project root
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_MARKDOWN_GLOB: &str = "*.md";
pub const DEFAULT_TEMPLATE_DIRS: &[&str] = &["_includes", "_layouts"];
pub const DEFAULT_TEMPLATE_GLOB: &str = "*.liquid";
pub const DEFAULT_STYLESHEET_DIR: &str = "_sass";
pub const DEFAULT_STYLESHEET_GLOB: &str = "*.scss";

/// Where assets and sources live inside a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanLayout {
    pub assets_dir: String,
    /// Matched against files directly in the project root
    pub markdown_glob: String,
    pub template_dirs: Vec<String>,
    pub template_glob: String,
    pub stylesheet_dir: String,
    pub stylesheet_glob: String,
    /// Extensions whose bare stem also counts as a reference
    pub image_extensions: Vec<String>,
}

impl Default for ScanLayout {
    fn default() -> Self {
        Self {
            assets_dir: DEFAULT_ASSETS_DIR.to_string(),
            markdown_glob: DEFAULT_MARKDOWN_GLOB.to_string(),
            template_dirs: DEFAULT_TEMPLATE_DIRS.iter().map(|d| d.to_string()).collect(),
            template_glob: DEFAULT_TEMPLATE_GLOB.to_string(),
            stylesheet_dir: DEFAULT_STYLESHEET_DIR.to_string(),
            stylesheet_glob: DEFAULT_STYLESHEET_GLOB.to_string(),
            image_extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ScanLayout {
    pub fn assets_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.assets_dir)
    }

    pub fn markdown_query(&self) -> FileQuery {
        FileQuery::top_level(&self.markdown_glob)
    }

    pub fn template_roots(&self, project_root: &Path) -> Vec<PathBuf> {
        self.template_dirs
            .iter()
            .map(|d| project_root.join(d))
            .collect()
    }

    pub fn template_query(&self) -> FileQuery {
        FileQuery::recursive(&self.template_glob)
    }

    pub fn stylesheet_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.stylesheet_dir)
    }

    pub fn stylesheet_query(&self) -> FileQuery {
        FileQuery::recursive(&self.stylesheet_glob)
    }
}
