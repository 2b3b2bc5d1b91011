//! Relative Path Value Object
//!
//! A path relative to some base directory, always rendered with `/`
//! separators so it can be searched for inside site sources regardless of
//! the host platform.

use std::fmt;
use std::path::{Component, Path};

/// A path relative to a base directory, with `/` separators.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelativePath(String);

impl RelativePath {
    /// Strip `base` from `path` and join the remaining components with `/`.
    ///
    /// If `path` is not under `base`, the whole of `path` is used.
    pub fn between(base: &Path, path: &Path) -> Self {
        let rel = path.strip_prefix(base).unwrap_or(path);
        Self::from_path(rel)
    }

    /// Render `path` with `/` separators, dropping `.` components.
    pub fn from_path(path: &Path) -> Self {
        let parts: Vec<String> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                Component::ParentDir => Some("..".to_string()),
                Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
            })
            .collect();
        Self(parts.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
