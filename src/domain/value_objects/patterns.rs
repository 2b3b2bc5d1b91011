//! Reference patterns for an asset
//!
//! The literal strings whose presence in a source file counts as a
//! reference to the asset.

use crate::domain::entities::Asset;

/// Extensions (lowercase) whose stem alone also counts as a reference.
///
/// Responsive image helpers often reference `hero` and append the size and
/// extension themselves.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg", "webp"];

/// Ordered, de-duplicated set of literal patterns for one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePatterns {
    patterns: Vec<String>,
}

impl ReferencePatterns {
    /// Build the pattern set for `asset`.
    ///
    /// In order: path relative to the project root, the same path with a
    /// leading `/`, the file name, and for image extensions the file stem.
    pub fn for_asset(asset: &Asset, image_extensions: &[String]) -> Self {
        let project_path = asset.project_path().as_str();
        let mut patterns = Self { patterns: Vec::new() };

        patterns.push(project_path.to_string());
        patterns.push(format!("/{}", project_path));
        patterns.push(asset.file_name().to_string());

        if asset.has_extension_in(image_extensions) {
            patterns.push(asset.stem().to_string());
        }

        patterns
    }

    fn push(&mut self, pattern: String) {
        // An empty pattern is contained in every string
        if pattern.is_empty() || self.patterns.contains(&pattern) {
            return;
        }
        self.patterns.push(pattern);
    }

    /// True if `content` contains any pattern (case-sensitive).
    pub fn matches(&self, content: &str) -> bool {
        self.patterns.iter().any(|p| content.contains(p.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
