//! Reference checking service
//!
//! Pure domain logic deciding which assets are referenced by which source
//! files. Everything is a literal substring test; no I/O happens here.

use crate::domain::entities::{Asset, SourceFile, SourceKind};
use crate::domain::value_objects::ReferencePatterns;

/// Labels of the source files that reference one asset, per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    markdown: Vec<String>,
    template: Vec<String>,
    stylesheet: Vec<String>,
}

impl References {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a referencing file
    pub fn add(&mut self, kind: SourceKind, label: impl Into<String>) {
        self.list_mut(kind).push(label.into());
    }

    /// Files of `kind` that reference the asset, in scan order
    pub fn for_kind(&self, kind: SourceKind) -> &[String] {
        match kind {
            SourceKind::Markdown => &self.markdown,
            SourceKind::Template => &self.template,
            SourceKind::Stylesheet => &self.stylesheet,
        }
    }

    fn list_mut(&mut self, kind: SourceKind) -> &mut Vec<String> {
        match kind {
            SourceKind::Markdown => &mut self.markdown,
            SourceKind::Template => &mut self.template,
            SourceKind::Stylesheet => &mut self.stylesheet,
        }
    }

    /// Check if no file references the asset
    pub fn is_empty(&self) -> bool {
        self.markdown.is_empty() && self.template.is_empty() && self.stylesheet.is_empty()
    }

    /// Total number of referencing files across kinds
    pub fn len(&self) -> usize {
        self.markdown.len() + self.template.len() + self.stylesheet.len()
    }
}

/// An asset together with the files that reference it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedAsset {
    pub asset: Asset,
    pub references: References,
}

/// Outcome of checking every asset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Assets with at least one reference
    pub used: Vec<UsedAsset>,
    /// Assets nobody references
    pub unused: Vec<Asset>,
}

/// Checks assets against a fixed set of loaded source files
pub struct ReferenceChecker<'a> {
    sources: &'a [SourceFile],
    image_extensions: &'a [String],
}

impl<'a> ReferenceChecker<'a> {
    pub fn new(sources: &'a [SourceFile], image_extensions: &'a [String]) -> Self {
        Self {
            sources,
            image_extensions,
        }
    }

    /// Find every source file that mentions `asset`.
    ///
    /// A file is recorded at most once, no matter how many patterns match.
    pub fn check(&self, asset: &Asset) -> References {
        let patterns = ReferencePatterns::for_asset(asset, self.image_extensions);
        let mut references = References::new();

        for source in self.sources {
            if patterns.matches(source.content()) {
                references.add(source.kind(), source.label());
            }
        }

        references
    }

    /// Split `assets` into used and unused, preserving input order.
    pub fn classify(&self, assets: Vec<Asset>) -> Classification {
        let mut result = Classification::default();

        for asset in assets {
            let references = self.check(&asset);
            if references.is_empty() {
                log::debug!("unused: {}", asset.project_path());
                result.unused.push(asset);
            } else {
                log::debug!(
                    "used: {} ({} referencing files)",
                    asset.project_path(),
                    references.len()
                );
                result.used.push(UsedAsset { asset, references });
            }
        }

        result
    }
}
