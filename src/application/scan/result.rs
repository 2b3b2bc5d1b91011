//! Scan result types

use crate::domain::entities::{Asset, SourceKind};
use crate::domain::services::UsedAsset;

/// How many source files of each kind were discovered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceCounts {
    pub markdown: usize,
    pub template: usize,
    pub stylesheet: usize,
}

impl SourceCounts {
    pub fn get(&self, kind: SourceKind) -> usize {
        match kind {
            SourceKind::Markdown => self.markdown,
            SourceKind::Template => self.template,
            SourceKind::Stylesheet => self.stylesheet,
        }
    }

    pub fn set(&mut self, kind: SourceKind, count: usize) {
        match kind {
            SourceKind::Markdown => self.markdown = count,
            SourceKind::Template => self.template = count,
            SourceKind::Stylesheet => self.stylesheet = count,
        }
    }
}

/// Result of a scan
///
/// Every discovered asset is in exactly one of `used` or `unused`, and both
/// lists are sorted by asset path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of assets discovered
    pub asset_count: usize,
    /// Number of source files discovered per kind
    pub sources: SourceCounts,
    /// Assets referenced by at least one source file
    pub used: Vec<UsedAsset>,
    /// Assets no source file references
    pub unused: Vec<Asset>,
}

impl ScanReport {
    /// Total size of unused assets in bytes
    pub fn unused_bytes(&self) -> u64 {
        self.unused.iter().map(Asset::size).sum()
    }

    /// Check if every asset is referenced
    pub fn is_clean(&self) -> bool {
        self.unused.is_empty()
    }
}
