//! Scan Use Case
//!
//! Orchestrates enumeration, reference checking and partitioning.

use std::path::Path;

use crate::config::ScanLayout;
use crate::domain::entities::SourceKind;
use crate::domain::ports::FileSystem;
use crate::domain::services::ReferenceChecker;
use crate::error::{AuditError, AuditResult};

use super::enumerator::FileEnumerator;
use super::result::{ScanReport, SourceCounts};

/// Scan use case - finds which assets the site sources reference
pub struct ScanUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
    layout: ScanLayout,
}

impl<FS> ScanUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new scan use case
    pub fn new(fs: FS, layout: ScanLayout) -> Self {
        Self { fs, layout }
    }

    pub fn layout(&self) -> &ScanLayout {
        &self.layout
    }

    /// Scan the project at `root`.
    ///
    /// Missing asset or source directories are treated as empty.
    pub fn execute(&self, root: &Path) -> AuditResult<ScanReport> {
        if !self.fs.is_dir(root) {
            return Err(AuditError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let enumerator = FileEnumerator::new(&self.fs, &self.layout, root);

        let mut assets = enumerator.assets()?;
        assets.sort_by(|a, b| a.path().cmp(b.path()));
        log::info!("found {} assets", assets.len());

        let mut counts = SourceCounts::default();
        let mut sources = Vec::new();
        for kind in SourceKind::ALL {
            let paths = enumerator.source_paths(kind)?;
            counts.set(kind, paths.len());
            log::info!("found {} {} files", paths.len(), kind);
            sources.extend(enumerator.load_sources(kind, paths));
        }

        let asset_count = assets.len();
        let checker = ReferenceChecker::new(&sources, &self.layout.image_extensions);
        let classification = checker.classify(assets);

        Ok(ScanReport {
            asset_count,
            sources: counts,
            used: classification.used,
            unused: classification.unused,
        })
    }
}
