//! File enumeration
//!
//! Lists the assets and the three categories of source files for a project,
//! following a `ScanLayout`.

use std::path::{Path, PathBuf};

use crate::config::ScanLayout;
use crate::domain::entities::{Asset, SourceFile, SourceKind};
use crate::domain::ports::{FileQuery, FileSystem};
use crate::error::{AuditError, AuditResult};

/// Finds assets and source files through a `FileSystem`
pub struct FileEnumerator<'a, FS: FileSystem> {
    fs: &'a FS,
    layout: &'a ScanLayout,
    root: &'a Path,
}

impl<'a, FS: FileSystem> FileEnumerator<'a, FS> {
    pub fn new(fs: &'a FS, layout: &'a ScanLayout, root: &'a Path) -> Self {
        Self { fs, layout, root }
    }

    fn list(&self, dir: &Path, query: &FileQuery) -> AuditResult<Vec<PathBuf>> {
        self.fs
            .list_files(dir, query)
            .map_err(|source| AuditError::Walk {
                path: dir.to_path_buf(),
                source,
            })
    }

    /// Every file under the assets directory, with its size.
    ///
    /// A size that cannot be read aborts the scan.
    pub fn assets(&self) -> AuditResult<Vec<Asset>> {
        let assets_dir = self.layout.assets_root(self.root);
        let paths = self.list(&assets_dir, &FileQuery::all())?;

        paths
            .into_iter()
            .map(|path| {
                let size = self
                    .fs
                    .file_size(&path)
                    .map_err(|source| AuditError::Metadata {
                        path: path.clone(),
                        source,
                    })?;
                Ok(Asset::new(self.root, &assets_dir, path, size))
            })
            .collect()
    }

    /// Paths of the source files of `kind`.
    ///
    /// Templates come from each template directory in layout order.
    pub fn source_paths(&self, kind: SourceKind) -> AuditResult<Vec<PathBuf>> {
        match kind {
            SourceKind::Markdown => self.list(self.root, &self.layout.markdown_query()),
            SourceKind::Template => {
                let query = self.layout.template_query();
                let mut paths = Vec::new();
                for dir in self.layout.template_roots(self.root) {
                    paths.extend(self.list(&dir, &query)?);
                }
                Ok(paths)
            }
            SourceKind::Stylesheet => self.list(
                &self.layout.stylesheet_root(self.root),
                &self.layout.stylesheet_query(),
            ),
        }
    }

    /// Read the given source files.
    ///
    /// Files that cannot be read are skipped.
    pub fn load_sources(&self, kind: SourceKind, paths: Vec<PathBuf>) -> Vec<SourceFile> {
        let mut sources = Vec::with_capacity(paths.len());

        for path in paths {
            match self.fs.read_lossy(&path) {
                Ok(content) => sources.push(SourceFile::new(kind, &path, content)),
                Err(err) => log::debug!("skipping unreadable {}: {}", path.display(), err),
            }
        }

        sources
    }
}
