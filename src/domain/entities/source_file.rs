//! Source files that may reference assets

use std::fmt;
use std::path::Path;

use crate::domain::value_objects::RelativePath;

/// Category of a scanned source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SourceKind {
    /// Root-level markdown pages
    Markdown,
    /// Liquid includes and layouts
    Template,
    /// SCSS partials
    Stylesheet,
}

impl SourceKind {
    /// All kinds, in report order.
    pub const ALL: [SourceKind; 3] = [
        SourceKind::Markdown,
        SourceKind::Template,
        SourceKind::Stylesheet,
    ];

    /// Short label used in the report (`md`, `liquid`, `scss`)
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Markdown => "md",
            SourceKind::Template => "liquid",
            SourceKind::Stylesheet => "scss",
        }
    }

    /// Display label for a file of this kind.
    ///
    /// Markdown files live at the project root, so the file name is enough.
    /// Templates and stylesheets are shown with their parent directory
    /// (`_includes/head.liquid`).
    pub fn display_label(&self, path: &Path) -> String {
        match self {
            SourceKind::Markdown => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            SourceKind::Template | SourceKind::Stylesheet => {
                let base = path.parent().and_then(Path::parent).unwrap_or(Path::new(""));
                RelativePath::between(base, path).to_string()
            }
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A source file loaded for scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    kind: SourceKind,
    label: String,
    content: String,
}

impl SourceFile {
    /// The path is only needed for the label; it is not kept.
    pub fn new(kind: SourceKind, path: &Path, content: String) -> Self {
        Self {
            kind,
            label: kind.display_label(path),
            content,
        }
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
