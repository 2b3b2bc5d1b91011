//! Output Rendering
//!
//! Turns a `ScanReport` into the human-readable report printed on stdout.
//! With color disabled the output is plain text with a stable layout.

use crate::application::ScanReport;
use crate::domain::entities::SourceKind;
use crate::domain::services::References;

use super::format::format_thousands;
use super::text::ColoredText;
use super::theme;

/// At most this many referencing files are listed per kind
pub const MAX_REFERENCES_SHOWN: usize = 3;

/// Trait for rendering scan reports
pub trait ReportRenderer {
    /// Render the report
    fn render(&self, report: &ScanReport) -> String;
}

/// Text renderer for scan reports
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
}

impl TextRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn section(&self, out: &mut String, title: &str) {
        let rule = ColoredText::dim(theme::rule()).render(self.color);
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&ColoredText::info(title).bold().render(self.color));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
    }
}

/// One-line summary of where an asset is referenced.
///
/// `md: a.md, b.md; scss: base/_x.scss` - kinds without references are left
/// out and each kind lists at most `MAX_REFERENCES_SHOWN` files.
pub fn reference_summary(references: &References) -> String {
    SourceKind::ALL
        .iter()
        .filter_map(|kind| {
            let files = references.for_kind(*kind);
            if files.is_empty() {
                return None;
            }
            let shown: Vec<&str> = files
                .iter()
                .take(MAX_REFERENCES_SHOWN)
                .map(String::as_str)
                .collect();
            Some(format!("{}: {}", kind.label(), shown.join(", ")))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &ScanReport) -> String {
        let mut out = String::new();

        out.push_str("Scanning for assets and references...\n\n");
        out.push_str(&format!("Found {} assets\n", report.asset_count));
        out.push_str(&format!("Found {} markdown files\n", report.sources.markdown));
        out.push_str(&format!("Found {} liquid templates\n", report.sources.template));
        out.push_str(&format!("Found {} scss files\n\n", report.sources.stylesheet));

        self.section(&mut out, "USED ASSETS");
        for used in &report.used {
            let path = ColoredText::success(used.asset.assets_path().as_str());
            out.push_str(&format!("  {}\n", path.render(self.color)));
            out.push_str(&format!(
                "    {} {}\n",
                ColoredText::dim("->").render(self.color),
                reference_summary(&used.references)
            ));
        }

        out.push('\n');
        self.section(&mut out, "UNUSED ASSETS (not referenced anywhere)");
        for asset in &report.unused {
            let path = ColoredText::warning(asset.assets_path().as_str());
            out.push_str(&format!(
                "  {} ({} bytes)\n",
                path.render(self.color),
                format_thousands(asset.size())
            ));
        }

        let unused_total = format!(
            "Total unused: {} files, {} bytes",
            report.unused.len(),
            format_thousands(report.unused_bytes())
        );
        out.push('\n');
        out.push_str(&ColoredText::plain(unused_total).bold().render(self.color));
        out.push('\n');
        out.push_str(&format!("Total used: {} files\n", report.used.len()));

        out
    }
}
