//! Scanning a tree whose directories differ from the Jekyll defaults.

use std::fs;
use std::path::Path;

use asset_audit::presentation::factory::create_scan_use_case_with_layout;
use asset_audit::{AuditError, ScanLayout};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn scenario_static_dir_and_html_templates() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "static/app.js", "1");
    write(root, "static/old.js", "22");
    write(root, "templates/base.html", "<script src=\"/static/app.js\"></script>");
    write(root, "_includes/ignored.liquid", "old.js");

    let layout = ScanLayout {
        assets_dir: "static".to_string(),
        template_dirs: vec!["templates".to_string()],
        template_glob: "*.html".to_string(),
        ..ScanLayout::default()
    };
    let report = create_scan_use_case_with_layout(layout).execute(root).unwrap();

    assert_eq!(report.asset_count, 2);
    assert_eq!(report.used.len(), 1);
    assert_eq!(report.used[0].asset.file_name(), "app.js");
    assert_eq!(report.unused.len(), 1);
    assert_eq!(report.unused[0].file_name(), "old.js");
}

#[test]
fn scenario_missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");

    let err = create_scan_use_case_with_layout(ScanLayout::default())
        .execute(&missing)
        .unwrap_err();

    assert!(matches!(err, AuditError::RootNotFound { .. }));
}
