//! A small blog: pages, includes, layouts and partials sharing a few assets.

use std::fs;
use std::path::Path;

use asset_audit::presentation::create_scan_use_case;
use asset_audit::SourceKind;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn blog() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(root, "assets/img/logo.png", "png");
    write(root, "assets/img/avatar.jpg", "jpeg!");
    write(root, "assets/img/unused-banner.gif", "gif89a");
    write(root, "assets/css/print.css", "@media print {}");
    write(root, "assets/js/search.js", "console.log(1)");
    write(root, "assets/downloads/cv.pdf", "%PDF-1.4");

    write(root, "index.md", "---\nlayout: home\n---\n![](/assets/img/logo.png)\n");
    write(root, "about.md", "{% include bio.liquid %}\n");
    write(root, "_includes/avatar.liquid", "<img src=\"{{ 'avatar' | img }}\">\n");
    write(
        root,
        "_layouts/default.liquid",
        "<script src=\"/assets/js/search.js\"></script>\n",
    );
    write(root, "_sass/base/_print.scss", "@import url(\"print.css\");\n");
    write(root, "_drafts/old.md", "![](/assets/downloads/cv.pdf)\n");

    dir
}

#[test]
fn scenario_blog_partitions_assets() {
    let site = blog();
    let report = create_scan_use_case().execute(site.path()).unwrap();

    assert_eq!(report.asset_count, 6);
    assert_eq!(report.sources.get(SourceKind::Markdown), 2);
    assert_eq!(report.sources.get(SourceKind::Template), 2);
    assert_eq!(report.sources.get(SourceKind::Stylesheet), 1);

    let used: Vec<&str> = report
        .used
        .iter()
        .map(|u| u.asset.assets_path().as_str())
        .collect();
    assert_eq!(
        used,
        vec!["css/print.css", "img/avatar.jpg", "img/logo.png", "js/search.js"]
    );

    let unused: Vec<&str> = report
        .unused
        .iter()
        .map(|a| a.assets_path().as_str())
        .collect();
    assert_eq!(unused, vec!["downloads/cv.pdf", "img/unused-banner.gif"]);
    assert_eq!(report.unused_bytes(), 8 + 6);
    assert!(!report.is_clean());
}

#[test]
fn scenario_blog_records_reference_labels() {
    let site = blog();
    let report = create_scan_use_case().execute(site.path()).unwrap();

    let avatar = report
        .used
        .iter()
        .find(|u| u.asset.file_name() == "avatar.jpg")
        .unwrap();
    assert!(avatar.references.for_kind(SourceKind::Markdown).is_empty());
    assert_eq!(
        avatar.references.for_kind(SourceKind::Template),
        ["_includes/avatar.liquid".to_string()]
    );

    let print = report
        .used
        .iter()
        .find(|u| u.asset.file_name() == "print.css")
        .unwrap();
    assert_eq!(
        print.references.for_kind(SourceKind::Stylesheet),
        ["base/_print.scss".to_string()]
    );
}

#[test]
fn scenario_cleaning_up_makes_the_site_clean() {
    let site = blog();
    fs::remove_file(site.path().join("assets/downloads/cv.pdf")).unwrap();
    fs::remove_file(site.path().join("assets/img/unused-banner.gif")).unwrap();

    let report = create_scan_use_case().execute(site.path()).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.used.len(), 4);
    assert_eq!(report.unused_bytes(), 0);
}
