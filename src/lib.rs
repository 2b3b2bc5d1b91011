//! asset-audit - find orphaned assets in a static-site project
//!
//! Scans a Jekyll-style tree, looks for every file under `assets/` in the
//! root markdown pages, liquid includes/layouts and SCSS partials, and
//! reports which assets nothing references.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ScanReport, ScanUseCase, SourceCounts};
pub use config::ScanLayout;
pub use domain::entities::{Asset, SourceFile, SourceKind};
pub use domain::services::{References, UsedAsset};
pub use error::{AuditError, AuditResult};
pub use infrastructure::LocalFs;
