//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::ScanUseCase;
use crate::config::ScanLayout;
use crate::infrastructure::LocalFs;

/// Type alias for the concrete ScanUseCase with all dependencies
pub type ConcreteScanUseCase = ScanUseCase<LocalFs>;

/// Create a scan use case for the standard site layout
pub fn create_scan_use_case() -> ConcreteScanUseCase {
    create_scan_use_case_with_layout(ScanLayout::default())
}

/// Create a scan use case for a custom layout
pub fn create_scan_use_case_with_layout(layout: ScanLayout) -> ConcreteScanUseCase {
    ScanUseCase::new(LocalFs::new(), layout)
}
