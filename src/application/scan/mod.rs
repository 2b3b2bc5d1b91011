//! Scan Use Case
//!
//! Finds the assets a static-site project no longer references.
//!
//! This module handles:
//! - Enumerating assets and markdown/template/stylesheet sources
//! - Checking each asset against every source file
//! - Partitioning assets into used and unused

mod enumerator;
mod result;
mod use_case;


pub use enumerator::FileEnumerator;
pub use result::{ScanReport, SourceCounts};
pub use use_case::ScanUseCase;
