//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ScanUseCase` - Enumerate, check and partition a project's assets

pub mod scan;

pub use scan::{FileEnumerator, ScanReport, ScanUseCase, SourceCounts};
