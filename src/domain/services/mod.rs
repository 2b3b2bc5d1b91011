//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod reference_checker;

pub use reference_checker::{Classification, ReferenceChecker, References, UsedAsset};
