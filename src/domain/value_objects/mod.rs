//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod path;
mod patterns;

pub use path::RelativePath;
pub use patterns::{ReferencePatterns, IMAGE_EXTENSIONS};
