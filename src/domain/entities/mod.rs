//! Domain Entities
//!
//! - `Asset` - A file under the assets directory
//! - `SourceFile` - A markdown, template or stylesheet file that may reference assets

mod asset;
mod source_file;

pub use asset::Asset;
pub use source_file::{SourceFile, SourceKind};
