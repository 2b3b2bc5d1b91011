//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Report formatting
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Report rendering

pub mod cli;
pub mod factory;
pub mod format;
pub mod output;
pub mod text;
pub mod theme;

pub use cli::{Cli, ColorWhen};
pub use factory::create_scan_use_case;
pub use format::format_thousands;
pub use output::{ReportRenderer, TextRenderer};
