//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Running without arguments scans the current directory
//! - Flags only affect presentation (color, log verbosity), never the scan

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// asset-audit - find assets a static site no longer references
#[derive(Parser, Debug)]
#[command(name = "asset-audit")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Scans assets/ against *.md, _includes/, _layouts/ and _sass/ under ROOT."
)]
pub struct Cli {
    /// Project root to scan
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
