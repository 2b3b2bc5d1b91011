//! asset-audit CLI - find orphaned assets in a static-site project
//!
//! Usage: asset-audit [OPTIONS] [ROOT]
//!
//! Scans `ROOT/assets` against the root markdown pages, liquid includes and
//! layouts, and SCSS partials, then prints which assets are referenced and
//! which are not.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::LevelFilter;

use asset_audit::presentation::{create_scan_use_case, Cli, ReportRenderer, TextRenderer};

mod ui;

/// Map `-v` occurrences to a log level; logs go to stderr.
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .init();

    let color = ui::color_enabled(
        cli.color,
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
    );

    let root = cli
        .root
        .canonicalize()
        .with_context(|| format!("cannot resolve project root {}", cli.root.display()))?;
    log::info!("scanning {}", root.display());

    let report = create_scan_use_case()
        .execute(&root)
        .with_context(|| format!("scan of {} failed", root.display()))?;

    print!("{}", TextRenderer::new(color).render(&report));

    Ok(())
}
