//! Shared helpers for integration tests.
//!
//! `TestEnv` builds a throwaway site tree and runs the `asset-audit`
//! binary against it with colors forced off.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_asset-audit")
}

/// Isolated site tree for a single test
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create site temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a text file relative to the site root, creating parents.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        self.write_bytes(rel, content.as_bytes())
    }

    pub fn write_bytes(&self, rel: &str, content: &[u8]) -> PathBuf {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Asset of exactly `size` bytes.
    pub fn asset(&self, rel: &str, size: usize) -> PathBuf {
        self.write_bytes(rel, &vec![b'x'; size])
    }

    /// Run the binary with the site as the positional root.
    pub fn scan(&self, args: &[&str]) -> Output {
        Command::new(bin())
            .arg(self.root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .output()
            .expect("Failed to run asset-audit")
    }

    /// Run the binary from inside the site without a ROOT argument.
    pub fn scan_in_place(&self) -> Output {
        Command::new(bin())
            .current_dir(self.root.path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .output()
            .expect("Failed to run asset-audit")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Lines between a section header's closing rule and the next blank line.
pub fn section_items(report: &str, title: &str) -> Vec<String> {
    let lines: Vec<&str> = report.lines().collect();
    let Some(start) = lines.iter().position(|l| *l == title) else {
        return Vec::new();
    };
    lines[start + 2..]
        .iter()
        .take_while(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect()
}

pub const USED: &str = "USED ASSETS";
pub const UNUSED: &str = "UNUSED ASSETS (not referenced anywhere)";
