//! Terminal-facing helpers for the binary

pub mod context;

pub use context::color_enabled;
