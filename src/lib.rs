//! Debtscan core library.
//!
//! This crate exposes programmatic APIs for scanning a directory tree for
//! technical debt markers and building a ranked report with a health score.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `error`: Error taxonomy for scanning and persistence.
//! - `models`: Data models for findings, statistics, and the report.
//! - `rules`: Built-in and config-supplied pattern rules.
//! - `walk`: File selection with extension and exclusion filters.
//! - `scan`: Per-line scanning and the parallel scan driver.
//! - `report`: Health score, overall severity, and ranking.
//! - `output`: Human/JSON printers and report persistence.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod report;
pub mod rules;
pub mod scan;
pub mod utils;
pub mod walk;

pub use error::ScanError;
pub use models::{Finding, Report, Severity, Statistics};
pub use output::{render_text, save_report};
pub use scan::scan;
