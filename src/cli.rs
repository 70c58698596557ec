//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "debtscan",
    version,
    about = "Debtscan — technical debt scanner",
    long_about = "Debtscan — a small, fast CLI that scans a source tree for technical debt markers, hard-coded secrets, and legacy constructs, then emits a ranked report with a health score.\n\nConfiguration precedence: CLI > debtscan.toml > defaults.",
    after_help = "Examples:\n  debtscan scan .\n  debtscan scan src --output json\n  debtscan scan . --output-file reports/debt.json --ext py --ext js",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current debtscan version.")]
    Version,
    /// Scan a directory tree for technical debt
    #[command(
        about = "Run a debt scan",
        long_about = "Walk the given path, apply the pattern rules to every matching file, and print a ranked report. The JSON report is also written to --output-file.",
        after_help = "Examples:\n  debtscan scan .\n  debtscan scan src --output json --output-file out/report.json"
    )]
    Scan {
        #[arg(help = "Path to analyze")]
        path: String,
        #[arg(
            short = 'o',
            long,
            help = "Report destination (default: tech-debt-report.json)"
        )]
        output_file: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long = "ext", help = "Extension allow-list override (repeatable)")]
        ext: Vec<String>,
        #[arg(long = "exclude", help = "Extra directory names to exclude (repeatable)")]
        exclude: Vec<String>,
    },
}
