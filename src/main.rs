//! Debtscan CLI binary entry point.
//! Delegates to modules for scanning and report output.

mod cli;
mod config;
mod error;
mod models;
mod output;
mod report;
mod rules;
mod scan;
mod utils;
mod walk;

use clap::Parser;
use cli::{Cli, Commands};
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Scan {
            path,
            output_file,
            output,
            ext,
            exclude,
        } => {
            let root = PathBuf::from(&path);
            // Friendly error before any work when the path is absent
            if !root.exists() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!("Path not found: {}", root.to_string_lossy())
                );
                std::process::exit(2);
            }
            let eff = config::resolve_effective(
                &root,
                output.as_deref(),
                output_file.as_deref(),
                &ext,
                &exclude,
            );
            if config::load_config(&config::detect_config_root(&root)).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No debtscan.toml found; using defaults."
                );
            }
            let rules = match rules::build_rules(&eff.rules) {
                Ok(rules) => rules,
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("invalid rule in config: {}", e)
                    );
                    std::process::exit(2);
                }
            };
            let outcome = match scan::run_scan(&root, &eff.extensions, &eff.exclude_dirs, &rules)
            {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(2);
                }
            };
            let report = report::build_report(outcome);
            output::print_report(&report, &eff.output);
            let dest = PathBuf::from(&eff.report_file);
            match output::save_report(&report, &dest) {
                Ok(()) => {
                    eprintln!(
                        "{} {}",
                        utils::info_prefix(),
                        format!("Report saved to: {}", dest.to_string_lossy())
                    );
                }
                Err(e) => {
                    // The printed report stays valid; only persistence failed.
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("could not write report: {}", e)
                    );
                    std::process::exit(2);
                }
            }
        }
    }
}
