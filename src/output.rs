//! Output rendering for scan reports.
//!
//! Supports `human` (default) and `json` outputs, plus persistence of the
//! JSON form to disk. Pure compose functions are exposed for tests.

use crate::error::ScanError;
use crate::models::{Report, Severity};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;
use std::fs;
use std::path::Path;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn severity_tag(sev: Severity, color: bool) -> String {
    let tag = format!("[{}]", sev.as_str().to_uppercase());
    if !color {
        return tag;
    }
    match sev {
        Severity::Critical => tag.red().bold().to_string(),
        Severity::High => tag.red().to_string(),
        Severity::Medium => tag.yellow().to_string(),
        Severity::Low => tag.blue().to_string(),
    }
}

/// Render the human-readable summary: header, score, and the first ten
/// ranked findings with category, description, and `path:line` location.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let bar = "=".repeat(80);
    out.push_str(&bar);
    out.push('\n');
    out.push_str("TECHNICAL DEBT ANALYSIS REPORT\n");
    out.push_str(&bar);
    out.push('\n');
    out.push_str(&format!("Health Score: {}/100\n", report.health_score));
    out.push_str(&format!(
        "Overall Severity: {}\n",
        report.overall_severity.as_str().to_uppercase()
    ));
    out.push_str(&format!(
        "Files Analyzed: {}\n",
        report.statistics.total_files
    ));
    out.push_str(&format!("Total Issues: {}\n", report.total_issues));
    out.push_str("\nTop 10 Issues:\n");
    for (i, issue) in report.issues.iter().take(10).enumerate() {
        out.push_str(&format!(
            "\n{}. {} {}\n",
            i + 1,
            severity_tag(issue.severity, false),
            issue.category
        ));
        out.push_str(&format!("   {}\n", issue.description));
        out.push_str(&format!("   {}:{}\n", issue.file, issue.line));
    }
    out
}

/// Print the report in the requested format.
pub fn print_report(report: &Report, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(report)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            if !color {
                print!("{}", render_text(report));
                return;
            }
            let bar = "=".repeat(80);
            println!("{}", bar);
            println!("{}", "TECHNICAL DEBT ANALYSIS REPORT".bold());
            println!("{}", bar);
            println!("Health Score: {}/100", report.health_score.bold());
            println!(
                "Overall Severity: {}",
                severity_tag(report.overall_severity, true)
            );
            println!("Files Analyzed: {}", report.statistics.total_files);
            println!("Total Issues: {}", report.total_issues);
            println!("\nTop 10 Issues:");
            for (i, issue) in report.issues.iter().take(10).enumerate() {
                println!(
                    "\n{}. {} {}",
                    i + 1,
                    severity_tag(issue.severity, true),
                    issue.category.bold()
                );
                println!("   {}", issue.description);
                println!("   {}:{}", issue.file, issue.line);
            }
        }
    }
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report) -> JsonVal {
    // Directly serialize the report, keeping the stable wire shape
    serde_json::to_value(report).unwrap()
}

/// Persist the JSON report to `destination`, creating intermediate
/// directories as needed. Only the target file is written; failures do
/// not invalidate the already-built report.
pub fn save_report(report: &Report, destination: &Path) -> Result<(), ScanError> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let body = serde_json::to_string_pretty(&compose_report_json(report))
        .expect("report serialization cannot fail");
    fs::write(destination, body)?;
    Ok(())
}
