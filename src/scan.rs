//! Line scanner and scan driver.
//!
//! Produces a `ScanOutcome` with the full finding list and running
//! statistics. Per-line evaluation is pure: `match_rule` takes one rule
//! and one line and returns an optional finding, with no state carried
//! between invocations. Files are scanned in parallel; each file yields
//! an owned partial outcome and the partials are folded in discovery
//! order, so the result is identical to a serial scan.

use crate::error::ScanError;
use crate::models::{Finding, Report, Severity, Statistics};
use crate::rules::{builtin_rules, Rule};
use crate::walk::{default_exclude_dirs, default_extensions, select_files};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Result of scanning a set of files: all findings plus statistics.
///
/// Both halves stay consistent after any prefix of files, so a caller
/// aborting between files still holds a valid partial outcome.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub findings: Vec<Finding>,
    pub statistics: Statistics,
}

/// Evaluate one rule against one line. Returns a finding on match.
pub fn match_rule(rule: &Rule, line: &str, file: &str, line_no: usize) -> Option<Finding> {
    if !rule.pattern.is_match(line) {
        return None;
    }
    Some(Finding {
        category: rule.category.clone(),
        severity: rule.severity,
        description: rule.message.clone(),
        file: file.to_string(),
        line: line_no,
        // Every pattern finding is flagged fixable; fixability is not yet
        // tied to rule metadata.
        auto_fixable: true,
    })
}

/// Scan one line: the TODO/FIXME detector first, then every rule in order.
/// A line matching N rules produces N findings.
pub fn scan_line(rules: &[Rule], line: &str, file: &str, line_no: usize) -> Vec<Finding> {
    let mut findings = Vec::new();
    let upper = line.to_uppercase();
    if upper.contains("TODO") || upper.contains("FIXME") {
        findings.push(Finding {
            category: "Documentation".to_string(),
            severity: Severity::Low,
            description: "TODO/FIXME found".to_string(),
            file: file.to_string(),
            line: line_no,
            auto_fixable: true,
        });
    }
    for rule in rules {
        if let Some(found) = match_rule(rule, line, file, line_no) {
            findings.push(found);
        }
    }
    findings
}

/// Scan one file's full content. Returns the findings and the line count
/// produced by a literal split on `\n` (a trailing newline contributes a
/// final empty element, which is counted but matches nothing).
pub fn scan_content(rules: &[Rule], file: &str, content: &str) -> (Vec<Finding>, usize) {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut findings = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        findings.extend(scan_line(rules, line, file, i + 1));
    }
    (findings, lines.len())
}

/// Scan one file from disk into an owned partial outcome.
///
/// Read failures are recovered: the file still counts toward
/// `total_files` but contributes zero findings and zero lines. Malformed
/// byte sequences are replaced rather than aborting the file.
fn scan_file(rules: &[Rule], path: &Path) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    let file = path.to_string_lossy().to_string();
    match fs::read(path) {
        Ok(bytes) => {
            let content = String::from_utf8_lossy(&bytes);
            let (findings, lines) = scan_content(rules, &file, &content);
            outcome.statistics.record_file(lines);
            for finding in &findings {
                outcome.statistics.record(finding);
            }
            outcome.findings = findings;
        }
        Err(e) => {
            eprintln!(
                "{} {}",
                crate::utils::note_prefix(),
                format!("skipping unreadable file {}: {}", file, e)
            );
            outcome.statistics.record_file(0);
        }
    }
    outcome
}

/// Scan every selected file under `root` with the given rule set.
///
/// Fails with `PathNotFound` before any file is read when the root is
/// missing. A single corrupt or unreadable file never aborts the run.
pub fn run_scan(
    root: &Path,
    extensions: &[String],
    exclude_dirs: &[String],
    rules: &[Rule],
) -> Result<ScanOutcome, ScanError> {
    let files = select_files(root, extensions, exclude_dirs)?;

    let per_file: Vec<ScanOutcome> = files.par_iter().map(|p| scan_file(rules, p)).collect();

    let mut outcome = ScanOutcome::default();
    for partial in per_file {
        outcome.statistics.merge(partial.statistics);
        outcome.findings.extend(partial.findings);
    }
    Ok(outcome)
}

/// Convenience entry point: scan with the built-in rules and default
/// extension/exclusion sets, returning a finished report.
pub fn scan(root: &Path) -> Result<Report, ScanError> {
    let outcome = run_scan(
        root,
        &default_extensions(),
        &default_exclude_dirs(),
        &builtin_rules(),
    )?;
    Ok(crate::report::build_report(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<Rule> {
        builtin_rules()
    }

    #[test]
    fn test_password_then_todo_yields_exactly_two_findings() {
        let content = "password = \"abc123\"\n// TODO fix this";
        let (findings, lines) = scan_content(&rules(), "a.js", content);
        assert_eq!(lines, 2);
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].category, "Security");
        assert_eq!(findings[0].severity, Severity::Critical);
        assert_eq!(findings[0].line, 1);
        assert_eq!(findings[1].category, "Documentation");
        assert_eq!(findings[1].severity, Severity::Low);
        assert_eq!(findings[1].line, 2);
        assert!(findings.iter().all(|f| f.auto_fixable));
    }

    #[test]
    fn test_one_line_can_match_many_rules() {
        let findings = scan_line(&rules(), "var password = \"hunter2\"", "a.js", 1);
        // var rule + password rule, no deduplication
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn test_todo_detector_is_case_insensitive() {
        let findings = scan_line(&rules(), "# todo: revisit", "a.py", 3);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].description, "TODO/FIXME found");
        assert_eq!(findings[0].line, 3);
    }

    #[test]
    fn test_line_count_follows_literal_split() {
        let (_, with_trailing) = scan_content(&rules(), "a.py", "a\nb\n");
        assert_eq!(with_trailing, 3);
        let (_, without_trailing) = scan_content(&rules(), "a.py", "a\nb");
        assert_eq!(without_trailing, 2);
        let (_, empty) = scan_content(&rules(), "a.py", "");
        assert_eq!(empty, 1);
    }

    #[test]
    fn test_run_scan_totals_stay_consistent() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("a.js"), "var x = 1\n// TODO\n").unwrap();
        std::fs::write(root.join("b.py"), "api_key = 'deadbeef'\n").unwrap();

        let outcome = run_scan(
            root,
            &default_extensions(),
            &default_exclude_dirs(),
            &rules(),
        )
        .unwrap();
        let stats = &outcome.statistics;
        assert_eq!(stats.total_files, 2);
        assert_eq!(outcome.findings.len(), stats.issues_by_severity.total());
        assert_eq!(
            stats.issues_by_category.values().sum::<usize>(),
            outcome.findings.len()
        );
    }

    #[test]
    fn test_rescan_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("a.js"), "var x = 1\npassword = \"s3cret\"\n").unwrap();

        let first = run_scan(
            root,
            &default_extensions(),
            &default_exclude_dirs(),
            &rules(),
        )
        .unwrap();
        let second = run_scan(
            root,
            &default_extensions(),
            &default_exclude_dirs(),
            &rules(),
        )
        .unwrap();
        assert_eq!(first.statistics, second.statistics);
        assert_eq!(first.findings, second.findings);
    }

    #[test]
    fn test_missing_root_fails_before_any_aggregation() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let err = run_scan(
            &missing,
            &default_extensions(),
            &default_exclude_dirs(),
            &rules(),
        )
        .expect_err("must fail");
        assert!(matches!(err, ScanError::PathNotFound(_)));
    }

    #[test]
    fn test_invalid_utf8_is_recovered_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join("bad.py"), b"# TODO\n\xff\xfe broken\n").unwrap();
        let outcome = run_scan(
            root,
            &default_extensions(),
            &default_exclude_dirs(),
            &rules(),
        )
        .unwrap();
        assert_eq!(outcome.statistics.total_files, 1);
        assert_eq!(outcome.findings.len(), 1);
    }
}
