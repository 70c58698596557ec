//! Report construction: health score, overall severity, and ranking.

use crate::models::{Report, Severity};
use crate::scan::ScanOutcome;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Ranked findings kept in the report; statistics stay untruncated.
const MAX_REPORTED_ISSUES: usize = 50;

/// `max(0, 100 - critical*10 - total*0.5)`, rounded to two decimals.
pub fn health_score(critical: usize, total_issues: usize) -> f64 {
    let raw = 100.0 - (critical as f64) * 10.0 - (total_issues as f64) * 0.5;
    let clamped = raw.clamp(0.0, 100.0);
    (clamped * 100.0).round() / 100.0
}

/// Overall severity, first match wins: any critical, then more than five
/// highs, then more than twenty issues overall, otherwise low.
pub fn overall_severity(critical: usize, high: usize, total_issues: usize) -> Severity {
    if critical > 0 {
        Severity::Critical
    } else if high > 5 {
        Severity::High
    } else if total_issues > 20 {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// Build the final report from a completed scan outcome.
///
/// Findings are sorted by severity rank with a stable sort (ties keep
/// their discovery order) and truncated to the first 50.
pub fn build_report(outcome: ScanOutcome) -> Report {
    let ScanOutcome {
        mut findings,
        statistics,
    } = outcome;
    let total_issues = findings.len();
    let counts = statistics.issues_by_severity;

    findings.sort_by_key(|f| f.severity.rank());
    findings.truncate(MAX_REPORTED_ISSUES);

    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();

    Report {
        timestamp,
        health_score: health_score(counts.critical, total_issues),
        overall_severity: overall_severity(counts.critical, counts.high, total_issues),
        statistics,
        total_issues,
        issues: findings,
    }
}
