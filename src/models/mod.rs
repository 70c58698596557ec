//! Shared data models for findings, running statistics, and the report.

pub mod severity;

pub use severity::Severity;

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single issue found at a specific file and line.
pub struct Finding {
    pub category: String,
    pub severity: Severity,
    pub description: String,
    pub file: String,
    pub line: usize,
    pub auto_fixable: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Issue counts per severity. A fixed struct (rather than a map) so the
/// serialized form always carries all four keys.
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityCounts {
    pub fn bump(&mut self, sev: Severity) {
        match sev {
            Severity::Critical => self.critical += 1,
            Severity::High => self.high += 1,
            Severity::Medium => self.medium += 1,
            Severity::Low => self.low += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Running scan statistics. Write-only during a scan: findings and files
/// are recorded incrementally and nothing is ever removed.
pub struct Statistics {
    pub total_files: usize,
    pub total_lines: usize,
    pub issues_by_severity: SeverityCounts,
    pub issues_by_category: BTreeMap<String, usize>,
}

impl Statistics {
    /// Account for one finding. The category key is created on first sight.
    pub fn record(&mut self, finding: &Finding) {
        self.issues_by_severity.bump(finding.severity);
        *self
            .issues_by_category
            .entry(finding.category.clone())
            .or_insert(0) += 1;
    }

    /// Account for one processed file and its line count.
    pub fn record_file(&mut self, lines: usize) {
        self.total_files += 1;
        self.total_lines += lines;
    }

    /// Fold another partial statistics object into this one. Used to join
    /// per-file partials produced by parallel workers.
    pub fn merge(&mut self, other: Statistics) {
        self.total_files += other.total_files;
        self.total_lines += other.total_lines;
        self.issues_by_severity.critical += other.issues_by_severity.critical;
        self.issues_by_severity.high += other.issues_by_severity.high;
        self.issues_by_severity.medium += other.issues_by_severity.medium;
        self.issues_by_severity.low += other.issues_by_severity.low;
        for (category, count) in other.issues_by_category {
            *self.issues_by_category.entry(category).or_insert(0) += count;
        }
    }
}

#[derive(Debug, Clone, Serialize)]
/// Final scan report: derived once from completed statistics plus the
/// finding list, then read-only.
pub struct Report {
    pub timestamp: String,
    pub health_score: f64,
    pub overall_severity: Severity,
    pub statistics: Statistics,
    pub total_issues: usize,
    pub issues: Vec<Finding>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(category: &str, sev: Severity) -> Finding {
        Finding {
            category: category.into(),
            severity: sev,
            description: "d".into(),
            file: "f".into(),
            line: 1,
            auto_fixable: true,
        }
    }

    #[test]
    fn test_record_keeps_severity_and_category_totals_equal() {
        let mut stats = Statistics::default();
        stats.record(&finding("Security", Severity::Critical));
        stats.record(&finding("Security", Severity::Critical));
        stats.record(&finding("Documentation", Severity::Low));
        assert_eq!(stats.issues_by_severity.total(), 3);
        assert_eq!(stats.issues_by_category.values().sum::<usize>(), 3);
        assert_eq!(stats.issues_by_category["Security"], 2);
    }

    #[test]
    fn test_merge_folds_partials() {
        let mut a = Statistics::default();
        a.record_file(10);
        a.record(&finding("Security", Severity::High));
        let mut b = Statistics::default();
        b.record_file(5);
        b.record(&finding("Security", Severity::Low));
        b.record(&finding("Legacy Code", Severity::Medium));
        a.merge(b);
        assert_eq!(a.total_files, 2);
        assert_eq!(a.total_lines, 15);
        assert_eq!(a.issues_by_severity.total(), 3);
        assert_eq!(a.issues_by_category["Security"], 2);
        assert_eq!(a.issues_by_category["Legacy Code"], 1);
    }
}
