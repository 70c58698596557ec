//! Pattern rules applied to every scanned line.
//!
//! The built-in table groups rules by category (Legacy Code, Security,
//! Performance). Extra rules can be declared in `debtscan.toml` under
//! `[[rules]]`; those are validated and compiled here before any scanning
//! starts, so a bad pattern or an unknown severity never reaches the
//! aggregation stage.

use crate::error::RuleError;
use crate::models::Severity;
use regex::Regex;
use serde::Deserialize;

/// One reusable pattern with its category, message, and severity.
///
/// Rules are built once per run and shared read-only across all files.
/// Each pattern is evaluated independently against a single line's raw
/// text; no state is carried between lines.
pub struct Rule {
    pub category: String,
    pub pattern: Regex,
    pub message: String,
    pub severity: Severity,
}

impl Rule {
    pub fn new(
        category: &str,
        pattern: &str,
        message: &str,
        severity: Severity,
    ) -> Result<Rule, RuleError> {
        let pattern = Regex::new(pattern).map_err(|e| RuleError::BadPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Rule {
            category: category.to_string(),
            pattern,
            message: message.to_string(),
            severity,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
/// A rule as written in the config file, before validation.
pub struct RuleSpec {
    pub category: String,
    pub pattern: String,
    pub message: String,
    pub severity: String,
}

impl RuleSpec {
    /// Validate and compile into a usable `Rule`.
    pub fn compile(&self) -> Result<Rule, RuleError> {
        let severity: Severity = self.severity.parse().map_err(RuleError::BadSeverity)?;
        Rule::new(&self.category, &self.pattern, &self.message, severity)
    }
}

/// The built-in rule table.
///
/// The loose-equality pattern is written as `==(?:[^=]|$)` because the
/// regex crate has no lookahead; it matches the same lines as the
/// conventional `==(?!=)`. The nested-loop pattern embeds a `\n` and so
/// can never match a single line; it is kept for compatibility with the
/// published rule table.
pub fn builtin_rules() -> Vec<Rule> {
    let table: &[(&str, &str, &str, Severity)] = &[
        (
            "Legacy Code",
            r"\bvar\s+\w+",
            "Use let/const instead of var",
            Severity::Medium,
        ),
        (
            "Legacy Code",
            r"==(?:[^=]|$)",
            "Use strict equality (===)",
            Severity::Low,
        ),
        (
            "Security",
            r#"password\s*=\s*["'][^"']+["']"#,
            "Hard-coded password",
            Severity::Critical,
        ),
        (
            "Security",
            r#"api[_-]?key\s*=\s*["'][^"']+["']"#,
            "Hard-coded API key",
            Severity::Critical,
        ),
        (
            "Performance",
            r"for\s+\w+\s+in.*:\s*\n\s+for\s+\w+\s+in",
            "Nested loops",
            Severity::Medium,
        ),
    ];
    table
        .iter()
        .map(|(category, pattern, message, severity)| {
            Rule::new(category, pattern, message, *severity)
                .expect("built-in rule pattern must compile")
        })
        .collect()
}

/// Build the effective rule set: built-ins followed by compiled extras.
pub fn build_rules(extra: &[RuleSpec]) -> Result<Vec<Rule>, RuleError> {
    let mut rules = builtin_rules();
    for spec in extra {
        rules.push(spec.compile()?);
    }
    Ok(rules)
}
