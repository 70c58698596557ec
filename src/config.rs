//! Configuration discovery and effective settings resolution.
//!
//! Debtscan reads `debtscan.toml|yaml|yml` from the scan root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective`
//! config. Defaults:
//! - `output`: `human`
//! - `report_file`: `tech-debt-report.json`
//! - `extensions`: the built-in allow-list (see `walk::default_extensions`)
//! - `exclude`: entries are added on top of the built-in exclusion set
//! - `rules`: extra `[[rules]]` entries appended to the built-in table
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::rules::RuleSpec;
use crate::walk::{default_exclude_dirs, default_extensions};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `debtscan.toml|yaml|yml`.
pub struct DebtscanConfig {
    pub output: Option<String>,
    pub report_file: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    #[serde(default)]
    pub rules: Option<Vec<RuleSpec>>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the scan command.
pub struct Effective {
    pub output: String,
    pub report_file: String,
    pub extensions: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub rules: Vec<RuleSpec>,
}

/// Walk upward from `start` to find the directory holding a debtscan
/// config or a `.git` directory. Falls back to `start` itself.
pub fn detect_config_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("debtscan.toml").exists()
            || cur.join("debtscan.yaml").exists()
            || cur.join("debtscan.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `DebtscanConfig` from `debtscan.toml` or `debtscan.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<DebtscanConfig> {
    let toml_path = root.join("debtscan.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: DebtscanConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["debtscan.yaml", "debtscan.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: DebtscanConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// `scan_root` anchors config discovery. Extensions are replaced wholesale
/// by the first non-empty source; exclusions from CLI and config extend
/// the built-in set rather than replacing it.
pub fn resolve_effective(
    scan_root: &Path,
    cli_output: Option<&str>,
    cli_report_file: Option<&str>,
    cli_extensions: &[String],
    cli_excludes: &[String],
) -> Effective {
    let root = detect_config_root(scan_root);
    let cfg = load_config(&root).unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let report_file = cli_report_file
        .map(|s| s.to_string())
        .or(cfg.report_file)
        .unwrap_or_else(|| "tech-debt-report.json".to_string());

    let extensions = if !cli_extensions.is_empty() {
        cli_extensions.to_vec()
    } else {
        cfg.extensions.unwrap_or_else(default_extensions)
    };

    let mut exclude_dirs = default_exclude_dirs();
    if let Some(extra) = cfg.exclude {
        exclude_dirs.extend(extra);
    }
    exclude_dirs.extend(cli_excludes.iter().cloned());
    exclude_dirs.dedup();

    Effective {
        output,
        report_file,
        extensions,
        exclude_dirs,
        rules: cfg.rules.unwrap_or_default(),
    }
}
