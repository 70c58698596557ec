//! Error taxonomy for the scan and persist steps.
//!
//! Per-file read failures are deliberately absent here: they are recovered
//! inside the scanner (the file is skipped) and never fail a run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist. Raised before any file is read.
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),
    /// Destination write failure from the persist step.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
/// Rejection of a user-supplied rule at validation time.
pub enum RuleError {
    #[error("invalid pattern '{pattern}': {reason}")]
    BadPattern { pattern: String, reason: String },
    #[error("{0}")]
    BadSeverity(String),
}
