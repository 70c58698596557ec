//! File selection: recursive enumeration under a root path filtered by an
//! extension allow-list and a set of excluded directory names.

use crate::error::ScanError;
use std::path::{Path, PathBuf};

/// Extensions scanned when no override is configured.
pub fn default_extensions() -> Vec<String> {
    ["py", "js", "ts", "java", "go", "rb", "php", "cs"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Directory names never descended into: build artifacts, dependency
/// caches, and version-control metadata.
pub fn default_exclude_dirs() -> Vec<String> {
    [
        "venv",
        "node_modules",
        "__pycache__",
        ".git",
        "build",
        "dist",
        "env",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// True when no component of `path` below `root` equals an excluded name.
fn is_selected(path: &Path, root: &Path, exclude_dirs: &[String]) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path);
    !rel.components().any(|c| {
        let name = c.as_os_str().to_string_lossy();
        exclude_dirs.iter().any(|ex| ex.as_str() == name)
    })
}

/// Enumerate candidate files under `root`.
///
/// Fails with `PathNotFound` before anything is read when the root does
/// not exist. Unreadable entries are skipped silently. The returned list
/// is sorted so downstream processing (and tie-breaking in the ranked
/// output) is reproducible regardless of filesystem enumeration order.
pub fn select_files(
    root: &Path,
    extensions: &[String],
    exclude_dirs: &[String],
) -> Result<Vec<PathBuf>, ScanError> {
    if !root.exists() {
        return Err(ScanError::PathNotFound(root.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for ext in extensions {
        let abs_glob = root.join(format!("**/*.{}", ext.trim_start_matches('.')));
        let pattern = abs_glob.to_string_lossy().to_string();
        let entries = match glob::glob(&pattern) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            if entry.is_file() && is_selected(&entry, root, exclude_dirs) {
                files.push(entry);
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(root: &Path, rel: &str, body: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    #[test]
    fn test_missing_root_is_path_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = select_files(&missing, &default_extensions(), &default_exclude_dirs())
            .expect_err("missing root must fail");
        assert!(matches!(err, ScanError::PathNotFound(_)));
    }

    #[test]
    fn test_extension_allow_list_and_exclusions() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "app.py", "x = 1\n");
        write(root, "notes.txt", "not code\n");
        write(root, "lib/util.js", "var a = 1\n");
        write(root, "node_modules/pkg/index.js", "var a = 1\n");
        write(root, "src/__pycache__/app.py", "x = 1\n");

        let files =
            select_files(root, &default_extensions(), &default_exclude_dirs()).unwrap();
        let rels: Vec<String> = files
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        assert_eq!(rels, vec!["app.py", "lib/util.js"]);
    }

    #[test]
    fn test_only_excluded_content_yields_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "node_modules/a.js", "var a = 1\n");
        write(root, "dist/b.py", "x = 1\n");
        let files =
            select_files(root, &default_extensions(), &default_exclude_dirs()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_leading_dot_in_extension_is_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "a.py", "x = 1\n");
        let files = select_files(root, &[".py".into()], &default_exclude_dirs()).unwrap();
        assert_eq!(files.len(), 1);
    }
}
