//! Configuration management.
//!
//! Resolves where the local store lives. CivicTrack keeps a single
//! per-user database at `~/.civictrack/data/civictrack.db`; tests and
//! scripts redirect it with flags or environment variables.

use std::path::{Path, PathBuf};

/// File name of the SQLite store.
pub const STORE_FILE: &str = "civictrack.db";

/// Get the per-user CivicTrack directory (`~/.civictrack`).
#[must_use]
pub fn home_civictrack_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".civictrack"))
}

/// Check if test mode is enabled.
///
/// Test mode is enabled by setting `CIVICTRACK_TEST_MODE=1` (or any
/// value other than `0`/`false`). It redirects the default store path
/// under `CIVICTRACK_TEST_DIR`.
#[must_use]
pub fn is_test_mode() -> bool {
    std::env::var("CIVICTRACK_TEST_MODE")
        .map(|v| !v.is_empty() && v != "0" && v.to_lowercase() != "false")
        .unwrap_or(false)
}

/// Resolve the store path.
///
/// Priority:
/// 1. Explicit path from the `--db` flag
/// 2. Test mode: `$CIVICTRACK_TEST_DIR/civictrack.db`
/// 3. `CIVICTRACK_DB` environment variable
/// 4. `~/.civictrack/data/civictrack.db`
/// 5. Relative `.civictrack/civictrack.db` when no home dir resolves
#[must_use]
pub fn resolve_store_path(explicit_path: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit_path {
        return path.to_path_buf();
    }

    if is_test_mode() {
        if let Ok(dir) = std::env::var("CIVICTRACK_TEST_DIR") {
            if !dir.trim().is_empty() {
                return PathBuf::from(dir).join(STORE_FILE);
            }
        }
    }

    if let Ok(db_path) = std::env::var("CIVICTRACK_DB") {
        if !db_path.trim().is_empty() {
            return PathBuf::from(db_path);
        }
    }

    home_civictrack_dir().map_or_else(
        || Path::new(".civictrack").join(STORE_FILE),
        |dir| dir.join("data").join(STORE_FILE),
    )
}

/// Create the parent directory of `path` if it is missing.
///
/// # Errors
///
/// Returns an error if directory creation fails.
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_store_path_with_explicit() {
        let explicit = PathBuf::from("/custom/path/db.sqlite");
        assert_eq!(resolve_store_path(Some(&explicit)), explicit);
    }

    #[test]
    fn test_resolve_store_path_always_resolves() {
        // Without an explicit path the default still ends in the store
        // file name, whatever environment the test runs in.
        let path = resolve_store_path(None);
        assert!(path.ends_with(STORE_FILE) || path.file_name().is_some());
    }

    #[test]
    fn test_ensure_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join(STORE_FILE);

        ensure_parent_dir(&path).unwrap();
        assert!(path.parent().unwrap().exists());

        // Idempotent
        ensure_parent_dir(&path).unwrap();
    }
}
