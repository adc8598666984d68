//! Initialize the local store.

use crate::config::{ensure_parent_dir, resolve_store_path};
use crate::error::{Error, Result};
use crate::issues::IssueRepository;
use crate::storage::LocalStore;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct InitOutput {
    path: PathBuf,
    seeded_issues: usize,
}

/// Execute the init command.
///
/// Creates the store file, applies the schema, and seeds the demo
/// issues. `--force` recreates the store from scratch.
///
/// # Errors
///
/// Returns `AlreadyInitialized` when the store exists and `--force`
/// was not given.
pub fn execute(force: bool, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let path = resolve_store_path(db_path.map(PathBuf::as_path));

    if path.exists() {
        if !force {
            return Err(Error::AlreadyInitialized { path });
        }
        std::fs::remove_file(&path)?;
        // WAL sidecar files, if any
        for suffix in ["-wal", "-shm"] {
            let mut sidecar = path.clone().into_os_string();
            sidecar.push(suffix);
            let _ = std::fs::remove_file(PathBuf::from(sidecar));
        }
    }

    ensure_parent_dir(&path)?;
    let mut store = LocalStore::open(&path)?;
    let seeded = IssueRepository::new(&mut store).seed_demo_data()?;

    if json {
        let output = InitOutput {
            path,
            seeded_issues: seeded,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Initialized CivicTrack store");
        println!("  Store: {}", path.display());
        println!("  Seeded {seeded} demo issues");
        println!();
        println!("Next: register with 'ct register --name <name> --email <email>'");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_and_seeds() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("civictrack.db");

        execute(false, Some(&db), true).unwrap();
        assert!(db.exists());

        let store = LocalStore::open(&db).unwrap();
        let issues: Option<Vec<crate::model::Issue>> =
            store.get_json("civictrack_issues").unwrap();
        assert_eq!(issues.map(|v| v.len()), Some(6));
    }

    #[test]
    fn test_init_refuses_reinit_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("civictrack.db");

        execute(false, Some(&db), true).unwrap();
        let result = execute(false, Some(&db), true);
        assert!(matches!(result, Err(Error::AlreadyInitialized { .. })));

        // --force recreates
        execute(true, Some(&db), true).unwrap();
    }
}
