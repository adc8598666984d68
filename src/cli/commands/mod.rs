//! Command implementations.

pub mod auth;
pub mod completions;
pub mod init;
pub mod issue;
pub mod report;
pub mod user;
pub mod version;

use crate::config::resolve_store_path;
use crate::error::{Error, Result};
use crate::issues::IssueRepository;
use crate::storage::LocalStore;
use std::path::PathBuf;

/// Open the store every non-init command runs against.
///
/// Errors with `NotInitialized` when the store file is missing, and
/// seeds the demo issues if the collection is empty (first-run
/// contract, idempotent).
pub(crate) fn open_store(db_path: Option<&PathBuf>) -> Result<LocalStore> {
    let path = resolve_store_path(db_path.map(PathBuf::as_path));
    if !path.exists() {
        return Err(Error::NotInitialized);
    }

    let mut store = LocalStore::open(&path)?;
    IssueRepository::new(&mut store).seed_demo_data()?;
    Ok(store)
}
