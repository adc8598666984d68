//! Version command implementation.

use crate::config::resolve_store_path;
use crate::error::Result;
use crate::storage::schema::CURRENT_SCHEMA_VERSION;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct VersionOutput<'a> {
    version: &'a str,
    build: &'a str,
    schema_version: i32,
    store: PathBuf,
    store_exists: bool,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build = if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    };
    let store = resolve_store_path(db_path.map(PathBuf::as_path));
    let store_exists = store.exists();

    if json {
        let output = VersionOutput {
            version,
            build,
            schema_version: CURRENT_SCHEMA_VERSION,
            store,
            store_exists,
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("ct version {version} ({build})");
    println!("  Schema: v{CURRENT_SCHEMA_VERSION}");
    println!(
        "  Store:  {}{}",
        store.display(),
        if store_exists { "" } else { " (not created yet)" }
    );
    Ok(())
}
