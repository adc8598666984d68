//! Account administration commands: list, export, clear.

use crate::auth::CredentialStore;
use crate::error::{Error, Result};
use crate::issues::IssueRepository;
use crate::model::Profile;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportedAccount {
    #[serde(flatten)]
    profile: Profile,
    issue_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument {
    exported_at: chrono::DateTime<chrono::Utc>,
    accounts: Vec<ExportedAccount>,
    total_issues: usize,
}

/// Execute `user list`: redacted account listing.
///
/// # Errors
///
/// Returns an error only if the store access fails.
pub fn execute_list(db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut store = super::open_store(db_path)?;
    let profiles = CredentialStore::new(&mut store).profiles()?;

    if json {
        println!("{}", serde_json::to_string(&profiles)?);
        return Ok(());
    }

    if profiles.is_empty() {
        println!("No registered accounts.");
        return Ok(());
    }

    for p in &profiles {
        let last = p
            .last_login_at
            .map_or_else(|| "never".to_string(), |t| t.format("%Y-%m-%d").to_string());
        println!("{:<24} {:<32} last login: {}", p.name, p.email, last);
    }
    println!();
    println!("{} accounts", profiles.len());

    Ok(())
}

/// Execute `user export`: accounts plus per-account issue counts as a
/// JSON document, to stdout or a file.
///
/// # Errors
///
/// Returns an error if the store access or the file write fails.
pub fn execute_export(
    output: Option<&PathBuf>,
    db_path: Option<&PathBuf>,
    json: bool,
) -> Result<()> {
    let mut store = super::open_store(db_path)?;
    let profiles = CredentialStore::new(&mut store).profiles()?;
    let issues = IssueRepository::new(&mut store).all()?;

    let accounts = profiles
        .into_iter()
        .map(|profile| {
            let issue_count = issues
                .iter()
                .filter(|i| i.reported_by == profile.email)
                .count();
            ExportedAccount {
                profile,
                issue_count,
            }
        })
        .collect::<Vec<_>>();

    let document = ExportDocument {
        exported_at: chrono::Utc::now(),
        total_issues: issues.len(),
        accounts,
    };
    let payload = serde_json::to_string_pretty(&document)?;

    match output {
        Some(path) => {
            std::fs::write(path, &payload)?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "path": path,
                        "accounts": document.accounts.len(),
                    })
                );
            } else {
                println!(
                    "Exported {} accounts to {}",
                    document.accounts.len(),
                    path.display()
                );
            }
        }
        None => println!("{payload}"),
    }

    Ok(())
}

/// Execute `user clear`: bulk wipe of accounts and session.
///
/// # Errors
///
/// `InvalidArgument` without `--force`.
pub fn execute_clear(force: bool, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    if !force {
        return Err(Error::InvalidArgument(
            "this wipes every account; pass --force to confirm".to_string(),
        ));
    }

    let mut store = super::open_store(db_path)?;
    let removed = CredentialStore::new(&mut store).clear_all()?;

    if json {
        println!("{}", serde_json::json!({ "removed": removed }));
    } else {
        println!("Removed {removed} accounts and cleared the session");
    }

    Ok(())
}
