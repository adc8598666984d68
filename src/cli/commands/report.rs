//! File a new issue as the logged-in account.

use crate::auth::CredentialStore;
use crate::cli::ReportArgs;
use crate::error::{Error, Result};
use crate::issues::IssueRepository;
use crate::model::{Location, NewIssue};
use crate::validate::normalize_category;
use std::path::PathBuf;
use tracing::warn;

/// Execute the report command.
///
/// # Errors
///
/// `NotLoggedIn` without an active session; `MissingFields` when a
/// required field is blank.
pub fn execute(args: &ReportArgs, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut store = super::open_store(db_path)?;

    let session = CredentialStore::new(&mut store)
        .current_session()?
        .ok_or(Error::NotLoggedIn)?;

    let (category, suggestion) = normalize_category(&args.category);
    if let Some(suggested) = suggestion {
        warn!(given = %category, %suggested, "unrecognized category");
    }

    let location = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => Some(Location { lat, lng }),
        _ => None,
    };

    let issue = IssueRepository::new(&mut store).create(&NewIssue {
        reporter_email: session.email,
        title: args.title.clone(),
        description: args.description.clone(),
        category,
        location,
    })?;

    if json {
        println!("{}", serde_json::to_string(&issue)?);
    } else {
        println!("Reported issue #{}: {}", issue.id, issue.title);
        println!("  Category: {}", issue.category);
        println!("  Status:   {}", issue.status.label());
        println!(
            "  Location: {:.4}, {:.4}",
            issue.location.lat, issue.location.lng
        );
    }

    Ok(())
}
