//! Issue browsing commands: list, show, mine.

use crate::auth::CredentialStore;
use crate::browse::{CategoryFilter, FilterChange, IssueBrowser, StatusFilter};
use crate::cli::pager::{self, page_strip};
use crate::cli::IssueListArgs;
use crate::error::{Error, Result};
use crate::issues::IssueRepository;
use crate::model::Issue;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListOutput<'a> {
    issues: &'a [Issue],
    page: usize,
    page_count: usize,
    total: usize,
}

/// Execute the list command: run the pipeline and render the visible
/// page plus the pagination strip.
///
/// # Errors
///
/// `InvalidArgument` for an unrecognized status filter.
pub fn execute_list(args: &IssueListArgs, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut store = super::open_store(db_path)?;
    let issues = IssueRepository::new(&mut store).all()?;
    let mut browser = IssueBrowser::new(issues);

    if args.category != "all" {
        let (category, suggestion) = crate::validate::normalize_category(&args.category);
        if let Some(suggested) = suggestion {
            debug!(given = %category, %suggested, "category filter matches nothing known");
        }
        browser.set_filter(FilterChange::Category(CategoryFilter::Category(category)));
    }

    if args.status != "all" {
        let status = crate::validate::normalize_status(&args.status).map_err(
            |(value, suggestion)| {
                let msg = if let Some(s) = suggestion {
                    format!("Invalid status '{value}'. Did you mean '{s}'?")
                } else {
                    format!(
                        "Invalid status '{value}'. Valid: reported, pending, in-progress, resolved"
                    )
                };
                Error::InvalidArgument(msg)
            },
        )?;
        browser.set_filter(FilterChange::Status(StatusFilter::Status(status)));
    }

    if let Some(ref term) = args.search {
        browser.set_search_term(term);
    }

    if args.page != 1 {
        browser.set_page(args.page);
        if browser.current_page() != args.page {
            // The original UI ignored out-of-range clicks; we land on
            // page 1 and say nothing above debug level.
            debug!(requested = args.page, "page out of range, showing page 1");
        }
    }

    if json {
        let output = ListOutput {
            issues: browser.visible_page(),
            page: browser.current_page(),
            page_count: browser.page_count(),
            total: browser.filtered().len(),
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if browser.filtered().is_empty() {
        println!("No issues found matching your criteria.");
        return Ok(());
    }

    for issue in browser.visible_page() {
        print_issue_line(issue);
    }

    println!();
    println!(
        "Page {} of {} ({} issues)",
        browser.current_page(),
        browser.page_count(),
        browser.filtered().len()
    );
    let strip = pager::render(&page_strip(browser.current_page(), browser.page_count()));
    if !strip.is_empty() {
        println!("{strip}");
    }

    Ok(())
}

/// Execute the show command: the details view for one issue.
///
/// # Errors
///
/// `IssueNotFound` when no issue has the given id.
pub fn execute_show(id: i64, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut store = super::open_store(db_path)?;
    let issue = IssueRepository::new(&mut store)
        .find(id)?
        .ok_or(Error::IssueNotFound { id })?;

    if json {
        println!("{}", serde_json::to_string(&issue)?);
        return Ok(());
    }

    println!("#{} {}", issue.id, issue.title);
    println!();
    println!("  Status:    {}", issue.status.label());
    println!("  Category:  {}", issue.category);
    println!("  Reported:  {} by {}", issue.reported_date, issue.reported_by);
    println!(
        "  Location:  {:.4}, {:.4}",
        issue.location.lat, issue.location.lng
    );
    println!();
    println!("{}", issue.description);

    Ok(())
}

/// Execute the mine command: the logged-in account's issue history.
///
/// # Errors
///
/// `NotLoggedIn` without an active session.
pub fn execute_mine(db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut store = super::open_store(db_path)?;

    let session = CredentialStore::new(&mut store)
        .current_session()?
        .ok_or(Error::NotLoggedIn)?;

    let issues = IssueRepository::new(&mut store).by_reporter(&session.email)?;

    if json {
        let output = ListOutput {
            issues: &issues,
            page: 1,
            page_count: usize::from(!issues.is_empty()),
            total: issues.len(),
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if issues.is_empty() {
        println!("You haven't reported any issues yet.");
        return Ok(());
    }

    for issue in &issues {
        print_issue_line(issue);
    }
    println!();
    println!("{} issues reported by {}", issues.len(), session.email);

    Ok(())
}

fn print_issue_line(issue: &Issue) {
    println!(
        "#{:<4} {:<42} [{}] {} {}",
        issue.id,
        truncate(&issue.title, 42),
        issue.category,
        issue.status.label(),
        issue.reported_date
    );
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
