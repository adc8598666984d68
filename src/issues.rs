//! Issue repository.
//!
//! Owns the `civictrack_issues` collection: creation, identity
//! assignment, lookup, and first-run demo seeding.

use crate::error::{Error, Result};
use crate::model::{Issue, Location, NewIssue, Status, DEFAULT_LOCATION};
use crate::storage::LocalStore;
use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

/// Storage key for the issue collection.
const ISSUES_KEY: &str = "civictrack_issues";

/// The issue repository over the local store.
pub struct IssueRepository<'a> {
    store: &'a mut LocalStore,
}

impl<'a> IssueRepository<'a> {
    pub fn new(store: &'a mut LocalStore) -> Self {
        Self { store }
    }

    /// File a new issue.
    ///
    /// Assigns a monotonic id (`max(existing) + 1`), stamps today's
    /// date, fixes status to `reported`, and appends to the collection.
    /// The location falls back to the city-hall coordinate when the
    /// caller gives none.
    ///
    /// # Errors
    ///
    /// `MissingFields` when reporter email, title, description, or
    /// category is empty. Presence only; no format rules here.
    pub fn create(&mut self, input: &NewIssue) -> Result<Issue> {
        let mut missing = Vec::new();
        if input.reporter_email.trim().is_empty() {
            missing.push("reporter email");
        }
        if input.title.trim().is_empty() {
            missing.push("title");
        }
        if input.description.trim().is_empty() {
            missing.push("description");
        }
        if input.category.trim().is_empty() {
            missing.push("category");
        }
        if !missing.is_empty() {
            return Err(Error::MissingFields { fields: missing });
        }

        let mut issues = self.load()?;
        // max+1 rather than len+1: ids stay unique even if the
        // collection ever shrinks.
        let id = issues.iter().map(|i| i.id).max().unwrap_or(0) + 1;

        let issue = Issue {
            id,
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            category: input.category.trim().to_lowercase(),
            status: Status::Reported,
            reported_by: input.reporter_email.clone(),
            reported_date: Utc::now().date_naive(),
            location: input.location.unwrap_or(DEFAULT_LOCATION),
            images: Vec::new(),
        };

        issues.push(issue.clone());
        self.store.put_json(ISSUES_KEY, &issues)?;
        info!(id, category = %issue.category, "created issue");

        Ok(issue)
    }

    /// All issues, insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails.
    pub fn all(&self) -> Result<Vec<Issue>> {
        self.load()
    }

    /// Issues filed by `email`, exact case-sensitive match, insertion
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails.
    pub fn by_reporter(&self, email: &str) -> Result<Vec<Issue>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|i| i.reported_by == email)
            .collect())
    }

    /// Single-record lookup backing the details view.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails.
    pub fn find(&self, id: i64) -> Result<Option<Issue>> {
        Ok(self.load()?.into_iter().find(|i| i.id == id))
    }

    /// Seed the fixed demo dataset on first run.
    ///
    /// Writes the 6 demo records only when the collection is empty or
    /// absent; returns how many were written (6 or 0).
    ///
    /// # Errors
    ///
    /// Returns an error if a store access fails.
    pub fn seed_demo_data(&mut self) -> Result<usize> {
        if !self.load()?.is_empty() {
            debug!("issues already present, skipping seed");
            return Ok(0);
        }

        let seed = demo_issues();
        let count = seed.len();
        self.store.put_json(ISSUES_KEY, &seed)?;
        info!(count, "seeded demo issues");
        Ok(count)
    }

    fn load(&self) -> Result<Vec<Issue>> {
        Ok(self.store.get_json(ISSUES_KEY)?.unwrap_or_default())
    }
}

fn demo_issue(
    id: i64,
    title: &str,
    description: &str,
    category: &str,
    status: Status,
    reported_by: &str,
    date: (i32, u32, u32),
    lat: f64,
    lng: f64,
) -> Issue {
    Issue {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        status,
        reported_by: reported_by.to_string(),
        reported_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap_or_default(),
        location: Location { lat, lng },
        images: Vec::new(),
    }
}

/// The demo dataset, preserved literally from the original application.
#[must_use]
pub fn demo_issues() -> Vec<Issue> {
    vec![
        demo_issue(
            1,
            "Pothole on Main Street",
            "Large pothole causing damage to vehicles near the intersection of Main St and Oak Ave.",
            "infrastructure",
            Status::InProgress,
            "john@example.com",
            (2024, 1, 15),
            40.7128,
            -74.0060,
        ),
        demo_issue(
            2,
            "Broken Streetlight",
            "Street light has been out for weeks, creating safety concerns for pedestrians at night.",
            "safety",
            Status::Reported,
            "jane@example.com",
            (2024, 1, 20),
            40.7589,
            -73.9851,
        ),
        demo_issue(
            3,
            "Illegal Dumping in Park",
            "Construction debris dumped illegally in Riverside Park, affecting the natural environment.",
            "environment",
            Status::Pending,
            "bob@example.com",
            (2024, 1, 18),
            40.7831,
            -73.9712,
        ),
        demo_issue(
            4,
            "Water Main Break",
            "Burst water pipe causing flooding on Elm Street, disrupting traffic and water service.",
            "utilities",
            Status::InProgress,
            "alice@example.com",
            (2024, 1, 22),
            40.7505,
            -73.9934,
        ),
        demo_issue(
            5,
            "Damaged Playground Equipment",
            "Swing set at Central Park has broken chains, posing safety risk to children.",
            "safety",
            Status::Resolved,
            "charlie@example.com",
            (2024, 1, 10),
            40.7829,
            -73.9654,
        ),
        demo_issue(
            6,
            "Graffiti on Public Building",
            "Vandalism on the side of the community center building needs to be cleaned.",
            "infrastructure",
            Status::Pending,
            "diana@example.com",
            (2024, 1, 25),
            40.7614,
            -73.9776,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_issue(title: &str) -> NewIssue {
        NewIssue {
            reporter_email: "a@b.com".to_string(),
            title: title.to_string(),
            description: "desc".to_string(),
            category: "safety".to_string(),
            location: None,
        }
    }

    #[test]
    fn test_create_assigns_identity_and_defaults() {
        let mut store = LocalStore::open_memory().unwrap();
        let mut repo = IssueRepository::new(&mut store);

        let issue = repo.create(&new_issue("First")).unwrap();
        assert_eq!(issue.id, 1);
        assert_eq!(issue.status, Status::Reported);
        assert_eq!(issue.location, DEFAULT_LOCATION);
        assert_eq!(issue.reported_date, Utc::now().date_naive());
        assert!(issue.images.is_empty());

        let second = repo.create(&new_issue("Second")).unwrap();
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_create_ids_follow_max_not_length() {
        let mut store = LocalStore::open_memory().unwrap();
        let mut repo = IssueRepository::new(&mut store);
        repo.seed_demo_data().unwrap();

        let issue = repo.create(&new_issue("Seventh")).unwrap();
        assert_eq!(issue.id, 7);
    }

    #[test]
    fn test_create_requires_fields() {
        let mut store = LocalStore::open_memory().unwrap();
        let mut repo = IssueRepository::new(&mut store);

        let result = repo.create(&NewIssue {
            reporter_email: String::new(),
            title: "t".to_string(),
            description: String::new(),
            category: "safety".to_string(),
            location: None,
        });
        assert!(matches!(
            result,
            Err(Error::MissingFields { fields })
                if fields == ["reporter email", "description"]
        ));
    }

    #[test]
    fn test_all_preserves_insertion_order() {
        let mut store = LocalStore::open_memory().unwrap();
        let mut repo = IssueRepository::new(&mut store);
        repo.create(&new_issue("First")).unwrap();
        repo.create(&new_issue("Second")).unwrap();

        let titles: Vec<_> = repo.all().unwrap().into_iter().map(|i| i.title).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn test_by_reporter_is_case_sensitive() {
        let mut store = LocalStore::open_memory().unwrap();
        let mut repo = IssueRepository::new(&mut store);
        repo.seed_demo_data().unwrap();

        assert_eq!(repo.by_reporter("jane@example.com").unwrap().len(), 1);
        assert!(repo.by_reporter("JANE@example.com").unwrap().is_empty());
    }

    #[test]
    fn test_find() {
        let mut store = LocalStore::open_memory().unwrap();
        let mut repo = IssueRepository::new(&mut store);
        repo.seed_demo_data().unwrap();

        assert_eq!(
            repo.find(2).unwrap().map(|i| i.title),
            Some("Broken Streetlight".to_string())
        );
        assert!(repo.find(99).unwrap().is_none());
    }

    #[test]
    fn test_seed_is_idempotent() {
        let mut store = LocalStore::open_memory().unwrap();
        let mut repo = IssueRepository::new(&mut store);

        assert_eq!(repo.seed_demo_data().unwrap(), 6);
        assert_eq!(repo.seed_demo_data().unwrap(), 0);
        assert_eq!(repo.all().unwrap().len(), 6);
    }

    #[test]
    fn test_seed_does_not_overwrite_existing() {
        let mut store = LocalStore::open_memory().unwrap();
        let mut repo = IssueRepository::new(&mut store);
        repo.create(&new_issue("Only")).unwrap();

        assert_eq!(repo.seed_demo_data().unwrap(), 0);
        assert_eq!(repo.all().unwrap().len(), 1);
    }
}
