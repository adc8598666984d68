//! Issue model.

use chrono::NaiveDate;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Default report coordinate (city hall) used when the reporter gives none.
pub const DEFAULT_LOCATION: Location = Location {
    lat: 40.7128,
    lng: -74.0060,
};

/// Issue lifecycle status values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Reported,
    Pending,
    InProgress,
    Resolved,
}

impl Status {
    /// The string representation used on the wire and in filters.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reported => "reported",
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }

    /// Parse a canonical status string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "reported" => Some(Self::Reported),
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    /// Colored terminal badge for list and details views.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Reported => "reported".yellow().to_string(),
            Self::Pending => "pending".magenta().to_string(),
            Self::InProgress => "in-progress".blue().to_string(),
            Self::Resolved => "resolved".green().to_string(),
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Reported
    }
}

/// A geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// A reported civic problem record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique identifier, assigned monotonically by the repository.
    pub id: i64,

    pub title: String,

    pub description: String,

    /// Open-set category. The demo data uses infrastructure, safety,
    /// environment, and utilities, but any non-empty value is accepted.
    pub category: String,

    pub status: Status,

    /// Reporter's email. Not FK-enforced against accounts.
    pub reported_by: String,

    /// Date the issue was filed, serialized as `YYYY-MM-DD`.
    pub reported_date: NaiveDate,

    pub location: Location,

    /// Opaque image references. Carried for wire compatibility, unused
    /// by any core operation.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Raw report input, prior to validation and identity assignment.
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub reporter_email: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: Option<Location>,
}
