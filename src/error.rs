//! Error types for CivicTrack.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (2=store, 3=not_found, 4=validation, 5=auth)
//! - Retryability flags for scripted consumers
//! - Context-aware recovery hints
//! - Structured JSON output for piped / non-TTY consumers

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CivicTrack operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
///
/// Each code maps to a SCREAMING_SNAKE string and a category-based
/// exit code. Scripts match on the string or on the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Store (exit 2)
    NotInitialized,
    AlreadyInitialized,
    DatabaseError,

    // Not Found (exit 3)
    IssueNotFound,

    // Validation (exit 4)
    MissingFields,
    InvalidEmailFormat,
    WeakPassword,
    DuplicateEmail,
    InvalidArgument,

    // Auth (exit 5)
    AuthFailure,
    NotLoggedIn,

    // I/O (exit 8)
    IoError,
    JsonError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::AlreadyInitialized => "ALREADY_INITIALIZED",
            Self::DatabaseError => "DATABASE_ERROR",
            Self::IssueNotFound => "ISSUE_NOT_FOUND",
            Self::MissingFields => "MISSING_FIELDS",
            Self::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            Self::WeakPassword => "WEAK_PASSWORD",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::AuthFailure => "AUTH_FAILURE",
            Self::NotLoggedIn => "NOT_LOGGED_IN",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
        }
    }

    /// Category-based exit code (2-8).
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NotInitialized | Self::AlreadyInitialized | Self::DatabaseError => 2,
            Self::IssueNotFound => 3,
            Self::MissingFields
            | Self::InvalidEmailFormat
            | Self::WeakPassword
            | Self::DuplicateEmail
            | Self::InvalidArgument => 4,
            Self::AuthFailure | Self::NotLoggedIn => 5,
            Self::IoError | Self::JsonError => 8,
        }
    }

    /// Whether the caller should retry with corrected input.
    ///
    /// True for validation errors and failed logins. False for
    /// not-found, I/O, or store errors beyond a transient lock.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::MissingFields
                | Self::InvalidEmailFormat
                | Self::WeakPassword
                | Self::DuplicateEmail
                | Self::InvalidArgument
                | Self::AuthFailure
                | Self::DatabaseError
        )
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in CivicTrack operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Not initialized: run `ct init` first")]
    NotInitialized,

    #[error("Already initialized at {path}")]
    AlreadyInitialized { path: PathBuf },

    #[error("Missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("Invalid email format: '{email}'")]
    InvalidEmailFormat { email: String },

    #[error("Password must be at least 6 characters")]
    WeakPassword,

    #[error("Email already registered: {email}")]
    DuplicateEmail { email: String },

    /// Unknown email and wrong password share one message on purpose,
    /// so a failed login never reveals which part was wrong.
    #[error("Invalid email or password")]
    AuthFailure,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Issue not found: {id}")]
    IssueNotFound { id: i64 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotInitialized => ErrorCode::NotInitialized,
            Self::AlreadyInitialized { .. } => ErrorCode::AlreadyInitialized,
            Self::MissingFields { .. } => ErrorCode::MissingFields,
            Self::InvalidEmailFormat { .. } => ErrorCode::InvalidEmailFormat,
            Self::WeakPassword => ErrorCode::WeakPassword,
            Self::DuplicateEmail { .. } => ErrorCode::DuplicateEmail,
            Self::AuthFailure => ErrorCode::AuthFailure,
            Self::NotLoggedIn => ErrorCode::NotLoggedIn,
            Self::IssueNotFound { .. } => ErrorCode::IssueNotFound,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Database(_) => ErrorCode::DatabaseError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint for humans and scripts.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NotInitialized => Some("Run `ct init` to create the local store".to_string()),

            Self::AlreadyInitialized { path } => Some(format!(
                "Store already exists at {}. Use `--force` to reinitialize.",
                path.display()
            )),

            Self::InvalidEmailFormat { .. } => {
                Some("Use a local@domain.tld address with no spaces".to_string())
            }

            Self::WeakPassword => Some("Choose a password of 6 or more characters".to_string()),

            Self::DuplicateEmail { email } => Some(format!(
                "An account with '{email}' already exists. Log in instead: ct login {email}"
            )),

            Self::AuthFailure => Some(
                "Check the email and password.\n  \
                 New here? Register: ct register --name <name> --email <email>"
                    .to_string(),
            ),

            Self::NotLoggedIn => Some(
                "Log in first: ct login <email>\n  \
                 Or register: ct register --name <name> --email <email>"
                    .to_string(),
            ),

            Self::IssueNotFound { id } => Some(format!(
                "No issue with ID {id}. Use `ct issue list` to see reported issues."
            )),

            Self::InvalidArgument(msg) => {
                if msg.contains("status") {
                    Some(
                        "Valid statuses: reported, pending, in-progress, resolved. \
                         Synonyms: new→reported, open→reported, wip→in-progress, \
                         done→resolved, fixed→resolved"
                            .to_string(),
                    )
                } else {
                    None
                }
            }

            Self::MissingFields { .. }
            | Self::Database(_)
            | Self::Io(_)
            | Self::Json(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    ///
    /// Includes error code, message, retryability, exit code, and
    /// optional recovery hint. Scripts parse this instead of stderr text.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": code.is_retryable(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}
