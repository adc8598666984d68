//! Account and session models.
//!
//! An [`Account`] is the stored credential record (hash included). A
//! [`Profile`] is the redacted projection that crosses the library
//! boundary and lives in the session slot — it never carries the hash.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user's credential and profile record.
///
/// Stored in the `civictrack_users` array. The `password_hash` field
/// never leaves the credential store; callers only ever see [`Profile`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Creation-time-unique identifier (millisecond timestamp flavor).
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Email address, stored lowercase. Unique key across accounts.
    pub email: String,

    /// Phone number (free-form, may be empty).
    pub phone: String,

    /// SHA-256 hex fingerprint of the password.
    pub password_hash: String,

    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,

    /// Last successful login, absent until the first one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Account {
    /// The redacted projection of this account.
    #[must_use]
    pub fn profile(&self) -> Profile {
        Profile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            registered_at: self.registered_at,
            last_login_at: self.last_login_at,
        }
    }
}

/// The redacted Account projection: every field except the hash.
///
/// This is the session value and the only account shape returned by
/// the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub registered_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Raw registration input, prior to validation.
///
/// Callers pass fields explicitly instead of the original's id-guessing
/// form lookup; trimming and email lowercasing happen at the boundary.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}
