//! Credential store and session management.
//!
//! Owns the `civictrack_users` account collection and the
//! `civictrack_user` session slot. Validation order for registration is
//! fixed: missing fields → email shape → password strength → duplicate
//! email. The first failing check wins.

use crate::error::{Error, Result};
use crate::model::{Account, NewAccount, Profile};
use crate::storage::LocalStore;
use crate::validate::is_valid_email;
use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

/// Storage key for the account collection (hash included).
const USERS_KEY: &str = "civictrack_users";

/// Storage key for the active session's redacted profile.
const SESSION_KEY: &str = "civictrack_user";

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Deterministic SHA-256 hex fingerprint of a password.
///
/// This obfuscates stored credentials; it is NOT hardened password
/// storage (no salt, no KDF). It replaces the original application's
/// 32-bit rolling fingerprint with a real one-way hash while keeping
/// login an exact `(email, hash)` match.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// The credential store: accounts plus the session slot.
///
/// Borrows the store exclusively; no other component touches the two
/// keys this module owns.
pub struct CredentialStore<'a> {
    store: &'a mut LocalStore,
}

impl<'a> CredentialStore<'a> {
    pub fn new(store: &'a mut LocalStore) -> Self {
        Self { store }
    }

    /// Register a new account.
    ///
    /// On success persists the account and returns the redacted profile.
    /// Registration does not establish the session; the caller logs in
    /// separately.
    ///
    /// # Errors
    ///
    /// `MissingFields`, `InvalidEmailFormat`, `WeakPassword`, or
    /// `DuplicateEmail`, checked in that order.
    pub fn register(&mut self, input: &NewAccount) -> Result<Profile> {
        let name = input.name.trim();
        let email = input.email.trim().to_lowercase();
        let phone = input.phone.trim();

        let mut missing = Vec::new();
        if name.is_empty() {
            missing.push("name");
        }
        if email.is_empty() {
            missing.push("email");
        }
        if input.password.is_empty() {
            missing.push("password");
        }
        if !missing.is_empty() {
            return Err(Error::MissingFields { fields: missing });
        }

        if !is_valid_email(&email) {
            return Err(Error::InvalidEmailFormat { email });
        }

        if input.password.len() < MIN_PASSWORD_LEN {
            return Err(Error::WeakPassword);
        }

        let mut accounts = self.accounts()?;
        if accounts.iter().any(|a| a.email == email) {
            return Err(Error::DuplicateEmail { email });
        }

        let now = Utc::now();
        // Timestamp-flavored id that still never collides within a store.
        let max_id = accounts.iter().map(|a| a.id).max().unwrap_or(0);
        let id = now.timestamp_millis().max(max_id + 1);

        let account = Account {
            id,
            name: name.to_string(),
            email,
            phone: phone.to_string(),
            password_hash: hash_password(&input.password),
            registered_at: now,
            last_login_at: None,
        };
        let profile = account.profile();

        accounts.push(account);
        self.store.put_json(USERS_KEY, &accounts)?;
        info!(email = %profile.email, id, "registered account");

        Ok(profile)
    }

    /// Authenticate and establish the session.
    ///
    /// On a match updates `last_login_at`, persists the account, writes
    /// the redacted profile to the session slot, and returns it.
    ///
    /// # Errors
    ///
    /// `AuthFailure` on any mismatch; unknown email and wrong password
    /// are deliberately indistinguishable, and nothing is mutated.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Profile> {
        let email = email.trim().to_lowercase();
        let hash = hash_password(password);

        let mut accounts = self.accounts()?;
        let Some(account) = accounts
            .iter_mut()
            .find(|a| a.email == email && a.password_hash == hash)
        else {
            debug!(%email, "login failed");
            return Err(Error::AuthFailure);
        };

        account.last_login_at = Some(Utc::now());
        let profile = account.profile();

        self.store.put_json(USERS_KEY, &accounts)?;
        self.store.put_json(SESSION_KEY, &profile)?;
        info!(email = %profile.email, "logged in");

        Ok(profile)
    }

    /// Clear the session slot. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store write fails.
    pub fn logout(&mut self) -> Result<()> {
        self.store.delete(SESSION_KEY)?;
        Ok(())
    }

    /// The active session's profile, if any. Pure read.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails.
    pub fn current_session(&self) -> Result<Option<Profile>> {
        self.store.get_json(SESSION_KEY)
    }

    /// Redacted listing of all accounts, insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails.
    pub fn profiles(&self) -> Result<Vec<Profile>> {
        Ok(self.accounts()?.iter().map(Account::profile).collect())
    }

    /// Bulk wipe: remove all accounts and the session.
    ///
    /// Returns the number of accounts removed. This is the only
    /// deletion path for accounts.
    ///
    /// # Errors
    ///
    /// Returns an error if a store write fails.
    pub fn clear_all(&mut self) -> Result<usize> {
        let count = self.accounts()?.len();
        self.store.delete(USERS_KEY)?;
        self.store.delete(SESSION_KEY)?;
        info!(count, "cleared all accounts");
        Ok(count)
    }

    fn accounts(&self) -> Result<Vec<Account>> {
        Ok(self.store.get_json(USERS_KEY)?.unwrap_or_default())
    }
}
