//! Data model types.
//!
//! All persisted types serialize with camelCase field names so that stored
//! JSON matches the record shapes of the original browser application.

mod account;
mod issue;

pub use account::{Account, NewAccount, Profile};
pub use issue::{Issue, Location, NewIssue, Status, DEFAULT_LOCATION};
