//! SQLite-backed key-value storage.
//!
//! The store holds one `kv` table whose values are JSON documents under
//! the `civictrack_` key namespace. WAL mode for cheap reads, idempotent
//! schema application on open.
//!
//! # Submodules
//!
//! - [`schema`] - Table definitions and pragmas
//! - [`local`] - The [`LocalStore`] engine

pub mod local;
pub mod schema;

pub use local::LocalStore;
