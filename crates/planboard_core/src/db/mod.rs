//! SQLite bootstrap for the tracker database.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the tracker core.
//! - Create the schema on first use.
//!
//! # Invariants
//! - Every connection handed out has `foreign_keys=ON`; cascade deletes rely
//!   on it, and SQLite scopes the pragma to a single connection.
//! - Schema creation is idempotent; there is no migration versioning.

mod open;

pub use open::{open_db, open_db_in_memory};
