//! Repository layer: statement-level access to projects and tasks.
//!
//! # Responsibility
//! - Keep SQL details inside the persistence boundary.
//! - Serialize enum labels and `YYYY-MM-DD` dates exactly on the way in, and
//!   reject rows that no longer round-trip on the way out.
//!
//! # Invariants
//! - Writes either fully commit or fully fail; every statement here is a
//!   single atomic SQLite statement.
//! - Read paths fail fast on a bad status/priority label or a bad required
//!   date. The one permissive exception: an unparseable optional end date
//!   reads back as `None`.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod project_repo;
pub mod task_repo;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failure, classified by the phase it occurred in.
#[derive(Debug)]
pub enum StoreError {
    /// The database file or schema could not be prepared.
    Init(rusqlite::Error),
    /// An insert or delete failed; nothing was persisted.
    Write(rusqlite::Error),
    /// A list query failed at the SQL layer.
    Read(rusqlite::Error),
    /// A stored row could not be reconstructed into a typed record.
    InvalidRow(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init(err) => write!(f, "failed to prepare database: {err}"),
            Self::Write(err) => write!(f, "write failed: {err}"),
            Self::Read(err) => write!(f, "query failed: {err}"),
            Self::InvalidRow(message) => write!(f, "invalid persisted row: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Init(err) | Self::Write(err) | Self::Read(err) => Some(err),
            Self::InvalidRow(_) => None,
        }
    }
}

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(crate) fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn date_from_db(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
