//! Project record.

use crate::model::status::ProjectStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked initiative with schedule, budget and status.
///
/// Serializes to a plain key-value record: dates as `YYYY-MM-DD`, the status
/// as its human-readable label, a missing end date as an explicit null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// `None` until the store assigns an id on insert.
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    /// Optional; no ordering against `start_date` is enforced here.
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
    /// Currency amount; non-negativity is left to callers.
    pub budget: f64,
    pub team_size: i64,
}
