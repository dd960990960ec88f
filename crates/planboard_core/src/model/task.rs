//! Task record.

use crate::model::status::{ProjectStatus, TaskPriority};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A unit of work belonging to exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// `None` until the store assigns an id on insert.
    pub id: Option<i64>,
    /// Must reference an existing project at insertion time.
    pub project_id: i64,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub priority: TaskPriority,
    pub deadline: NaiveDate,
    /// Tasks share the project status vocabulary.
    pub status: ProjectStatus,
}
