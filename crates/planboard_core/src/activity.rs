//! Human-readable activity journal.
//!
//! # Responsibility
//! - Shape store events into readable activity lines.
//! - Emit them through the `log` facade under the `activity` target so the
//!   logging backend routes them with everything else.
//!
//! # Invariants
//! - An instance is injected into whichever component wants to journal;
//!   there is no ambient activity global.
//! - The store itself never journals; callers decide what counts as
//!   user-visible activity.

use crate::model::project::Project;
use crate::model::task::Task;
use log::{error, info};
use std::fmt::Display;

const ACTIVITY_TARGET: &str = "activity";

/// Collaborator that records user-visible activity lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityLog;

impl ActivityLog {
    pub fn new() -> Self {
        Self
    }

    pub fn app_started(&self) {
        info!(target: ACTIVITY_TARGET, "application started");
    }

    pub fn app_closed(&self) {
        info!(target: ACTIVITY_TARGET, "application closed");
    }

    pub fn project_created(&self, project: &Project) {
        info!(
            target: ACTIVITY_TARGET,
            "created project `{}` (id={})",
            project.name,
            format_id(project.id)
        );
    }

    pub fn task_created(&self, task: &Task) {
        info!(
            target: ACTIVITY_TARGET,
            "created task `{}` for project id={}",
            task.title,
            task.project_id
        );
    }

    pub fn project_deleted(&self, name: &str, id: i64) {
        info!(target: ACTIVITY_TARGET, "deleted project `{name}` (id={id})");
    }

    pub fn task_deleted(&self, title: &str, id: i64) {
        info!(target: ACTIVITY_TARGET, "deleted task `{title}` (id={id})");
    }

    pub fn error(&self, err: &dyn Display) {
        error!(target: ACTIVITY_TARGET, "{err}");
    }

    /// Free-form activity line for events without a dedicated shape.
    pub fn activity(&self, message: &str) {
        info!(target: ACTIVITY_TARGET, "{message}");
    }
}

fn format_id(id: Option<i64>) -> String {
    id.map_or_else(|| "unassigned".to_string(), |value| value.to_string())
}
