//! Durable tracker store over a SQLite file.
//!
//! # Responsibility
//! - Expose the create/list/delete surface callers wire their UI against.
//! - Own the connection lifecycle: one short-lived connection per operation.
//!
//! # Invariants
//! - Every operation opens its own connection with `foreign_keys=ON`,
//!   executes, and releases it before returning; no connection or
//!   transaction is held across calls.
//! - Every operation either fully commits or fully fails; cascade deletes
//!   ride on a single SQLite statement.

use crate::db::open_db;
use crate::model::project::Project;
use crate::model::task::Task;
use crate::repo::project_repo::{ProjectRepository, SqliteProjectRepository};
use crate::repo::task_repo::{SqliteTaskRepository, TaskRepository};
use crate::repo::{StoreError, StoreResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Project/task store bound to a database file path.
#[derive(Debug)]
pub struct TrackerStore {
    db_path: PathBuf,
}

impl TrackerStore {
    /// Binds a store to a database file, creating file and schema when
    /// absent. Idempotent across runs.
    ///
    /// # Errors
    /// - `StoreError::Init` when the file cannot be created or opened, or
    ///   the schema cannot be prepared.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self {
            db_path: path.into(),
        };
        // Bootstrap eagerly so file/schema problems surface at startup, not
        // on the first insert.
        store.connect().map_err(StoreError::Init)?;
        Ok(store)
    }

    /// Path of the backing database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> rusqlite::Result<Connection> {
        open_db(&self.db_path)
    }

    /// Inserts a project and returns its assigned id.
    ///
    /// The input's `id` must be unset; a caller-set id is ignored. The
    /// caller is responsible for updating its in-memory copy with the
    /// returned id.
    pub fn add_project(&self, project: &Project) -> StoreResult<i64> {
        let started_at = Instant::now();
        let conn = self.connect().map_err(StoreError::Write)?;
        match SqliteProjectRepository::new(&conn).insert_project(project) {
            Ok(id) => {
                info!(
                    "event=add_project module=store status=ok duration_ms={} id={id}",
                    started_at.elapsed().as_millis()
                );
                Ok(id)
            }
            Err(err) => {
                error!(
                    "event=add_project module=store status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }

    /// Inserts a task and returns its assigned id.
    ///
    /// Fails with `StoreError::Write` when `task.project_id` references no
    /// existing project.
    pub fn add_task(&self, task: &Task) -> StoreResult<i64> {
        let started_at = Instant::now();
        let conn = self.connect().map_err(StoreError::Write)?;
        match SqliteTaskRepository::new(&conn).insert_task(task) {
            Ok(id) => {
                info!(
                    "event=add_task module=store status=ok duration_ms={} id={id} project_id={}",
                    started_at.elapsed().as_millis(),
                    task.project_id
                );
                Ok(id)
            }
            Err(err) => {
                error!(
                    "event=add_task module=store status=error duration_ms={} project_id={} error={err}",
                    started_at.elapsed().as_millis(),
                    task.project_id
                );
                Err(err)
            }
        }
    }

    /// Deletes a project and, atomically with it, every task referencing it.
    ///
    /// Returns `false` when no project matched; that is not an error.
    pub fn delete_project(&self, id: i64) -> StoreResult<bool> {
        let started_at = Instant::now();
        let conn = self.connect().map_err(StoreError::Write)?;
        match SqliteProjectRepository::new(&conn).delete_project(id) {
            Ok(deleted) => {
                info!(
                    "event=delete_project module=store status=ok duration_ms={} id={id} deleted={deleted}",
                    started_at.elapsed().as_millis()
                );
                Ok(deleted)
            }
            Err(err) => {
                error!(
                    "event=delete_project module=store status=error duration_ms={} id={id} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }

    /// Deletes a task. Returns `false` when no task matched.
    pub fn delete_task(&self, id: i64) -> StoreResult<bool> {
        let started_at = Instant::now();
        let conn = self.connect().map_err(StoreError::Write)?;
        match SqliteTaskRepository::new(&conn).delete_task(id) {
            Ok(deleted) => {
                info!(
                    "event=delete_task module=store status=ok duration_ms={} id={id} deleted={deleted}",
                    started_at.elapsed().as_millis()
                );
                Ok(deleted)
            }
            Err(err) => {
                error!(
                    "event=delete_task module=store status=error duration_ms={} id={id} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }

    /// Lists every project, most recently created first.
    pub fn list_projects(&self) -> StoreResult<Vec<Project>> {
        let started_at = Instant::now();
        let conn = self.connect().map_err(StoreError::Read)?;
        match SqliteProjectRepository::new(&conn).list_projects() {
            Ok(projects) => {
                info!(
                    "event=list_projects module=store status=ok duration_ms={} count={}",
                    started_at.elapsed().as_millis(),
                    projects.len()
                );
                Ok(projects)
            }
            Err(err) => {
                error!(
                    "event=list_projects module=store status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }

    /// Lists every task of one project, most recently created first.
    ///
    /// An unknown project id yields an empty list.
    pub fn list_tasks_for_project(&self, project_id: i64) -> StoreResult<Vec<Task>> {
        let started_at = Instant::now();
        let conn = self.connect().map_err(StoreError::Read)?;
        match SqliteTaskRepository::new(&conn).list_tasks_for_project(project_id) {
            Ok(tasks) => {
                info!(
                    "event=list_tasks module=store status=ok duration_ms={} project_id={project_id} count={}",
                    started_at.elapsed().as_millis(),
                    tasks.len()
                );
                Ok(tasks)
            }
            Err(err) => {
                error!(
                    "event=list_tasks module=store status=error duration_ms={} project_id={project_id} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }
}
