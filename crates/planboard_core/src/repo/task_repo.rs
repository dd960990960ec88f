//! Task repository contract and SQLite implementation.

use crate::model::status::{ProjectStatus, TaskPriority};
use crate::model::task::Task;
use crate::repo::{date_from_db, date_to_db, StoreError, StoreResult};
use rusqlite::{params, Connection, Row};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    project_id,
    title,
    description,
    assignee,
    priority,
    deadline,
    status
FROM tasks";

/// Repository interface for task rows.
pub trait TaskRepository {
    fn insert_task(&self, task: &Task) -> StoreResult<i64>;
    fn delete_task(&self, id: i64) -> StoreResult<bool>;
    fn list_tasks_for_project(&self, project_id: i64) -> StoreResult<Vec<Task>>;
}

/// SQLite-backed task repository over a borrowed connection.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    /// Inserts a new task row and returns the assigned id.
    ///
    /// Fails with a write error when `project_id` references no existing
    /// project; the foreign-key constraint rejects the statement and nothing
    /// is persisted. A caller-set `id` is ignored.
    fn insert_task(&self, task: &Task) -> StoreResult<i64> {
        self.conn
            .execute(
                "INSERT INTO tasks (
                    project_id,
                    title,
                    description,
                    assignee,
                    priority,
                    deadline,
                    status
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    task.project_id,
                    task.title.as_str(),
                    task.description.as_str(),
                    task.assignee.as_str(),
                    task.priority.label(),
                    date_to_db(task.deadline),
                    task.status.label(),
                ],
            )
            .map_err(StoreError::Write)?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Deletes a task row. Returns `false` when no row matched.
    fn delete_task(&self, id: i64) -> StoreResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1;", [id])
            .map_err(StoreError::Write)?;
        Ok(changed > 0)
    }

    /// Lists every task of one project, most recently created first.
    ///
    /// An unknown project id yields an empty list, indistinguishable from a
    /// project without tasks.
    fn list_tasks_for_project(&self, project_id: i64) -> StoreResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!(
                "{TASK_SELECT_SQL} WHERE project_id = ?1 ORDER BY created_at DESC, id DESC;"
            ))
            .map_err(StoreError::Read)?;

        let mut rows = stmt.query([project_id]).map_err(StoreError::Read)?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next().map_err(StoreError::Read)? {
            tasks.push(parse_task_row(row)?);
        }
        Ok(tasks)
    }
}

fn parse_task_row(row: &Row<'_>) -> StoreResult<Task> {
    let priority_text: String = row.get("priority").map_err(StoreError::Read)?;
    let priority = TaskPriority::from_label(&priority_text).map_err(|_| {
        StoreError::InvalidRow(format!("invalid priority `{priority_text}` in tasks.priority"))
    })?;

    let deadline_text: String = row.get("deadline").map_err(StoreError::Read)?;
    let deadline = date_from_db(&deadline_text).ok_or_else(|| {
        StoreError::InvalidRow(format!("invalid date `{deadline_text}` in tasks.deadline"))
    })?;

    let status_text: String = row.get("status").map_err(StoreError::Read)?;
    let status = ProjectStatus::from_label(&status_text).map_err(|_| {
        StoreError::InvalidRow(format!("invalid status `{status_text}` in tasks.status"))
    })?;

    Ok(Task {
        id: Some(row.get("id").map_err(StoreError::Read)?),
        project_id: row.get("project_id").map_err(StoreError::Read)?,
        title: row.get("title").map_err(StoreError::Read)?,
        description: row
            .get::<_, Option<String>>("description")
            .map_err(StoreError::Read)?
            .unwrap_or_default(),
        assignee: row.get("assignee").map_err(StoreError::Read)?,
        priority,
        deadline,
        status,
    })
}
