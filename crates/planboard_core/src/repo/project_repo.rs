//! Project repository contract and SQLite implementation.

use crate::model::project::Project;
use crate::model::status::ProjectStatus;
use crate::repo::{date_from_db, date_to_db, StoreError, StoreResult};
use rusqlite::{params, Connection, Row};

const PROJECT_SELECT_SQL: &str = "SELECT
    id,
    name,
    description,
    start_date,
    end_date,
    status,
    budget,
    team_size
FROM projects";

/// Repository interface for project rows.
pub trait ProjectRepository {
    fn insert_project(&self, project: &Project) -> StoreResult<i64>;
    fn delete_project(&self, id: i64) -> StoreResult<bool>;
    fn list_projects(&self) -> StoreResult<Vec<Project>>;
}

/// SQLite-backed project repository over a borrowed connection.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    /// Inserts a new project row and returns the assigned id.
    ///
    /// The `id` field is never bound; a caller-set id is ignored.
    fn insert_project(&self, project: &Project) -> StoreResult<i64> {
        self.conn
            .execute(
                "INSERT INTO projects (
                    name,
                    description,
                    start_date,
                    end_date,
                    status,
                    budget,
                    team_size
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    project.name.as_str(),
                    project.description.as_str(),
                    date_to_db(project.start_date),
                    project.end_date.map(date_to_db),
                    project.status.label(),
                    project.budget,
                    project.team_size,
                ],
            )
            .map_err(StoreError::Write)?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Deletes a project row; tasks referencing it go with it via the
    /// `ON DELETE CASCADE` clause in one atomic statement.
    ///
    /// Returns `false` when no row matched.
    fn delete_project(&self, id: i64) -> StoreResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM projects WHERE id = ?1;", [id])
            .map_err(StoreError::Write)?;
        Ok(changed > 0)
    }

    /// Lists every project, most recently created first.
    fn list_projects(&self) -> StoreResult<Vec<Project>> {
        // created_at has second resolution; id breaks ties for same-second
        // inserts.
        let mut stmt = self
            .conn
            .prepare(&format!(
                "{PROJECT_SELECT_SQL} ORDER BY created_at DESC, id DESC;"
            ))
            .map_err(StoreError::Read)?;

        let mut rows = stmt.query([]).map_err(StoreError::Read)?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next().map_err(StoreError::Read)? {
            projects.push(parse_project_row(row)?);
        }
        Ok(projects)
    }
}

fn parse_project_row(row: &Row<'_>) -> StoreResult<Project> {
    let start_text: String = row.get("start_date").map_err(StoreError::Read)?;
    let start_date = date_from_db(&start_text).ok_or_else(|| {
        StoreError::InvalidRow(format!("invalid date `{start_text}` in projects.start_date"))
    })?;

    // An unparseable optional end date degrades to None instead of failing
    // the row.
    let end_date = row
        .get::<_, Option<String>>("end_date")
        .map_err(StoreError::Read)?
        .as_deref()
        .and_then(date_from_db);

    let status_text: String = row.get("status").map_err(StoreError::Read)?;
    let status = ProjectStatus::from_label(&status_text).map_err(|_| {
        StoreError::InvalidRow(format!("invalid status `{status_text}` in projects.status"))
    })?;

    Ok(Project {
        id: Some(row.get("id").map_err(StoreError::Read)?),
        name: row.get("name").map_err(StoreError::Read)?,
        description: row
            .get::<_, Option<String>>("description")
            .map_err(StoreError::Read)?
            .unwrap_or_default(),
        start_date,
        end_date,
        status,
        budget: row.get("budget").map_err(StoreError::Read)?,
        team_size: row.get("team_size").map_err(StoreError::Read)?,
    })
}
