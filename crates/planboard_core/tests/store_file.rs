use chrono::NaiveDate;
use planboard_core::{Project, ProjectStatus, StoreError, Task, TaskPriority, TrackerStore};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn sample_project(name: &str) -> Project {
    Project {
        id: None,
        name: name.to_string(),
        description: "Проект для тестирования полного workflow".to_string(),
        start_date: date(2024, 1, 1),
        end_date: Some(date(2024, 6, 30)),
        status: ProjectStatus::Planning,
        budget: 75_000.0,
        team_size: 4,
    }
}

fn sample_task(project_id: i64, title: &str, assignee: &str, priority: TaskPriority) -> Task {
    Task {
        id: None,
        project_id,
        title: title.to_string(),
        description: format!("Описание для {title}"),
        assignee: assignee.to_string(),
        priority,
        deadline: date(2024, 3, 31),
        status: ProjectStatus::Planning,
    }
}

#[test]
fn open_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planboard.db");

    let store = TrackerStore::open(&path).unwrap();
    assert!(path.exists());
    assert_eq!(store.db_path(), path);
    assert!(store.list_projects().unwrap().is_empty());
}

#[test]
fn open_fails_when_parent_directory_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("planboard.db");

    let err = TrackerStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Init(_)));
}

#[test]
fn reopening_preserves_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planboard.db");

    let store = TrackerStore::open(&path).unwrap();
    store.add_project(&sample_project("Сохраняемый проект")).unwrap();
    drop(store);

    let reopened = TrackerStore::open(&path).unwrap();
    let projects = reopened.list_projects().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Сохраняемый проект");
}

#[test]
fn operations_share_no_connection_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planboard.db");

    // Two store handles on the same file: each operation opens and releases
    // its own connection, so writes through one are visible to the other.
    let writer = TrackerStore::open(&path).unwrap();
    let reader = TrackerStore::open(&path).unwrap();

    let id = writer.add_project(&sample_project("Общий файл")).unwrap();
    let seen = reader.list_projects().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].id, Some(id));
}

#[test]
fn null_end_date_survives_the_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = TrackerStore::open(dir.path().join("planboard.db")).unwrap();

    let mut project = sample_project("Без срока");
    project.end_date = None;
    store.add_project(&project).unwrap();

    assert_eq!(store.list_projects().unwrap()[0].end_date, None);
}

#[test]
fn full_workflow_with_cascade_delete() {
    let dir = tempfile::tempdir().unwrap();
    let store = TrackerStore::open(dir.path().join("planboard.db")).unwrap();

    let project_id = store.add_project(&sample_project("Интеграционный тест")).unwrap();

    let tasks_data = [
        ("Анализ требований", "Анна", TaskPriority::High),
        ("Разработка", "Иван", TaskPriority::Medium),
        ("Тестирование", "Петр", TaskPriority::Low),
    ];
    for (title, assignee, priority) in tasks_data {
        store
            .add_task(&sample_task(project_id, title, assignee, priority))
            .unwrap();
    }

    let projects = store.list_projects().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Интеграционный тест");

    // Most recently created first.
    let tasks = store.list_tasks_for_project(project_id).unwrap();
    assert_eq!(tasks.len(), 3);
    let titles: Vec<&str> = tasks.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, ["Тестирование", "Разработка", "Анализ требований"]);

    let task_to_delete = tasks[0].id.unwrap();
    assert!(store.delete_task(task_to_delete).unwrap());
    assert_eq!(store.list_tasks_for_project(project_id).unwrap().len(), 2);

    assert!(store.delete_project(project_id).unwrap());
    assert!(store.list_projects().unwrap().is_empty());
    assert!(store.list_tasks_for_project(project_id).unwrap().is_empty());
}

#[test]
fn task_for_unknown_project_is_rejected_through_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = TrackerStore::open(dir.path().join("planboard.db")).unwrap();

    let err = store
        .add_task(&sample_task(99_999, "сирота", "Никто", TaskPriority::Low))
        .unwrap_err();
    assert!(matches!(err, StoreError::Write(_)));
}

#[test]
fn delete_on_missing_ids_returns_false_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = TrackerStore::open(dir.path().join("planboard.db")).unwrap();

    assert!(!store.delete_project(99_999).unwrap());
    assert!(!store.delete_task(99_999).unwrap());
}
