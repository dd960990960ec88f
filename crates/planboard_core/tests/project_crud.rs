use chrono::NaiveDate;
use planboard_core::db::open_db_in_memory;
use planboard_core::{Project, ProjectRepository, ProjectStatus, SqliteProjectRepository};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn sample_project(name: &str) -> Project {
    Project {
        id: None,
        name: name.to_string(),
        description: "Описание тестового проекта".to_string(),
        start_date: date(2024, 1, 1),
        end_date: Some(date(2024, 12, 31)),
        status: ProjectStatus::Planning,
        budget: 100_000.0,
        team_size: 5,
    }
}

#[test]
fn empty_database_lists_no_projects() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    assert!(repo.list_projects().unwrap().is_empty());
}

#[test]
fn insert_and_list_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    let project = sample_project("Тестовый проект");
    let id = repo.insert_project(&project).unwrap();
    assert!(id > 0);

    let listed = repo.list_projects().unwrap();
    assert_eq!(listed.len(), 1);

    let mut expected = project.clone();
    expected.id = Some(id);
    assert_eq!(listed[0], expected);
}

#[test]
fn null_end_date_survives_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    let mut project = sample_project("Без срока окончания");
    project.end_date = None;
    repo.insert_project(&project).unwrap();

    let listed = repo.list_projects().unwrap();
    assert_eq!(listed[0].end_date, None);
}

#[test]
fn listing_orders_most_recent_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    repo.insert_project(&sample_project("первый")).unwrap();
    repo.insert_project(&sample_project("второй")).unwrap();
    repo.insert_project(&sample_project("третий")).unwrap();

    let names: Vec<String> = repo
        .list_projects()
        .unwrap()
        .into_iter()
        .map(|project| project.name)
        .collect();
    assert_eq!(names, ["третий", "второй", "первый"]);
}

#[test]
fn caller_set_id_is_ignored_on_insert() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    let mut project = sample_project("с предустановленным id");
    project.id = Some(777);
    let id = repo.insert_project(&project).unwrap();

    assert_ne!(id, 777);
    let listed = repo.list_projects().unwrap();
    assert_eq!(listed[0].id, Some(id));
}

#[test]
fn delete_existing_project_returns_true() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    let id = repo.insert_project(&sample_project("на удаление")).unwrap();

    assert!(repo.delete_project(id).unwrap());
    assert!(repo.list_projects().unwrap().is_empty());
}

#[test]
fn delete_missing_project_returns_false() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    assert!(!repo.delete_project(99_999).unwrap());
}

#[test]
fn enum_and_date_fields_roundtrip_for_every_status() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProjectRepository::new(&conn);

    for status in ProjectStatus::ALL {
        let mut project = sample_project(status.label());
        project.status = status;
        repo.insert_project(&project).unwrap();
    }

    let listed = repo.list_projects().unwrap();
    assert_eq!(listed.len(), ProjectStatus::ALL.len());
    for project in listed {
        assert_eq!(project.name, project.status.label());
    }
}
