//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `planboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use planboard_core::{ActivityLog, TrackerStore};

const DB_FILE: &str = "planboard.db";

fn main() {
    if let Err(err) = run() {
        eprintln!("planboard: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    if let Ok(current_dir) = std::env::current_dir() {
        let log_dir = current_dir.join("logs");
        if let Some(log_dir) = log_dir.to_str() {
            // Smoke runs stay usable even when logging cannot start.
            if let Err(err) = planboard_core::init_logging(
                planboard_core::default_log_level(),
                log_dir,
            ) {
                eprintln!("planboard: logging disabled: {err}");
            }
        }
    }

    let activity = ActivityLog::new();
    activity.app_started();

    let store = TrackerStore::open(DB_FILE)?;
    let projects = store.list_projects()?;

    println!("planboard_core version={}", planboard_core::core_version());
    println!("db={DB_FILE} projects={}", projects.len());
    for project in &projects {
        let id = project.id.unwrap_or_default();
        let tasks = store.list_tasks_for_project(id)?;
        println!(
            "  [{id}] {} status={} tasks={}",
            project.name,
            project.status.label(),
            tasks.len()
        );
    }

    activity.app_closed();
    Ok(())
}
