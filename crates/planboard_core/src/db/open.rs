//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas required by core behavior.
//! - Ensure the schema exists before returning a usable connection.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`.
//! - Returned connections have both tables created.

use log::error;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Opens a SQLite database file, creating it and the schema when absent.
///
/// # Side effects
/// - Emits an `event=db_open` error log when bootstrap fails.
pub fn open_db(path: impl AsRef<Path>) -> rusqlite::Result<Connection> {
    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=db_open module=db status=error mode=file error={err}");
            return Err(err);
        }
    };

    if let Err(err) = bootstrap_connection(&conn) {
        error!("event=db_open module=db status=error mode=file error={err}");
        return Err(err);
    }
    Ok(conn)
}

/// Opens an in-memory SQLite database with the schema created.
///
/// Data lives only as long as the returned connection.
pub fn open_db_in_memory() -> rusqlite::Result<Connection> {
    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=db_open module=db status=error mode=memory error={err}");
            return Err(err);
        }
    };

    if let Err(err) = bootstrap_connection(&conn) {
        error!("event=db_open module=db status=error mode=memory error={err}");
        return Err(err);
    }
    Ok(conn)
}

fn bootstrap_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
