//! Database migrations for kip.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::KipError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, KipError> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| KipError::Database(format!("Failed to get schema version: {e}")))?;

    Ok(version)
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), KipError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| KipError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), KipError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), KipError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(KipError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// Creates the `sleep_sessions` table. Timestamps are stored as integer
/// milliseconds since the epoch; an open session has `end_time_ms` equal to
/// `start_time_ms`, and an unrated session has `quality_rating` of -1.
fn migrate_v1(conn: &Connection) -> Result<(), KipError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS sleep_sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            start_time_ms INTEGER NOT NULL,
            end_time_ms INTEGER NOT NULL,
            quality_rating INTEGER NOT NULL DEFAULT -1
        );

        CREATE INDEX IF NOT EXISTS idx_sleep_sessions_start
        ON sleep_sessions(start_time_ms);
        ",
    )
    .map_err(|e| KipError::Database(format!("Migration v1 failed: {e}")))
}
