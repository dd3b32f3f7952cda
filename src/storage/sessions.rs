//! Sleep session storage.
//!
//! Persists sleep sessions to the local database. The store does no
//! concurrent-write arbitration of its own; callers are expected to
//! serialize mutations (see [`crate::core::tracker::SleepTracker`]).

use rusqlite::{params, OptionalExtension, Row};

use crate::core::session::SleepSession;
use crate::error::KipError;
use crate::storage::Database;

/// Storage for sleep sessions.
pub struct SessionStore {
    db: Database,
}

impl SessionStore {
    /// Create a store over an open database.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Insert a new session and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert(&self, session: &SleepSession) -> Result<i64, KipError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO sleep_sessions (start_time_ms, end_time_ms, quality_rating)
              VALUES (?1, ?2, ?3)",
            params![
                session.start_time_ms,
                session.end_time_ms,
                session.quality_rating,
            ],
        )
        .map_err(|e| KipError::Database(format!("Failed to insert session: {e}")))?;

        Ok(conn.last_insert_rowid())
    }

    /// Replace the stored row for a session, keyed by its id.
    ///
    /// Updating an id that matches no row is a no-op; callers only update
    /// rows they previously fetched.
    ///
    /// # Errors
    ///
    /// Returns an error if the session was never persisted or the update
    /// fails.
    pub fn update(&self, session: &SleepSession) -> Result<(), KipError> {
        let Some(id) = session.id else {
            return Err(KipError::Database(
                "Cannot update a session that has not been inserted".to_string(),
            ));
        };

        self.db
            .connection()
            .execute(
                r"UPDATE sleep_sessions SET
                  start_time_ms = ?1,
                  end_time_ms = ?2,
                  quality_rating = ?3
                  WHERE id = ?4",
                params![
                    session.start_time_ms,
                    session.end_time_ms,
                    session.quality_rating,
                    id,
                ],
            )
            .map_err(|e| KipError::Database(format!("Failed to update session: {e}")))?;

        Ok(())
    }

    /// Get a session by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<SleepSession>, KipError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, start_time_ms, end_time_ms, quality_rating
                  FROM sleep_sessions WHERE id = ?1",
            )
            .map_err(|e| KipError::Database(format!("Failed to prepare query: {e}")))?;

        let result = stmt
            .query_row([id], row_to_session)
            .optional()
            .map_err(|e| KipError::Database(format!("Failed to query session: {e}")))?;

        Ok(result)
    }

    /// Get the most recently inserted session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn latest(&self) -> Result<Option<SleepSession>, KipError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, start_time_ms, end_time_ms, quality_rating
                  FROM sleep_sessions
                  ORDER BY id DESC
                  LIMIT 1",
            )
            .map_err(|e| KipError::Database(format!("Failed to prepare query: {e}")))?;

        let result = stmt
            .query_row([], row_to_session)
            .optional()
            .map_err(|e| KipError::Database(format!("Failed to query latest session: {e}")))?;

        Ok(result)
    }

    /// Get all sessions, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn all(&self) -> Result<Vec<SleepSession>, KipError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(
                r"SELECT id, start_time_ms, end_time_ms, quality_rating
                  FROM sleep_sessions
                  ORDER BY id DESC",
            )
            .map_err(|e| KipError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_to_session)
            .map_err(|e| KipError::Database(format!("Failed to query sessions: {e}")))?;

        let mut sessions = Vec::new();
        for row in rows {
            sessions.push(row.map_err(|e| KipError::Database(e.to_string()))?);
        }

        Ok(sessions)
    }

    /// Delete all sessions. Irreversible.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear(&self) -> Result<(), KipError> {
        self.db
            .connection()
            .execute("DELETE FROM sleep_sessions", [])
            .map_err(|e| KipError::Database(format!("Failed to clear sessions: {e}")))?;

        Ok(())
    }
}

/// Convert a database row to a `SleepSession`.
fn row_to_session(row: &Row<'_>) -> Result<SleepSession, rusqlite::Error> {
    Ok(SleepSession {
        id: Some(row.get(0)?),
        start_time_ms: row.get(1)?,
        end_time_ms: row.get(2)?,
        quality_rating: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_store() -> SessionStore {
        let db = Database::open_in_memory().unwrap();
        SessionStore::new(db)
    }

    #[test]
    fn test_insert_and_get_round_trip() {
        let store = create_test_store();

        let session = SleepSession::begun_at(1000);
        let id = store.insert(&session).unwrap();

        let loaded = store.get(id).unwrap().unwrap();
        assert_eq!(loaded.id, Some(id));
        assert_eq!(loaded.start_time_ms, session.start_time_ms);
        assert_eq!(loaded.end_time_ms, session.end_time_ms);
        assert_eq!(loaded.quality_rating, session.quality_rating);
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = create_test_store();
        assert!(store.get(42).unwrap().is_none());
    }

    #[test]
    fn test_latest() {
        let store = create_test_store();
        assert!(store.latest().unwrap().is_none());

        store.insert(&SleepSession::begun_at(1000)).unwrap();
        let second = store.insert(&SleepSession::begun_at(2000)).unwrap();

        let latest = store.latest().unwrap().unwrap();
        assert_eq!(latest.id, Some(second));
        assert_eq!(latest.start_time_ms, 2000);
    }

    #[test]
    fn test_all_most_recent_first() {
        let store = create_test_store();

        for start in [1000, 2000, 3000] {
            store.insert(&SleepSession::begun_at(start)).unwrap();
        }

        let sessions = store.all().unwrap();
        assert_eq!(sessions.len(), 3);
        assert_eq!(sessions[0].start_time_ms, 3000);
        assert_eq!(sessions[2].start_time_ms, 1000);
    }

    #[test]
    fn test_update() {
        let store = create_test_store();

        let mut session = SleepSession::begun_at(1000);
        session.id = Some(store.insert(&session).unwrap());

        session.end_time_ms = 5000;
        session.quality_rating = 4;
        store.update(&session).unwrap();

        let loaded = store.get(session.id.unwrap()).unwrap().unwrap();
        assert_eq!(loaded.end_time_ms, 5000);
        assert_eq!(loaded.quality_rating, 4);
    }

    #[test]
    fn test_update_missing_row_is_noop() {
        let store = create_test_store();

        let mut session = SleepSession::begun_at(1000);
        session.id = Some(999);

        store.update(&session).unwrap();
        assert!(store.get(999).unwrap().is_none());
    }

    #[test]
    fn test_update_unsaved_session_fails() {
        let store = create_test_store();
        let session = SleepSession::begun_at(1000);

        assert!(store.update(&session).is_err());
    }

    #[test]
    fn test_clear() {
        let store = create_test_store();

        store.insert(&SleepSession::begun_at(1000)).unwrap();
        store.insert(&SleepSession::begun_at(2000)).unwrap();

        store.clear().unwrap();
        assert!(store.all().unwrap().is_empty());
        assert!(store.latest().unwrap().is_none());
    }
}
