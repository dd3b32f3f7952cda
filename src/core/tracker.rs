//! Sleep session tracking.
//!
//! [`SleepTracker`] is the single writer for session state. It holds the
//! current open session, reconstructed from the store, and sequences the
//! start/stop/rate/clear actions against it. At most one session is open at
//! any time: `start` refuses to run while a session is being tracked.
//!
//! Mutating operations take `&mut self`, so two mutations can never be in
//! flight at once; the in-memory open slot is only written after the store
//! confirms the corresponding write.

use chrono::Utc;

use crate::core::quality::SleepQuality;
use crate::core::session::SleepSession;
use crate::error::KipError;
use crate::storage::SessionStore;

/// Tracks the current sleep session against the store.
pub struct SleepTracker {
    store: SessionStore,
    open: Option<SleepSession>,
}

impl SleepTracker {
    /// Create a tracker over a store, resuming any open session.
    ///
    /// The open session is derived from the most recently inserted row: if
    /// its end time still equals its start time it is open, otherwise there
    /// is nothing to resume.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn new(store: SessionStore) -> Result<Self, KipError> {
        let open = store.latest()?.filter(SleepSession::is_open);
        Ok(Self { store, open })
    }

    /// The session currently being tracked, if any.
    #[must_use]
    pub const fn open_session(&self) -> Option<&SleepSession> {
        self.open.as_ref()
    }

    /// Start tracking a new session now.
    ///
    /// # Errors
    ///
    /// Returns [`KipError::AlreadyTracking`] if a session is already open,
    /// or a database error if the insert fails.
    pub fn start(&mut self) -> Result<SleepSession, KipError> {
        self.start_at(Utc::now().timestamp_millis())
    }

    /// Start tracking a new session at the given timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`KipError::AlreadyTracking`] if a session is already open,
    /// or a database error if the insert fails.
    pub fn start_at(&mut self, now_ms: i64) -> Result<SleepSession, KipError> {
        if let Some(open) = &self.open {
            return Err(KipError::AlreadyTracking(format!(
                "A sleep session is already being tracked (started {}). Stop it first with 'kip stop'.",
                open.started_at_local().format("%Y-%m-%d %H:%M")
            )));
        }

        let id = self.store.insert(&SleepSession::begun_at(now_ms))?;

        // Re-derive the open session from the store rather than trusting the
        // in-memory value we just built.
        let open = self.store.latest()?.filter(SleepSession::is_open);
        self.open.clone_from(&open);

        open.ok_or_else(|| {
            KipError::Database(format!("Inserted session {id} is not visible in the store"))
        })
    }

    /// Stop the session being tracked now.
    ///
    /// Returns the closed session, or `None` if nothing was being tracked.
    /// The returned session's id is what a caller hands to
    /// [`record_quality`](Self::record_quality).
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails; the open session is kept.
    pub fn stop(&mut self) -> Result<Option<SleepSession>, KipError> {
        self.stop_at(Utc::now().timestamp_millis())
    }

    /// Stop the session being tracked at the given timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails; the open session is kept.
    pub fn stop_at(&mut self, now_ms: i64) -> Result<Option<SleepSession>, KipError> {
        let Some(open) = &self.open else {
            return Ok(None);
        };

        let mut closed = open.clone();
        closed.end_time_ms = now_ms;
        self.store.update(&closed)?;

        self.open = None;
        Ok(Some(closed))
    }

    /// Record a quality rating for a session.
    ///
    /// Returns the updated session, or `None` if the id no longer exists
    /// (a benign race, not an error).
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn record_quality(
        &mut self,
        id: i64,
        quality: SleepQuality,
    ) -> Result<Option<SleepSession>, KipError> {
        let Some(mut session) = self.store.get(id)? else {
            return Ok(None);
        };

        session.quality_rating = quality.as_rating();
        self.store.update(&session)?;

        if self.open.as_ref().and_then(|s| s.id) == Some(id) {
            self.open = Some(session.clone());
        }

        Ok(Some(session))
    }

    /// All recorded sessions, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn history(&self) -> Result<Vec<SleepSession>, KipError> {
        self.store.all()
    }

    /// Delete all recorded sessions. Irreversible.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails; the open session is kept.
    pub fn clear(&mut self) -> Result<(), KipError> {
        self.store.clear()?;
        self.open = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;

    fn create_test_tracker() -> SleepTracker {
        let db = Database::open_in_memory().unwrap();
        SleepTracker::new(SessionStore::new(db)).unwrap()
    }

    #[test]
    fn test_start_records_open_session() {
        let mut tracker = create_test_tracker();

        let session = tracker.start_at(1000).unwrap();
        assert_eq!(session.start_time_ms, 1000);
        assert_eq!(session.end_time_ms, 1000);
        assert!(session.is_open());
        assert!(session.id.is_some());
        assert_eq!(tracker.open_session().unwrap().id, session.id);
    }

    #[test]
    fn test_stop_closes_session() {
        let mut tracker = create_test_tracker();

        let started = tracker.start_at(1000).unwrap();
        let closed = tracker.stop_at(5000).unwrap().unwrap();

        assert_eq!(closed.id, started.id);
        assert_eq!(closed.start_time_ms, 1000);
        assert_eq!(closed.end_time_ms, 5000);
        assert!(tracker.open_session().is_none());

        // The close is persisted, not just in memory
        let history = tracker.history().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].end_time_ms, 5000);
    }

    #[test]
    fn test_stop_without_open_session_is_noop() {
        let mut tracker = create_test_tracker();
        assert!(tracker.stop_at(5000).unwrap().is_none());
        assert!(tracker.history().unwrap().is_empty());
    }

    // Starting twice could either stack a second open row or be refused.
    // kip refuses, keeping the single-open-session rule intact.
    #[test]
    fn test_start_while_open_is_rejected() {
        let mut tracker = create_test_tracker();

        tracker.start_at(1000).unwrap();
        let err = tracker.start_at(2000).unwrap_err();
        assert!(matches!(err, KipError::AlreadyTracking(_)));
    }

    #[test]
    fn test_second_start_leaves_single_open_row() {
        let mut tracker = create_test_tracker();

        tracker.start_at(1000).unwrap();
        let _ = tracker.start_at(2000);

        let open_rows: Vec<_> = tracker
            .history()
            .unwrap()
            .into_iter()
            .filter(|s| s.is_open())
            .collect();
        assert_eq!(open_rows.len(), 1);
        assert_eq!(open_rows[0].start_time_ms, 1000);
    }

    #[test]
    fn test_at_most_one_open_row_across_cycles() {
        let mut tracker = create_test_tracker();

        for start in [1000, 10_000, 100_000] {
            tracker.start_at(start).unwrap();
            tracker.stop_at(start + 500).unwrap();
        }
        tracker.start_at(1_000_000).unwrap();

        let open_rows = tracker
            .history()
            .unwrap()
            .into_iter()
            .filter(SleepSession::is_open)
            .count();
        assert_eq!(open_rows, 1);
    }

    #[test]
    fn test_record_quality_sets_only_rating() {
        let mut tracker = create_test_tracker();

        tracker.start_at(1000).unwrap();
        let closed = tracker.stop_at(5000).unwrap().unwrap();
        let id = closed.id.unwrap();

        let rated = tracker
            .record_quality(id, SleepQuality::Ok)
            .unwrap()
            .unwrap();
        assert_eq!(rated.quality_rating, 3);
        assert_eq!(rated.start_time_ms, 1000);
        assert_eq!(rated.end_time_ms, 5000);
    }

    #[test]
    fn test_record_quality_missing_id_is_noop() {
        let mut tracker = create_test_tracker();
        assert!(tracker
            .record_quality(42, SleepQuality::Excellent)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut tracker = create_test_tracker();

        tracker.start_at(1000).unwrap();
        tracker.stop_at(5000).unwrap();
        tracker.start_at(10_000).unwrap();

        tracker.clear().unwrap();
        assert!(tracker.history().unwrap().is_empty());
        assert!(tracker.open_session().is_none());
    }

    #[test]
    fn test_new_tracker_resumes_open_session() {
        let db = Database::open_in_memory().unwrap();
        let store = SessionStore::new(db);
        store.insert(&SleepSession::begun_at(1000)).unwrap();

        let tracker = SleepTracker::new(store).unwrap();
        let open = tracker.open_session().unwrap();
        assert_eq!(open.start_time_ms, 1000);
    }

    #[test]
    fn test_new_tracker_ignores_closed_latest() {
        let db = Database::open_in_memory().unwrap();
        let store = SessionStore::new(db);

        let mut session = SleepSession::begun_at(1000);
        session.id = Some(store.insert(&session).unwrap());
        session.end_time_ms = 5000;
        store.update(&session).unwrap();

        let tracker = SleepTracker::new(store).unwrap();
        assert!(tracker.open_session().is_none());
    }

    #[test]
    fn test_history_most_recent_first() {
        let mut tracker = create_test_tracker();

        for start in [1000, 2000, 3000] {
            tracker.start_at(start).unwrap();
            tracker.stop_at(start + 100).unwrap();
        }

        let history = tracker.history().unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].start_time_ms, 3000);
        assert_eq!(history[2].start_time_ms, 1000);
    }

    #[test]
    fn test_rating_open_session_refreshes_open_slot() {
        let mut tracker = create_test_tracker();

        let open = tracker.start_at(1000).unwrap();
        tracker
            .record_quality(open.id.unwrap(), SleepQuality::Poor)
            .unwrap();

        assert_eq!(tracker.open_session().unwrap().quality_rating, 1);
    }
}
