//! History and clear command implementations.

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::core::tracker::SleepTracker;
use crate::error::KipError;
use crate::output::format_sessions;

/// List recorded sessions, most recent first.
pub fn history(
    tracker: &SleepTracker,
    limit: usize,
    format: OutputFormat,
) -> Result<String, KipError> {
    let mut sessions = tracker.history()?;
    sessions.truncate(limit);

    format_sessions(&sessions, "Sleep history", format)
}

/// Delete all recorded sessions.
pub fn clear(
    tracker: &mut SleepTracker,
    force: bool,
    format: OutputFormat,
) -> Result<String, KipError> {
    if !force {
        return Ok(format!(
            "{}\n{}",
            "This permanently deletes all recorded sleep.".yellow(),
            "Run 'kip clear --force' to confirm.".dimmed()
        ));
    }

    let count = tracker.history()?.len();
    tracker.clear()?;

    match format {
        OutputFormat::Json => Ok(serde_json::json!({ "cleared": count }).to_string()),
        OutputFormat::Pretty => Ok(format!("🗑️ Cleared {count} recorded sessions")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Database, SessionStore};

    fn create_test_tracker() -> SleepTracker {
        let db = Database::open_in_memory().unwrap();
        SleepTracker::new(SessionStore::new(db)).unwrap()
    }

    fn record_nights(tracker: &mut SleepTracker, count: i64) {
        for i in 0..count {
            tracker.start_at(i * 10_000).unwrap();
            tracker.stop_at(i * 10_000 + 5000).unwrap();
        }
    }

    #[test]
    fn test_history_respects_limit() {
        colored::control::set_override(false);
        let mut tracker = create_test_tracker();
        record_nights(&mut tracker, 5);

        let output = history(&tracker, 3, OutputFormat::Pretty).unwrap();
        assert!(output.contains("3 nights"));
    }

    #[test]
    fn test_history_empty() {
        colored::control::set_override(false);
        let tracker = create_test_tracker();

        let output = history(&tracker, 14, OutputFormat::Pretty).unwrap();
        assert!(output.contains("No sleep recorded yet"));
    }

    #[test]
    fn test_clear_requires_force() {
        colored::control::set_override(false);
        let mut tracker = create_test_tracker();
        record_nights(&mut tracker, 2);

        let output = clear(&mut tracker, false, OutputFormat::Pretty).unwrap();
        assert!(output.contains("--force"));
        assert_eq!(tracker.history().unwrap().len(), 2);
    }

    #[test]
    fn test_clear_with_force() {
        colored::control::set_override(false);
        let mut tracker = create_test_tracker();
        record_nights(&mut tracker, 2);

        let output = clear(&mut tracker, true, OutputFormat::Pretty).unwrap();
        assert!(output.contains("Cleared 2"));
        assert!(tracker.history().unwrap().is_empty());
        assert!(tracker.open_session().is_none());
    }
}
