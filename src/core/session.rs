//! The sleep session record.
//!
//! A session is one sleep period: a start timestamp, an end timestamp, and a
//! quality rating. While a session is still being tracked its end timestamp
//! equals its start timestamp; closing the session writes the real end time.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::quality::SleepQuality;

/// Sentinel rating for a session that has not been rated yet.
pub const QUALITY_UNSET: i64 = -1;

/// A single sleep session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSession {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// When the session started, in milliseconds since the epoch
    pub start_time_ms: i64,
    /// When the session ended; equals `start_time_ms` while the session is open
    pub end_time_ms: i64,
    /// Quality rating, 0-5, or [`QUALITY_UNSET`]
    pub quality_rating: i64,
}

impl SleepSession {
    /// Create a new open session starting at the given timestamp.
    #[must_use]
    pub const fn begun_at(now_ms: i64) -> Self {
        Self {
            id: None,
            start_time_ms: now_ms,
            end_time_ms: now_ms,
            quality_rating: QUALITY_UNSET,
        }
    }

    /// Create a new open session starting now.
    #[must_use]
    pub fn begun_now() -> Self {
        Self::begun_at(Utc::now().timestamp_millis())
    }

    /// Whether the session is still open (not yet ended).
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.end_time_ms == self.start_time_ms
    }

    /// The closed session's length, or `None` while it is open.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        if self.is_open() {
            None
        } else {
            Some(Duration::milliseconds(self.end_time_ms - self.start_time_ms))
        }
    }

    /// Time elapsed since the session started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::milliseconds(Utc::now().timestamp_millis() - self.start_time_ms)
    }

    /// The rating as a [`SleepQuality`], or `None` if unrated.
    #[must_use]
    pub fn quality(&self) -> Option<SleepQuality> {
        SleepQuality::from_rating(self.quality_rating)
    }

    /// Start time as a UTC datetime.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        millis_to_datetime(self.start_time_ms)
    }

    /// End time as a UTC datetime. Meaningless while the session is open.
    #[must_use]
    pub fn ended_at(&self) -> DateTime<Utc> {
        millis_to_datetime(self.end_time_ms)
    }

    /// Start time in the local timezone.
    #[must_use]
    pub fn started_at_local(&self) -> DateTime<Local> {
        self.started_at().with_timezone(&Local)
    }

    /// End time in the local timezone.
    #[must_use]
    pub fn ended_at_local(&self) -> DateTime<Local> {
        self.ended_at().with_timezone(&Local)
    }
}

fn millis_to_datetime(ms: i64) -> DateTime<Utc> {
    // timestamp_millis_opt is only ambiguous outside the representable range
    Utc.timestamp_millis_opt(ms).single().unwrap_or_default()
}
