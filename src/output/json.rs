//! JSON output formatting for kip.

use serde::Serialize;
use serde_json::json;

use crate::core::session::SleepSession;
use crate::error::KipError;

/// Format sessions as JSON
///
/// # Errors
///
/// Returns `KipError::Parse` if JSON serialization fails.
pub fn format_sessions_json(sessions: &[SleepSession], list_name: &str) -> Result<String, KipError> {
    let output = json!({
        "list": list_name,
        "count": sessions.len(),
        "items": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `KipError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, KipError> {
    Ok(serde_json::to_string_pretty(value)?)
}
