//! Output formatting for kip.
//!
//! This module provides formatters for displaying sleep sessions in various
//! formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::session::SleepSession;
use crate::error::KipError;

pub use json::*;
pub use pretty::*;

/// Format a list of sessions based on output format
///
/// # Errors
///
/// Returns `KipError::Parse` if JSON serialization fails.
pub fn format_sessions(
    sessions: &[SleepSession],
    title: &str,
    format: OutputFormat,
) -> Result<String, KipError> {
    match format {
        OutputFormat::Pretty => Ok(format_sessions_pretty(sessions, title)),
        OutputFormat::Json => format_sessions_json(sessions, title),
    }
}

/// Format a single session based on output format
///
/// # Errors
///
/// Returns `KipError::Parse` if JSON serialization fails.
pub fn format_session(session: &SleepSession, format: OutputFormat) -> Result<String, KipError> {
    match format {
        OutputFormat::Pretty => Ok(format_session_pretty(session)),
        OutputFormat::Json => to_json(session),
    }
}
