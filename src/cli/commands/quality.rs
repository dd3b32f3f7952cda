//! Quality rating command implementation.

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::core::quality::SleepQuality;
use crate::core::tracker::SleepTracker;
use crate::error::KipError;
use crate::output::to_json;

/// Rate a recorded sleep session.
///
/// With no explicit id, the most recent session is rated - normally the one
/// just closed by `kip stop`.
pub fn rate(
    tracker: &mut SleepTracker,
    quality: &str,
    session_id: Option<i64>,
    format: OutputFormat,
) -> Result<String, KipError> {
    let Some(quality) = SleepQuality::parse(quality) else {
        return Err(KipError::Parse(format!(
            "Unknown quality '{quality}'. Use 0-5 or one of: very-bad, poor, so-so, ok, good, excellent."
        )));
    };

    let id = match session_id {
        Some(id) => id,
        None => tracker
            .history()?
            .into_iter()
            .next()
            .and_then(|s| s.id)
            .ok_or_else(|| KipError::NotFound("No sleep sessions recorded yet".to_string()))?,
    };

    let Some(session) = tracker.record_quality(id, quality)? else {
        return Err(KipError::NotFound(format!("No session with id {id}")));
    };

    match format {
        OutputFormat::Json => to_json(&session),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            output.push(format!("⭐ Night #{id} rated {}", quality.label().bold()));
            output.push(
                "   See your nights with 'kip history'"
                    .dimmed()
                    .to_string(),
            );
            Ok(output.join("\n"))
        }
    }
}
