//! Tracking command implementations.
//!
//! Handles starting and stopping sleep sessions and showing the current one.

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::core::tracker::SleepTracker;
use crate::error::KipError;
use crate::output::{format_duration, format_session, to_json};

/// Start tracking a new sleep session.
pub fn start(tracker: &mut SleepTracker, format: OutputFormat) -> Result<String, KipError> {
    let session = tracker.start()?;

    match format {
        OutputFormat::Json => to_json(&session),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push("😴 Sleep tracking started".green().to_string());
            output.push(format!(
                "   Started: {}",
                session.started_at_local().format("%Y-%m-%d %H:%M")
            ));
            output.push(String::new());
            output.push("   Use 'kip stop' when you wake up".dimmed().to_string());

            Ok(output.join("\n"))
        }
    }
}

/// Stop the session currently being tracked.
pub fn stop(tracker: &mut SleepTracker, format: OutputFormat) -> Result<String, KipError> {
    let Some(session) = tracker.stop()? else {
        return match format {
            OutputFormat::Json => Ok("null".to_string()),
            OutputFormat::Pretty => Ok("No sleep session is being tracked".dimmed().to_string()),
        };
    };

    match format {
        OutputFormat::Json => to_json(&session),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push("☀️ Good morning!".green().to_string());

            if let Some(duration) = session.duration() {
                output.push(format!("   Slept: {}", format_duration(duration)));
            }

            if let Some(id) = session.id {
                output.push(String::new());
                output.push(
                    format!("   Rate this night with 'kip rate <quality>' (session #{id})")
                        .dimmed()
                        .to_string(),
                );
            }

            Ok(output.join("\n"))
        }
    }
}

/// Show the session currently being tracked.
pub fn status(tracker: &SleepTracker, format: OutputFormat) -> Result<String, KipError> {
    match tracker.open_session() {
        None => match format {
            OutputFormat::Json => Ok("null".to_string()),
            OutputFormat::Pretty => {
                let mut output = Vec::new();
                output.push("Not tracking".to_string());
                output.push("   Use 'kip start' when you go to bed".dimmed().to_string());
                Ok(output.join("\n"))
            }
        },
        Some(session) => match format {
            OutputFormat::Json => to_json(session),
            OutputFormat::Pretty => {
                let mut output = Vec::new();
                output.push("😴 Tracking sleep".yellow().to_string());
                output.push(format_session(session, format)?);
                Ok(output.join("\n"))
            }
        },
    }
}
