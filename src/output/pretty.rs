use chrono::Duration;
use colored::Colorize;

use crate::core::quality::SleepQuality;
use crate::core::session::SleepSession;

/// Format a list of sessions as a pretty table
pub fn format_sessions_pretty(sessions: &[SleepSession], title: &str) -> String {
    if sessions.is_empty() {
        return format!("{} (0 nights)\n  No sleep recorded yet", title);
    }

    let mut output = format!("{} ({} nights)\n", title, sessions.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for session in sessions {
        output.push_str(&format_session_line(session));
        output.push('\n');
    }

    output
}

/// Format a single session as one history line
fn format_session_line(session: &SleepSession) -> String {
    let id = session
        .id
        .map_or_else(|| "-".to_string(), |id| format!("#{id}"));

    let started = session.started_at_local().format("%a %Y-%m-%d %H:%M");

    let mut line = format!("{} {}", id.dimmed(), started.to_string().bold());

    if session.is_open() {
        line.push_str(&format!("  {}", "tracking...".yellow()));
    } else {
        let ended = session.ended_at_local().format("%H:%M");
        line.push_str(&format!(" → {}", ended));

        if let Some(duration) = session.duration() {
            line.push_str(&format!("  {}", format_duration(duration).cyan()));
        }

        line.push_str(&format!("  {}", format_quality(session)));
    }

    line
}

/// Format a single session as pretty output
pub fn format_session_pretty(session: &SleepSession) -> String {
    let mut output = String::new();

    if let Some(id) = session.id {
        output.push_str(&format!("  {}: {}\n", "ID".dimmed(), id));
    }

    output.push_str(&format!(
        "  {}: {}\n",
        "Started".dimmed(),
        session.started_at_local().format("%Y-%m-%d %H:%M")
    ));

    if session.is_open() {
        output.push_str(&format!(
            "  {}: {}\n",
            "Elapsed".dimmed(),
            format_duration(session.elapsed())
        ));
    } else {
        output.push_str(&format!(
            "  {}: {}\n",
            "Ended".dimmed(),
            session.ended_at_local().format("%Y-%m-%d %H:%M")
        ));

        if let Some(duration) = session.duration() {
            output.push_str(&format!(
                "  {}: {}\n",
                "Slept".dimmed(),
                format_duration(duration)
            ));
        }

        output.push_str(&format!(
            "  {}: {}\n",
            "Quality".dimmed(),
            format_quality(session)
        ));
    }

    output
}

/// Quality label, colored by band
fn format_quality(session: &SleepSession) -> String {
    session.quality().map_or_else(
        || "unrated".dimmed().to_string(),
        |quality| match quality {
            SleepQuality::VeryBad | SleepQuality::Poor => quality.label().red().to_string(),
            SleepQuality::SoSo | SleepQuality::Ok => quality.label().yellow().to_string(),
            SleepQuality::PrettyGood | SleepQuality::Excellent => {
                quality.label().green().to_string()
            }
        },
    )
}

/// Format a duration as a short string (e.g., "25m", "7h 30m").
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_closed(start: i64, end: i64, rating: i64) -> SleepSession {
        SleepSession {
            id: Some(7),
            start_time_ms: start,
            end_time_ms: end,
            quality_rating: rating,
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(25)), "25m");
        assert_eq!(format_duration(Duration::minutes(450)), "7h 30m");
        assert_eq!(format_duration(Duration::minutes(0)), "0m");
    }

    #[test]
    fn test_empty_history() {
        let output = format_sessions_pretty(&[], "Sleep history");
        assert!(output.contains("0 nights"));
        assert!(output.contains("No sleep recorded yet"));
    }

    #[test]
    fn test_history_lists_each_session() {
        colored::control::set_override(false);
        let sessions = vec![
            make_closed(3_600_000, 7_200_000, 5),
            make_closed(0, 1_800_000, -1),
        ];

        let output = format_sessions_pretty(&sessions, "Sleep history");
        assert!(output.contains("2 nights"));
        assert!(output.contains("#7"));
        assert!(output.contains("excellent"));
        assert!(output.contains("unrated"));
    }

    #[test]
    fn test_open_session_line_shows_tracking() {
        colored::control::set_override(false);
        let session = SleepSession::begun_at(0);

        let output = format_sessions_pretty(&[session], "Sleep history");
        assert!(output.contains("tracking..."));
    }

    #[test]
    fn test_session_detail_closed() {
        colored::control::set_override(false);
        let session = make_closed(0, 27_000_000, 4);

        let output = format_session_pretty(&session);
        assert!(output.contains("ID"));
        assert!(output.contains("7h 30m"));
        assert!(output.contains("pretty good"));
    }
}
