use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "kip")]
#[command(about = "A command-line sleep tracker")]
#[command(long_about = "kip - A sleep tracking CLI

Records your sleep in a local SQLite database: start tracking when you go
to bed, stop when you wake up, then rate how the night went.

QUICK START:
  kip start                 Start tracking tonight's sleep
  kip stop                  Stop tracking when you wake up
  kip rate good             Rate the night you just finished
  kip history               Show recorded nights

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  kip <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    /// When omitted, the config file's general.default_output applies.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Data directory holding the database and config file
    ///
    /// Defaults to ~/.kip
    #[arg(long, env = "KIP_DIR", global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start tracking a sleep session
    ///
    /// Records the current time as the start of a new sleep session.
    /// Only one session can be tracked at a time; if one is already in
    /// progress, stop it first.
    ///
    /// # Examples
    ///
    ///   kip start                 Start tracking now
    ///   kip start -o json         Print the new session as JSON
    #[command(alias = "s")]
    Start,

    /// Stop tracking the current sleep session
    ///
    /// Records the current time as the end of the session being tracked
    /// and prints its id so you can rate it. Does nothing (gracefully) if
    /// no session is in progress.
    ///
    /// # Examples
    ///
    ///   kip stop                  Stop tracking now
    ///   kip stop && kip rate 4    Stop and rate in one go
    Stop,

    /// Show the session currently being tracked
    ///
    /// Prints the start time and elapsed time of the open session, or a
    /// note that nothing is being tracked.
    ///
    /// # Examples
    ///
    ///   kip status
    ///   kip status -o json
    #[command(alias = "st")]
    Status,

    /// Rate a recorded sleep session
    ///
    /// Applies a quality rating to the most recent session, or to an
    /// explicit session id. Quality is a number from 0 (very bad) to 5
    /// (excellent), or a name: very-bad, poor, so-so, ok, good, excellent.
    ///
    /// # Examples
    ///
    ///   kip rate 4                Rate the latest night "pretty good"
    ///   kip rate excellent        Same scale, by name
    ///   kip rate --session 12 2   Rate night #12 "so-so"
    #[command(alias = "r")]
    Rate {
        /// Quality rating: 0-5 or a name (very-bad, poor, so-so, ok, good, excellent)
        quality: String,

        /// Session id to rate (defaults to the most recent session)
        #[arg(short, long, value_name = "ID")]
        session: Option<i64>,
    },

    /// List recorded sleep sessions, most recent first
    ///
    /// Shows each night with its start time, duration, and quality rating.
    ///
    /// # Examples
    ///
    ///   kip history               Show recent nights
    ///   kip history --limit 30    Show more
    ///   kip history -o json       JSON for scripting
    #[command(alias = "h")]
    History {
        /// Maximum number of sessions to show
        #[arg(short, long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Delete all recorded sleep sessions
    ///
    /// This permanently removes every recorded session, including one in
    /// progress. Requires --force.
    ///
    /// # Examples
    ///
    ///   kip clear --force
    Clear {
        /// Actually delete; without this flag nothing happens
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    ///
    /// Prints a completion script for the given shell to stdout.
    ///
    /// # Examples
    ///
    ///   kip completions zsh > ~/.zfunc/_kip
    ///   kip completions bash > /etc/bash_completion.d/kip
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
