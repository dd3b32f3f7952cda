use clap::Parser;
use colored::Colorize;

use kip::cli::args::{Cli, Commands};
use kip::cli::commands;
use kip::config::{ColorSetting, Config, Paths};
use kip::core::tracker::SleepTracker;
use kip::error::KipError;
use kip::storage::{Database, SessionStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), KipError> {
    let cli = Cli::parse();

    // Completions need no config or database
    if let Commands::Completions { shell } = &cli.command {
        print!("{}", commands::completions(*shell)?);
        return Ok(());
    }

    let paths = cli
        .data_dir
        .clone()
        .map_or_else(Paths::new, |root| Ok(Paths::with_root(root)))?;
    paths.ensure_dirs()?;

    let config = Config::load_from_path(&paths.config_file)?;
    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let format = cli.output.unwrap_or(config.general.default_output);

    // The database is opened once here and handed down; the tracker is the
    // only writer of session state.
    let db = Database::open_at(&paths.database)?;
    let mut tracker = SleepTracker::new(SessionStore::new(db))?;

    let output = match cli.command {
        Commands::Start => commands::start(&mut tracker, format)?,
        Commands::Stop => commands::stop(&mut tracker, format)?,
        Commands::Status => commands::status(&tracker, format)?,
        Commands::Rate { quality, session } => {
            commands::rate(&mut tracker, &quality, session, format)?
        }
        Commands::History { limit } => commands::history(
            &tracker,
            limit.unwrap_or(config.history.default_limit),
            format,
        )?,
        Commands::Clear { force } => commands::clear(&mut tracker, force, format)?,
        Commands::Completions { .. } => String::new(),
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
