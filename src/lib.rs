//! kip - A sleep tracking CLI
//!
//! This crate records sleep sessions (start, end, quality rating) in a local
//! SQLite database and provides a command-line interface for tracking them.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use core::quality::SleepQuality;
pub use core::session::SleepSession;
pub use core::tracker::SleepTracker;
pub use error::KipError;
pub use storage::{Database, SessionStore};
