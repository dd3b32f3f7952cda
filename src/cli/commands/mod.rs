//! Command implementations for kip.
//!
//! This module contains the implementation of all CLI commands. Each command
//! takes the tracker (the single writer for session state) and an output
//! format, and returns the text to print.

mod history;
mod quality;
mod shell;
mod track;

pub use history::{clear, history};
pub use quality::rate;
pub use shell::completions;
pub use track::{start, status, stop};
