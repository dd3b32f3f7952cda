//! Command-line interface for kip.

pub mod args;
pub mod commands;
