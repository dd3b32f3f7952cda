//! Storage layer for kip.
//!
//! This module provides SQLite-based persistence for sleep session records.

mod database;
mod migrations;
mod sessions;

pub use database::Database;
pub use sessions::SessionStore;
