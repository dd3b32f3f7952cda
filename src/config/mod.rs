//! Configuration management for kip.
//!
//! This module handles loading and saving configuration from `~/.kip/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, HistoryConfig};
