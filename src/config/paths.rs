//! Path resolution for kip configuration and data files.
//!
//! All kip data is stored in `~/.kip/`:
//! - `config.yaml` - Main configuration file
//! - `kip.db` - SQLite database holding the sleep history
//!
//! The root can be overridden with the `KIP_DIR` environment variable or the
//! `--data-dir` flag.

use std::path::PathBuf;

use crate::error::KipError;

/// Paths to kip configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.kip/`
    pub root: PathBuf,
    /// Config file: `~/.kip/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.kip/kip.db`
    pub database: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, KipError> {
        let home = std::env::var("HOME")
            .map_err(|_| KipError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".kip")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("kip.db"),
            root,
        }
    }

    /// Ensure the data directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), KipError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                KipError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".kip"))
        })
    }
}
